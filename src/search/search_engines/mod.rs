mod astar;
mod bfs;
mod dfs;
mod search_engine;
mod search_statistics;
mod termination_condition;
mod ucs;

pub use astar::{a_star_search, AStar};
pub use bfs::{breadth_first_search, BFS};
pub use dfs::{depth_first_search, DFS};
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
pub use ucs::{uniform_cost_search, UCS};
