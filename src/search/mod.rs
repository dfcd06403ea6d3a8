//! Single-agent search over an abstract state space. A [`SearchProblem`]
//! supplies states and transitions, and the engines in [`search_engines`]
//! turn it into a [`Plan`].

pub mod frontier;
pub mod heuristics;
mod plan;
mod search_problem;
pub mod search_engines;
mod validate;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use search_engines::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, SearchEngine,
    SearchEngineName, SearchResult, SearchStatistics, TerminationCondition,
};
pub use search_problem::{Cost, SearchProblem, Successor};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
