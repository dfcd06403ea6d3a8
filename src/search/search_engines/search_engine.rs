use crate::search::{
    search_engines::{SearchStatistics, TerminationCondition, AStar, BFS, DFS, UCS},
    Heuristic, Plan, SearchProblem,
};
use clap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal
    Unsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine expanded as many nodes as it was allowed to
    NodeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    /// The actions of the plan found, or no actions at all if the search did
    /// not succeed.
    pub fn into_actions(self) -> Vec<A> {
        match self {
            SearchResult::Success(plan) => plan.into_actions(),
            _ => vec![],
        }
    }
}

pub trait SearchEngine<P: SearchProblem> {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "dfs", help = "Depth first search, not cost optimal.")]
    DFS,
    #[clap(
        name = "bfs",
        help = "Breadth first search, optimal when all step costs are equal."
    )]
    BFS,
    #[clap(name = "ucs", help = "Uniform cost search, ignores the heuristic.")]
    UCS,
    #[clap(
        name = "astar",
        help = "A* search, optimal with an admissible heuristic."
    )]
    AStar,
}

impl SearchEngineName {
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        match self {
            SearchEngineName::DFS => DFS::new().search(problem, heuristic, termination_condition),
            SearchEngineName::BFS => BFS::new().search(problem, heuristic, termination_condition),
            SearchEngineName::UCS => UCS::new().search(problem, heuristic, termination_condition),
            SearchEngineName::AStar => {
                AStar::new().search(problem, heuristic, termination_condition)
            }
        }
    }
}
