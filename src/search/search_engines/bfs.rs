//! Breadth first graph search.

use crate::search::{
    frontier::{QueueFrontier, SearchNode},
    search_engines::{SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    Heuristic, Plan, SearchProblem,
};
use std::collections::HashSet;
use tracing::trace;

/// Breadth first search. A child is pushed only if its state has neither been
/// expanded nor is currently waiting in the queue.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut explored = HashSet::new();
        let mut queue = QueueFrontier::new();
        queue.push(SearchNode::root(problem.start_state()));

        while let Some(node) = queue.pop() {
            if problem.is_goal(&node.state) {
                statistics.finalise_search();
                termination_condition.finalise();
                return (SearchResult::Success(Plan::new(node.actions)), statistics);
            }
            if let Some(result) = termination_condition.should_terminate(statistics.expanded_nodes())
            {
                statistics.finalise_search();
                termination_condition.finalise();
                return (result, statistics);
            }

            trace!(state = ?node.state, "expanding");
            statistics.increment_expanded_nodes();
            explored.insert(node.state.clone());

            let successors = problem.successors(&node.state);
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if !explored.contains(&successor.state) && !queue.contains(&successor.state) {
                    queue.push(node.child(successor.state, successor.action));
                    statistics.increment_pushed_nodes();
                }
            }
            termination_condition.log_if_needed();
        }

        statistics.finalise_search();

        termination_condition.finalise();
        (SearchResult::Unsolvable, statistics)
    }
}

/// Run breadth first search without limits, returning the actions reaching a
/// goal or no actions if there is none.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    BFS::new()
        .search(
            problem,
            &mut crate::search::ZeroHeuristic::new(),
            &mut TerminationCondition::unlimited(),
        )
        .0
        .into_actions()
}
