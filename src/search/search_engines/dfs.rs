//! Depth first graph search.

use crate::search::{
    frontier::{SearchNode, StackFrontier},
    search_engines::{SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    Heuristic, Plan, SearchProblem,
};
use std::collections::HashSet;
use tracing::trace;

/// Depth first search. A child is pushed only if its state has not been
/// expanded yet, but the stack may still hold the same state more than once.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for DFS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut explored = HashSet::new();
        let mut frontier = StackFrontier::new();
        frontier.push(SearchNode::root(problem.start_state()));

        while let Some(node) = frontier.pop() {
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
                if !explored.contains(&successor.state) {
                    frontier.push(node.child(successor.state, successor.action));
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

/// Run depth first search without limits, returning the actions reaching a
/// goal or no actions if there is none.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    DFS::new()
        .search(
            problem,
            &mut crate::search::ZeroHeuristic::new(),
            &mut TerminationCondition::unlimited(),
        )
        .0
        .into_actions()
}
