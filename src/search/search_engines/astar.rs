//! A* graph search with lazy duplicate detection.

use crate::search::{
    frontier::{HeuristicFrontier, SearchNode},
    search_engines::{SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    Heuristic, Plan, SearchProblem,
};
use std::collections::HashSet;
use tracing::trace;

/// A* search. Nodes are ordered by `g + h` and never updated in place, so the
/// same state may be in the frontier several times. Entries whose state has
/// already been expanded are dropped when they are popped.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for AStar {
    fn search(
        &mut self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P>,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut explored = HashSet::new();
        let mut frontier = HeuristicFrontier::new();

        let root = SearchNode::root(problem.start_state());
        let h_value = heuristic.evaluate(&root.state, problem);
        statistics.register_heuristic_value(h_value);
        frontier.push(root, problem.path_cost(&[]) + h_value);

        while let Some((node, f_value)) = frontier.pop() {
            if explored.contains(&node.state) {
                statistics.increment_stale_pops();
                continue;
            }
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

            trace!(state = ?node.state, f_value = f_value.into_inner(), "expanding");
            statistics.increment_expanded_nodes();
            explored.insert(node.state.clone());

            let successors = problem.successors(&node.state);
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if explored.contains(&successor.state) {
                    continue;
                }
                let child = node.child(successor.state, successor.action);
                let h_value = heuristic.evaluate(&child.state, problem);
                statistics.register_heuristic_value(h_value);
                let f_value = problem.path_cost(&child.actions) + h_value;
                frontier.push(child, f_value);
                statistics.increment_pushed_nodes();
            }
            termination_condition.log_if_needed();
        }

        statistics.finalise_search();

        termination_condition.finalise();
        (SearchResult::Unsolvable, statistics)
    }
}

/// Run A* without limits, returning the actions reaching a goal or no
/// actions if there is none.
pub fn a_star_search<P, H>(problem: &P, mut heuristic: H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    AStar::new()
        .search(
            problem,
            &mut heuristic,
            &mut TerminationCondition::unlimited(),
        )
        .0
        .into_actions()
}
