//! Uniform cost graph search.

use crate::search::{
    frontier::{CostFrontier, SearchNode},
    search_engines::{SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    Heuristic, Plan, SearchProblem,
};
use ordered_float::OrderedFloat;
use std::collections::HashSet;
use tracing::trace;

/// Uniform cost search. Every state is in the frontier at most once, keyed by
/// the cost of the cheapest path to it found so far.
#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for UCS {
    fn search(
        &mut self,
        problem: &P,
        _heuristic: &mut dyn Heuristic<P>,
        termination_condition: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut explored = HashSet::new();
        let mut frontier = CostFrontier::new();
        frontier.push(SearchNode::root(problem.start_state()), OrderedFloat(0.));

        while let Some((node, g_value)) = frontier.pop() {
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

            trace!(state = ?node.state, g_value = g_value.into_inner(), "expanding");
            statistics.increment_expanded_nodes();
            explored.insert(node.state.clone());

            let successors = problem.successors(&node.state);
            statistics.increment_generated_nodes(successors.len());
            for successor in successors {
                if explored.contains(&successor.state) {
                    continue;
                }
                let child = node.child(successor.state, successor.action);
                let child_cost = problem.path_cost(&child.actions);

                if !frontier.contains(&child.state) {
                    frontier.push(child, child_cost);
                    statistics.increment_pushed_nodes();
                } else if frontier.decrease_key(child, child_cost) {
                    statistics.increment_decreased_keys();
                }
            }
            termination_condition.log_if_needed();
        }

        statistics.finalise_search();

        termination_condition.finalise();
        (SearchResult::Unsolvable, statistics)
    }
}

/// Run uniform cost search without limits, returning the actions reaching a
/// goal or no actions if there is none.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    UCS::new()
        .search(
            problem,
            &mut crate::search::ZeroHeuristic::new(),
            &mut TerminationCondition::unlimited(),
        )
        .0
        .into_actions()
}
