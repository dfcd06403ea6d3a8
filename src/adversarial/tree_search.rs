//! State shared by the recursive game-tree searches. Each search owns one of
//! these for the duration of a single decision.

use crate::adversarial::{Evaluator, GameState};

/// The best action found at a node, if the node is not a leaf, and the value
/// of the node.
pub(crate) type Valuation<A> = (Option<A>, f64);

/// Counters collected while searching a game tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStatistics {
    /// Number of states scored by the evaluator
    pub evaluated_leaves: usize,
    /// Number of states whose actions were enumerated and searched
    pub expanded_nodes: usize,
}

pub(crate) struct TreeSearch<S> {
    depth_limit: usize,
    evaluator: Evaluator<S>,
    statistics: TreeStatistics,
}

impl<S: GameState> TreeSearch<S> {
    pub fn new(depth_limit: usize, evaluator: Evaluator<S>) -> Self {
        Self {
            depth_limit,
            evaluator,
            statistics: TreeStatistics::default(),
        }
    }

    /// The actions to search from the given node, or `None` if the node is a
    /// leaf, either because the agent to move has no legal actions or
    /// because the depth limit has been reached.
    pub fn actions_to_search(
        &mut self,
        state: &S,
        depth: usize,
        agent_index: usize,
    ) -> Option<Vec<S::Action>> {
        if depth == self.depth_limit {
            return None;
        }
        let actions = state.legal_actions(agent_index);
        if actions.is_empty() {
            return None;
        }
        self.statistics.expanded_nodes += 1;
        Some(actions)
    }

    pub fn evaluate_leaf(&mut self, state: &S) -> f64 {
        self.statistics.evaluated_leaves += 1;
        (self.evaluator)(state)
    }

    pub fn statistics(&self) -> TreeStatistics {
        self.statistics
    }
}

/// The agent to move next and the depth it moves at. The depth only grows
/// once the last agent has moved.
pub(crate) fn next_turn(agent_index: usize, depth: usize, num_agents: usize) -> (usize, usize) {
    if agent_index + 1 >= num_agents {
        (0, depth + 1)
    } else {
        (agent_index + 1, depth)
    }
}

/// Whether `value` should replace `best_value` at a node, given whether the
/// node maximises. Comparisons are strict, so the first of several equally
/// good actions is kept.
pub(crate) fn improves(value: f64, best_value: f64, maximising: bool) -> bool {
    if maximising {
        value > best_value
    } else {
        value < best_value
    }
}
