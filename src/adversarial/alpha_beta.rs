//! Minimax with alpha-beta pruning.

use crate::adversarial::{
    tree_search::{improves, next_turn, TreeSearch, Valuation},
    GameState,
};

impl<S: GameState> TreeSearch<S> {
    /// Minimax with alpha-beta pruning. Cut-offs use strict comparisons, so a
    /// sibling is only skipped once the running value is strictly outside the
    /// window.
    pub(crate) fn alpha_beta(
        &mut self,
        state: &S,
        depth: usize,
        agent_index: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> Valuation<S::Action> {
        let Some(actions) = self.actions_to_search(state, depth, agent_index) else {
            return (None, self.evaluate_leaf(state));
        };
        let (next_agent, next_depth) = next_turn(agent_index, depth, state.num_agents());
        let maximising = agent_index == 0;

        let mut best_action = None;
        let mut best_value = if maximising {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for action in actions {
            let successor = state.successor(agent_index, &action);
            let (_, value) = self.alpha_beta(&successor, next_depth, next_agent, alpha, beta);
            if best_action.is_none() || improves(value, best_value, maximising) {
                best_value = value;
                best_action = Some(action);
            }

            if maximising {
                if best_value > beta {
                    break;
                }
                alpha = alpha.max(best_value);
            } else {
                if best_value < alpha {
                    break;
                }
                beta = beta.min(best_value);
            }
        }
        (best_action, best_value)
    }
}
