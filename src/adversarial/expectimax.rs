//! Expectimax search against opponents that move uniformly at random.

use crate::adversarial::{
    tree_search::{improves, next_turn, TreeSearch, Valuation},
    GameState,
};

impl<S: GameState> TreeSearch<S> {
    /// Expectimax, every opponent picks uniformly at random among its legal
    /// actions. Chance nodes have a value but no best action.
    pub(crate) fn expectimax(
        &mut self,
        state: &S,
        depth: usize,
        agent_index: usize,
    ) -> Valuation<S::Action> {
        let Some(actions) = self.actions_to_search(state, depth, agent_index) else {
            return (None, self.evaluate_leaf(state));
        };
        let (next_agent, next_depth) = next_turn(agent_index, depth, state.num_agents());

        if agent_index != 0 {
            let probability = 1.0 / actions.len() as f64;
            let mut expected_value = 0.0;
            for action in actions {
                let successor = state.successor(agent_index, &action);
                let (_, value) = self.expectimax(&successor, next_depth, next_agent);
                expected_value += probability * value;
            }
            return (None, expected_value);
        }

        let mut best_action = None;
        let mut best_value = f64::NEG_INFINITY;
        for action in actions {
            let successor = state.successor(agent_index, &action);
            let (_, value) = self.expectimax(&successor, next_depth, next_agent);
            if best_action.is_none() || improves(value, best_value, true) {
                best_value = value;
                best_action = Some(action);
            }
        }
        (best_action, best_value)
    }
}
