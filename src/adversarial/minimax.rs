//! Minimax search, every opponent plays the protagonist's worst case.

use crate::adversarial::{
    tree_search::{improves, next_turn, TreeSearch, Valuation},
    GameState,
};

impl<S: GameState> TreeSearch<S> {
    /// Plain minimax, every opponent minimises.
    pub(crate) fn minimax(
        &mut self,
        state: &S,
        depth: usize,
        agent_index: usize,
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
            let (_, value) = self.minimax(&successor, next_depth, next_agent);
            if best_action.is_none() || improves(value, best_value, maximising) {
                best_value = value;
                best_action = Some(action);
            }
        }
        (best_action, best_value)
    }
}
