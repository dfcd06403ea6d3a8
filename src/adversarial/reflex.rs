//! One-ply decisions: score every immediate action with a static formula and
//! pick among the best at random.

use crate::adversarial::{GameState, SpatialState};
use rand::{seq::SliceRandom, Rng};

const THREAT_DISTANCE_WEIGHT: f64 = 10.;
const NEAREST_RESOURCE_WEIGHT: f64 = -100.;
const TOTAL_RESOURCE_WEIGHT: f64 = -0.1;

/// Score the protagonist playing `action` in `state`. Standing still or
/// stepping onto a threat is never acceptable and scores negative infinity.
///
/// Resource distances are measured against the resources of the current
/// state, so stepping onto a resource counts as being at distance zero.
pub fn reflex_score<S>(state: &S, action: &S::Action) -> f64
where
    S: GameState + SpatialState,
{
    let successor = state.successor(0, action);
    let position = successor.agent_position();
    let threats = successor.threat_positions();
    if position == state.agent_position() || threats.contains(&position) {
        return f64::NEG_INFINITY;
    }

    let resource_distances: Vec<i32> = state
        .resource_positions()
        .iter()
        .map(|resource| position.manhattan_distance(resource))
        .collect();
    let nearest_threat = threats
        .iter()
        .map(|threat| position.manhattan_distance(threat))
        .min()
        .unwrap_or(0);
    let nearest_resource = resource_distances.iter().copied().min().unwrap_or(0);
    let total_resource: i32 = resource_distances.iter().sum();

    THREAT_DISTANCE_WEIGHT * f64::from(nearest_threat)
        + NEAREST_RESOURCE_WEIGHT * f64::from(nearest_resource)
        + TOTAL_RESOURCE_WEIGHT * f64::from(total_resource)
}

/// Index of a maximal score, chosen uniformly among all maximal scores.
pub fn choose_best_index<R: Rng + ?Sized>(scores: &[f64], rng: &mut R) -> Option<usize> {
    let best_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let best_indices: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score == best_score)
        .map(|(index, _)| index)
        .collect();
    best_indices.choose(rng).copied()
}

/// Plays the protagonist by looking a single move ahead.
#[derive(Debug)]
pub struct ReflexAgent<R> {
    rng: R,
}

impl<R: Rng> ReflexAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn get_action<S>(&mut self, state: &S) -> Option<S::Action>
    where
        S: GameState + SpatialState,
    {
        let legal_actions = state.legal_actions(0);
        let scores: Vec<f64> = legal_actions
            .iter()
            .map(|action| reflex_score(state, action))
            .collect();
        let chosen_index = choose_best_index(&scores, &mut self.rng)?;
        Some(legal_actions[chosen_index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adversarial::Position, test_utils::*};
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn ties_are_broken_uniformly() {
        let mut rng = StdRng::seed_from_u64(11);
        let chosen: HashSet<usize> = (0..200)
            .map(|_| choose_best_index(&[10., 10., 2.], &mut rng).unwrap())
            .collect();
        assert_eq!(chosen, HashSet::from([0, 1]));
    }

    #[test]
    fn single_best_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(choose_best_index(&[1., 5., 2.], &mut rng), Some(1));
        }
        assert_eq!(choose_best_index(&[], &mut rng), None);
    }

    #[test]
    fn all_forbidden_still_chooses() {
        let mut rng = StdRng::seed_from_u64(5);
        let scores = [f64::NEG_INFINITY, f64::NEG_INFINITY];
        assert!(choose_best_index(&scores, &mut rng).is_some());
    }

    #[test]
    fn standing_still_and_threats_are_forbidden() {
        let state = CorridorGame::new(2, vec![4], vec![1]);
        assert_eq!(reflex_score(&state, &0), f64::NEG_INFINITY);
        assert_eq!(reflex_score(&state, &-1), f64::NEG_INFINITY);
        assert!(reflex_score(&state, &1).is_finite());
    }

    #[test]
    fn prefers_moving_towards_resources() {
        let state = CorridorGame::new(2, vec![4], vec![]);
        // Moving right ends one step from the resource, left ends three away
        assert_approx_eq!(reflex_score(&state, &1), -100.1, 1e-9);
        assert_approx_eq!(reflex_score(&state, &-1), -300.3, 1e-9);

        let mut agent = ReflexAgent::new(StdRng::seed_from_u64(0));
        assert_eq!(agent.get_action(&state), Some(1));
    }

    #[test]
    fn rewards_distance_from_threats() {
        let state = CorridorGame::new(5, vec![], vec![2]);
        assert_eq!(reflex_score(&state, &1), 40.);
        assert_eq!(reflex_score(&state, &-1), 20.);
        assert_eq!(state.agent_position(), Position::new(5, 0));
    }
}
