//! A small pursuit game on a grid layout. The protagonist collects resources
//! while threats roam the maze, and touching a threat ends the game.

use crate::{
    adversarial::{GameState, Position, SpatialState},
    domains::{Direction, Layout},
};
use rand::{seq::SliceRandom, Rng};
use std::rc::Rc;
use strum::IntoEnumIterator;
use tracing::{debug, info};

const TIME_PENALTY: f64 = 1.;
const RESOURCE_REWARD: f64 = 10.;
const WIN_REWARD: f64 = 500.;
const LOSS_PENALTY: f64 = 500.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct ChaseState {
    layout: Rc<Layout>,
    agent: Position,
    resources: Vec<Position>,
    threats: Vec<Position>,
    score: f64,
    outcome: Outcome,
}

impl ChaseState {
    pub fn new(layout: Layout) -> Self {
        Self {
            agent: layout.start(),
            resources: layout.resources().to_vec(),
            threats: layout.threats().to_vec(),
            layout: Rc::new(layout),
            score: 0.,
            outcome: Outcome::Ongoing,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    fn can_enter(&self, direction: Direction, from: Position) -> bool {
        !self.layout.is_wall(direction.apply(from))
    }
}

impl GameState for ChaseState {
    type Action = Direction;

    /// The protagonist may always stop. Threats keep moving and only stop
    /// when they are boxed in.
    fn legal_actions(&self, agent_index: usize) -> Vec<Direction> {
        if self.is_over() {
            return vec![];
        }
        if agent_index == 0 {
            return Direction::iter()
                .filter(|&direction| self.can_enter(direction, self.agent))
                .collect();
        }
        let position = self.threats[agent_index - 1];
        let moves: Vec<Direction> = Direction::MOVES
            .into_iter()
            .filter(|&direction| self.can_enter(direction, position))
            .collect();
        if moves.is_empty() {
            vec![Direction::Stop]
        } else {
            moves
        }
    }

    fn successor(&self, agent_index: usize, action: &Direction) -> Self {
        let mut next = self.clone();
        if agent_index == 0 {
            next.agent = action.apply(self.agent);
            next.score -= TIME_PENALTY;
            if let Some(index) = next.resources.iter().position(|&r| r == next.agent) {
                next.resources.swap_remove(index);
                next.score += RESOURCE_REWARD;
                if next.resources.is_empty() {
                    next.score += WIN_REWARD;
                    next.outcome = Outcome::Won;
                    return next;
                }
            }
        } else {
            next.threats[agent_index - 1] = action.apply(self.threats[agent_index - 1]);
        }

        if next.threats.contains(&next.agent) {
            next.score -= LOSS_PENALTY;
            next.outcome = Outcome::Lost;
        }
        next
    }

    fn num_agents(&self) -> usize {
        1 + self.threats.len()
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl SpatialState for ChaseState {
    fn agent_position(&self) -> Position {
        self.agent
    }

    fn resource_positions(&self) -> Vec<Position> {
        self.resources.clone()
    }

    fn threat_positions(&self) -> Vec<Position> {
        self.threats.clone()
    }
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub outcome: Outcome,
    pub score: f64,
    pub turns: usize,
}

/// Play a game where the protagonist is driven by `protagonist` and every
/// threat picks uniformly among its legal moves. The game also stops when the
/// protagonist has no action to offer or after `max_turns` rounds.
pub fn play<F, R>(
    mut state: ChaseState,
    mut protagonist: F,
    rng: &mut R,
    max_turns: usize,
) -> GameRecord
where
    F: FnMut(&ChaseState) -> Option<Direction>,
    R: Rng + ?Sized,
{
    let mut turns = 0;
    while turns < max_turns && !state.is_over() {
        let Some(action) = protagonist(&state) else {
            break;
        };
        debug!(turn = turns, position = %state.agent, action = %action);
        state = state.successor(0, &action);

        for threat in 1..state.num_agents() {
            let Some(threat_action) = state.legal_actions(threat).choose(rng).copied() else {
                break;
            };
            state = state.successor(threat, &threat_action);
        }
        turns += 1;
    }

    info!(outcome = %state.outcome, score = state.score, turns);
    GameRecord {
        outcome: state.outcome,
        score: state.score,
        turns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adversarial::{
            AdversarialAlgorithm, EvaluatorRegistry, MultiAgentSearch, ReflexAgent,
            COMPOSITE_EVALUATOR,
        },
        domains::test_layouts::*,
    };
    use rand::{rngs::StdRng, SeedableRng};
    use Direction::*;

    fn chase(text: &str) -> ChaseState {
        ChaseState::new(text.parse().unwrap())
    }

    #[test]
    fn protagonist_may_stop_threats_may_not() {
        let state = chase(SMALL_CHASE);
        assert_eq!(state.num_agents(), 2);
        assert_eq!(state.legal_actions(0), vec![South, East, Stop]);
        // The threat at (5, 3) can go up the east corridor or back west
        assert_eq!(state.legal_actions(1), vec![North, West]);
    }

    #[test]
    fn collecting_a_resource() {
        let state = chase(EASY_CHASE);
        let next = state.successor(0, &East);
        assert_eq!(next.agent_position(), Position::new(2, 1));
        assert!(next.resource_positions().is_empty());
        assert_eq!(next.outcome(), Outcome::Won);
        assert_eq!(next.score(), -TIME_PENALTY + RESOURCE_REWARD + WIN_REWARD);
        assert!(next.legal_actions(0).is_empty());
        assert!(next.legal_actions(1).is_empty());
    }

    #[test]
    fn walking_into_a_threat_loses() {
        let state = chase(SMALL_CHASE);
        let state = state.successor(1, &West).successor(1, &West);
        assert_eq!(state.threat_positions(), vec![Position::new(3, 3)]);
        assert_eq!(state.outcome(), Outcome::Ongoing);

        // Walk the protagonist down the west side and along the bottom row
        let state = [South, South, East]
            .iter()
            .fold(state, |state, action| state.successor(0, action));
        assert_eq!(state.agent_position(), Position::new(2, 3));
        // The resource under the threat is still collected
        let state = state.successor(0, &East);
        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.resource_positions(), vec![Position::new(5, 1)]);
        assert_eq!(
            state.score(),
            -4. * TIME_PENALTY + RESOURCE_REWARD - LOSS_PENALTY
        );
    }

    #[test]
    fn threat_moving_onto_protagonist_loses() {
        let state = chase(SMALL_CHASE).successor(0, &East);
        let state = [North, North, West, West]
            .iter()
            .fold(state, |state, action| state.successor(1, action));
        assert_eq!(state.outcome(), Outcome::Ongoing);
        let state = state.successor(1, &West);
        assert_eq!(state.outcome(), Outcome::Lost);
    }

    #[test]
    fn reflex_agent_wins_easy_game() {
        let mut agent = ReflexAgent::new(StdRng::seed_from_u64(0));
        let mut rng = StdRng::seed_from_u64(1);
        let record = play(
            chase(EASY_CHASE),
            |state| agent.get_action(state),
            &mut rng,
            10,
        );
        assert_eq!(record.outcome, Outcome::Won);
        assert_eq!(record.turns, 1);
    }

    #[test]
    fn search_agents_win_easy_game() {
        let registry = EvaluatorRegistry::standard();
        for algorithm in [
            AdversarialAlgorithm::Minimax,
            AdversarialAlgorithm::AlphaBeta,
            AdversarialAlgorithm::Expectimax,
        ] {
            let agent = MultiAgentSearch::new(algorithm, COMPOSITE_EVALUATOR, 2, &registry).unwrap();
            let mut rng = StdRng::seed_from_u64(2);
            let record = play(
                chase(EASY_CHASE),
                |state| agent.get_action(state),
                &mut rng,
                10,
            );
            assert_eq!(record.outcome, Outcome::Won, "{:?}", algorithm);
        }
    }

    #[test]
    fn game_stops_after_max_turns() {
        let mut rng = StdRng::seed_from_u64(3);
        let record = play(chase(SMALL_CHASE), |_| Some(Stop), &mut rng, 0);
        assert_eq!(record.turns, 0);
        assert_eq!(record.outcome, Outcome::Ongoing);
        assert_eq!(record.score, 0.);
    }
}
