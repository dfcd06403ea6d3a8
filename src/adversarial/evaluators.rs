//! Static evaluation functions applied at the leaves of a game tree, and the
//! registry they are looked up in by name.

use crate::adversarial::{ConfigError, GameState, Position, SpatialState};
use std::{collections::HashMap, fmt};

pub type Evaluator<S> = fn(&S) -> f64;

pub const DEFAULT_EVALUATOR: &str = "score";
pub const COMPOSITE_EVALUATOR: &str = "better";

/// Weight of the distance to the nearest resource in [`composite_evaluation`].
const RESOURCE_DISTANCE_WEIGHT: f64 = -1.0;
/// Weight of the distance to the nearest threat in [`composite_evaluation`].
const THREAT_DISTANCE_WEIGHT: f64 = 1.0 / 3.0;

/// The game's built-in score.
pub fn score_evaluation<S: GameState>(state: &S) -> f64 {
    state.score()
}

/// The built-in score, adjusted by how far the nearest resource and the
/// nearest threat are from the protagonist. A missing resource or threat
/// contributes nothing.
pub fn composite_evaluation<S: GameState + SpatialState>(state: &S) -> f64 {
    let position = state.agent_position();
    let nearest = |positions: Vec<Position>| {
        positions
            .iter()
            .map(|other| position.manhattan_distance(other))
            .min()
            .unwrap_or(0)
    };
    let resource_distance = nearest(state.resource_positions());
    let threat_distance = nearest(state.threat_positions());

    state.score()
        + RESOURCE_DISTANCE_WEIGHT * f64::from(resource_distance)
        + THREAT_DISTANCE_WEIGHT * f64::from(threat_distance)
}

/// A mapping from names to evaluators. The adversarial agents resolve their
/// evaluator against one of these when they are constructed.
pub struct EvaluatorRegistry<S> {
    evaluators: HashMap<String, Evaluator<S>>,
}

impl<S> EvaluatorRegistry<S> {
    pub fn empty() -> Self {
        Self {
            evaluators: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, evaluator: Evaluator<S>) -> &mut Self {
        self.evaluators.insert(name.into(), evaluator);
        self
    }

    pub fn get(&self, name: &str) -> Result<Evaluator<S>, ConfigError> {
        self.evaluators
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::UnknownEvaluator {
                name: name.to_string(),
                known: self.names().join(", "),
            })
    }

    /// The registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.evaluators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: GameState> EvaluatorRegistry<S> {
    /// A registry holding only the built-in score.
    pub fn with_score() -> Self {
        let mut registry = Self::empty();
        registry.register(DEFAULT_EVALUATOR, score_evaluation::<S>);
        registry
    }
}

impl<S: GameState + SpatialState> EvaluatorRegistry<S> {
    /// The built-in score plus the composite evaluator.
    pub fn standard() -> Self {
        let mut registry = Self::with_score();
        registry.register(COMPOSITE_EVALUATOR, composite_evaluation::<S>);
        registry
    }
}

impl<S> fmt::Debug for EvaluatorRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatorRegistry")
            .field("evaluators", &self.names())
            .finish()
    }
}
