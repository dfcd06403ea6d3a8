//! Depth-limited search in turn-based games with one maximising protagonist
//! and any number of opponents, which either minimise or act at random.

mod agent;
mod alpha_beta;
mod config;
mod evaluators;
mod expectimax;
mod game_state;
mod minimax;
mod reflex;
mod tree_search;

pub use agent::{AdversarialAlgorithm, Decision, MultiAgentSearch};
pub use config::{AgentConfig, ConfigError, DEFAULT_DEPTH};
pub use evaluators::{
    composite_evaluation, score_evaluation, Evaluator, EvaluatorRegistry, COMPOSITE_EVALUATOR,
    DEFAULT_EVALUATOR,
};
pub use game_state::{GameState, Position, SpatialState};
pub use reflex::{choose_best_index, reflex_score, ReflexAgent};
pub use tree_search::TreeStatistics;
