use crate::adversarial::{
    tree_search::TreeSearch, ConfigError, Evaluator, EvaluatorRegistry, GameState,
    TreeStatistics,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AdversarialAlgorithm {
    #[clap(help = "Minimax, every opponent plays its worst case for the protagonist.")]
    Minimax,
    #[clap(help = "Minimax with alpha-beta pruning, same decisions with fewer evaluations.")]
    AlphaBeta,
    #[clap(help = "Expectimax, every opponent plays uniformly at random.")]
    Expectimax,
}

/// The outcome of searching from one state.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// The protagonist's best action, `None` if the root is a leaf
    pub action: Option<A>,
    /// The value of the root
    pub value: f64,
    pub statistics: TreeStatistics,
}

/// A depth-limited game-tree searcher playing as agent `0`.
pub struct MultiAgentSearch<S> {
    algorithm: AdversarialAlgorithm,
    depth: usize,
    evaluator_name: String,
    evaluator: Evaluator<S>,
}

impl<S: GameState> MultiAgentSearch<S> {
    /// Resolves the evaluator by name, so a misconfigured agent fails here
    /// rather than in the middle of a game.
    pub fn new(
        algorithm: AdversarialAlgorithm,
        evaluator_name: &str,
        depth: usize,
        registry: &EvaluatorRegistry<S>,
    ) -> Result<Self, ConfigError> {
        let evaluator = registry.get(evaluator_name)?;
        Ok(Self {
            algorithm,
            depth,
            evaluator_name: evaluator_name.to_string(),
            evaluator,
        })
    }

    pub fn algorithm(&self) -> AdversarialAlgorithm {
        self.algorithm
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluator_name(&self) -> &str {
        &self.evaluator_name
    }

    pub fn decide(&self, state: &S) -> Decision<S::Action> {
        let mut search = TreeSearch::new(self.depth, self.evaluator);
        let (action, value) = match self.algorithm {
            AdversarialAlgorithm::Minimax => search.minimax(state, 0, 0),
            AdversarialAlgorithm::AlphaBeta => {
                search.alpha_beta(state, 0, 0, f64::NEG_INFINITY, f64::INFINITY)
            }
            AdversarialAlgorithm::Expectimax => search.expectimax(state, 0, 0),
        };
        let statistics = search.statistics();
        debug!(
            algorithm = ?self.algorithm,
            action = ?action,
            value,
            evaluated_leaves = statistics.evaluated_leaves,
            expanded_nodes = statistics.expanded_nodes,
        );
        Decision {
            action,
            value,
            statistics,
        }
    }

    pub fn get_action(&self, state: &S) -> Option<S::Action> {
        self.decide(state).action
    }
}

impl<S> fmt::Debug for MultiAgentSearch<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiAgentSearch")
            .field("algorithm", &self.algorithm)
            .field("depth", &self.depth)
            .field("evaluator", &self.evaluator_name)
            .finish()
    }
}
