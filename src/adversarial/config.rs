//! Agent configuration, either assembled from command line arguments or
//! loaded from a TOML file such as
//!
//! ```toml
//! algorithm = "alpha-beta"
//! depth = 3
//! evaluator = "better"
//! ```

use crate::adversarial::{AdversarialAlgorithm, EvaluatorRegistry, GameState, MultiAgentSearch};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

pub const DEFAULT_DEPTH: usize = 2;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown evaluator `{name}`, known evaluators are: {known}")]
    UnknownEvaluator { name: String, known: String },
    #[error("failed to read agent config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse agent config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AgentConfig {
    pub algorithm: AdversarialAlgorithm,
    #[serde(default = "default_depth")]
    pub depth: usize,
    #[serde(default = "default_evaluator")]
    pub evaluator: String,
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_evaluator() -> String {
    crate::adversarial::DEFAULT_EVALUATOR.to_string()
}

impl AgentConfig {
    pub fn new(algorithm: AdversarialAlgorithm, depth: usize, evaluator: &str) -> Self {
        Self {
            algorithm,
            depth,
            evaluator: evaluator.to_string(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn build<S: GameState>(
        &self,
        registry: &EvaluatorRegistry<S>,
    ) -> Result<MultiAgentSearch<S>, ConfigError> {
        MultiAgentSearch::new(self.algorithm, &self.evaluator, self.depth, registry)
    }
}

impl FromStr for AgentConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn parses_full_config() {
        let config: AgentConfig = r#"
        algorithm = "expectimax"
        depth = 4
        evaluator = "better"
        "#
        .parse()
        .unwrap();
        assert_eq!(
            config,
            AgentConfig::new(AdversarialAlgorithm::Expectimax, 4, "better")
        );
    }

    #[test]
    fn fills_in_defaults() {
        let config: AgentConfig = r#"algorithm = "alpha-beta""#.parse().unwrap();
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.evaluator, "score");
    }

    #[test]
    fn rejects_unknown_keys_and_algorithms() {
        assert!(matches!(
            r#"algorithm = "minimax"
            width = 3"#
                .parse::<AgentConfig>(),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            r#"algorithm = "negamax""#.parse::<AgentConfig>(),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "algorithm = \"minimax\"\ndepth = 1").unwrap();
        let config = AgentConfig::load(file.path()).unwrap();
        assert_eq!(config.algorithm, AdversarialAlgorithm::Minimax);
        assert_eq!(config.depth, 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let directory = tempfile::tempdir().unwrap();
        let result = AgentConfig::load(&directory.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn build_resolves_evaluator() {
        let registry = EvaluatorRegistry::<TreeGame>::with_score();
        let agent = AgentConfig::new(AdversarialAlgorithm::AlphaBeta, 3, "score")
            .build(&registry)
            .unwrap();
        assert_eq!(agent.depth(), 3);
        assert_eq!(agent.evaluator_name(), "score");

        let error = AgentConfig::new(AdversarialAlgorithm::AlphaBeta, 3, "better")
            .build(&registry)
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "unknown evaluator `better`, known evaluators are: score"
        );
    }
}
