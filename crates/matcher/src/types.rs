use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::similarity::DEFAULT_THRESHOLD;

/// Matching configuration shared by every query a [`Matcher`](crate::Matcher) answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum partial-ratio score (0–100) a field needs to count as a match.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: u8,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> u8 {
        DEFAULT_THRESHOLD
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.threshold > 100 {
            return Err(MatchError::InvalidConfig(format!(
                "threshold must be between 0 and 100, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
        }
    }
}

/// Errors produced by the matching layer.
///
/// Queries themselves never fail; only construction with a bad config does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
