use catalog::LoadError;
use matcher::MatchError;
use thiserror::Error;

use crate::config::ConfigLoadError;

/// A query the facade cannot answer because of how it was asked.
///
/// A query that is well formed but matches nothing is not an error; see
/// [`QueryOutcome::NotFound`](crate::QueryOutcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A stock query supplied neither a code nor a description.
    #[error("a code or a description must be supplied")]
    InvalidQuery,
}

/// Failures while building an [`Inventory`](crate::Inventory) at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigLoadError),

    #[error("catalog load failed: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Match(#[from] MatchError),
}
