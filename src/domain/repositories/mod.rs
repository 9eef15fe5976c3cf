// Repository ports
// Storage-agnostic contracts implemented by the infrastructure layer

use thiserror::Error;

pub mod player_catalog;
pub mod team_repository;

pub use player_catalog::{PlayerCatalog, PlayerFilter};
pub use team_repository::TeamRepository;

/// Error type for repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint rejected the write
    #[error("Duplicate {entity}: {key} already exists")]
    Duplicate { entity: &'static str, key: String },

    /// The backing store failed or was unreachable
    #[error("Query error: {0}")]
    Query(String),

    /// Stored data could not be turned back into a domain value
    #[error("Corrupt {entity} data: {reason}")]
    Corrupt {
        entity: &'static str,
        reason: String,
    },
}

impl RepositoryError {
    pub fn duplicate(entity: &'static str, key: impl Into<String>) -> Self {
        Self::Duplicate {
            entity,
            key: key.into(),
        }
    }

    pub fn corrupt(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            entity,
            reason: reason.into(),
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Query(err.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
