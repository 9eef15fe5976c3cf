use thiserror::Error;
use uuid::Uuid;

use crate::domain::repositories::RepositoryError;
use crate::domain::roster::ValidationError;
use crate::domain::team::CaptaincyError;

/// Reasons team creation can fail
///
/// All kinds except `StorageFailure` are caused by the request and will
/// fail again unless the request changes.
#[derive(Debug, Error)]
pub enum TeamCreationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid captaincy: {0}")]
    InvalidCaptain(#[from] CaptaincyError),

    #[error("Team name already exists: {0}")]
    DuplicateName(String),

    #[error("Storage failure: {0}")]
    StorageFailure(#[source] RepositoryError),
}

impl TeamCreationError {
    /// Stable tag identifying the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            TeamCreationError::Validation(err) => err.kind(),
            TeamCreationError::InvalidCaptain(_) => "InvalidCaptain",
            TeamCreationError::DuplicateName(_) => "DuplicateName",
            TeamCreationError::StorageFailure(_) => "StorageFailure",
        }
    }
}

impl From<RepositoryError> for TeamCreationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate { key, .. } => TeamCreationError::DuplicateName(key),
            other => TeamCreationError::StorageFailure(other),
        }
    }
}

/// Reasons a team lookup can fail
#[derive(Debug, Error)]
pub enum TeamQueryError {
    #[error("Team not found: {0}")]
    NotFound(Uuid),

    #[error("Storage failure: {0}")]
    StorageFailure(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_duplicate_becomes_duplicate_name() {
        let err: TeamCreationError = RepositoryError::duplicate("team", "Royal XI").into();

        assert!(matches!(err, TeamCreationError::DuplicateName(ref name) if name == "Royal XI"));
        assert_eq!(err.kind(), "DuplicateName");
    }

    #[test]
    fn other_repository_errors_are_storage_failures() {
        let err: TeamCreationError = RepositoryError::Query("connection reset".to_string()).into();

        assert_eq!(err.kind(), "StorageFailure");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn validation_kinds_pass_through() {
        let err: TeamCreationError = ValidationError::UnknownPlayer { missing: vec![] }.into();
        assert_eq!(err.kind(), "UnknownPlayer");
    }
}
