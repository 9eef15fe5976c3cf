use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::player::Position;

/// Which side of a count bound was breached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => write!(f, "min"),
            Bound::Max => write!(f, "max"),
        }
    }
}

/// The first composition rule a roster breaks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CompositionViolation {
    /// A single position's count is outside its bounds
    Position {
        position: Position,
        bound: Bound,
        expected: usize,
        actual: usize,
    },
    /// A cross-position rule failed
    Derived {
        name: String,
        message: String,
        bound: Bound,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for CompositionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionViolation::Position {
                position,
                bound: Bound::Min,
                expected,
                actual,
            } => write!(
                f,
                "Team must have at least {} {} (selected {})",
                expected,
                position.label(*expected),
                actual
            ),
            CompositionViolation::Position {
                position,
                bound: Bound::Max,
                expected,
                actual,
            } => write!(
                f,
                "Team cannot have more than {} {} (selected {})",
                expected,
                position.label(*expected),
                actual
            ),
            CompositionViolation::Derived { message, .. } => f.write_str(message),
        }
    }
}

/// Reasons a roster candidate is rejected by the validator
///
/// Every variant is deterministic for a given input: the validator stops at
/// the first failing check and reports only that one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Team name must be between {min} and {max} characters")]
    InvalidName {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{}", size_message(.expected, .submitted, .distinct))]
    InvalidSize {
        expected: usize,
        submitted: usize,
        distinct: usize,
    },

    #[error("Unknown player id(s): {}", join_ids(.missing))]
    UnknownPlayer { missing: Vec<Uuid> },

    #[error("{0}")]
    CompositionViolation(CompositionViolation),
}

impl ValidationError {
    /// Stable tag identifying the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidName { .. } => "InvalidName",
            ValidationError::InvalidSize { .. } => "InvalidSize",
            ValidationError::UnknownPlayer { .. } => "UnknownPlayer",
            ValidationError::CompositionViolation(_) => "CompositionViolation",
        }
    }
}

impl From<CompositionViolation> for ValidationError {
    fn from(violation: CompositionViolation) -> Self {
        ValidationError::CompositionViolation(violation)
    }
}

fn size_message(expected: &usize, submitted: &usize, distinct: &usize) -> String {
    if submitted != distinct {
        format!(
            "A cricket team must have exactly {} distinct players ({} submitted, {} duplicate)",
            expected,
            submitted,
            submitted - distinct
        )
    } else {
        format!(
            "A cricket team must have exactly {} players (got {})",
            expected, submitted
        )
    }
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_min_message() {
        let violation = CompositionViolation::Position {
            position: Position::Batsman,
            bound: Bound::Min,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            violation.to_string(),
            "Team must have at least 3 Batsmen (selected 2)"
        );
    }

    #[test]
    fn position_max_message_singular() {
        let violation = CompositionViolation::Position {
            position: Position::WicketKeeper,
            bound: Bound::Max,
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            violation.to_string(),
            "Team cannot have more than 1 Wicket-Keeper (selected 2)"
        );
    }

    #[test]
    fn size_message_mentions_duplicates() {
        let err = ValidationError::InvalidSize {
            expected: 11,
            submitted: 11,
            distinct: 10,
        };
        assert!(err.to_string().contains("1 duplicate"));
        assert_eq!(err.kind(), "InvalidSize");
    }

    #[test]
    fn unknown_player_lists_ids() {
        let id = Uuid::new_v4();
        let err = ValidationError::UnknownPlayer { missing: vec![id] };
        assert!(err.to_string().contains(&id.to_string()));
        assert_eq!(err.kind(), "UnknownPlayer");
    }

    #[test]
    fn violation_serializes_with_rule_tag() {
        let violation = CompositionViolation::Position {
            position: Position::Bowler,
            bound: Bound::Max,
            expected: 4,
            actual: 5,
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["rule"], "position");
        assert_eq!(json["position"], "Bowler");
        assert_eq!(json["bound"], "max");
    }
}
