// Roster composition module
// Rule set, position tally and the validator that gates team creation

pub mod candidate;
pub mod errors;
pub mod rules;
pub mod tally;
pub mod validator;

pub use candidate::RosterCandidate;
pub use errors::{Bound, CompositionViolation, ValidationError};
pub use rules::{CompositionRuleSet, DerivedRule, PositionRule, RuleSetError, SQUAD_SIZE};
pub use tally::PositionTally;
pub use validator::{RosterValidator, Verdict};
