use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::errors::{Bound, CompositionViolation};
use super::tally::PositionTally;
use crate::domain::player::Position;

/// Number of players in a cricket XI
pub const SQUAD_SIZE: usize = 11;

/// Errors raised while assembling a rule set
#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("Rule '{rule}' has min {min} greater than max {max}")]
    InvalidBound {
        rule: String,
        min: usize,
        max: usize,
    },

    #[error("Derived rule '{0}' must cover at least one position")]
    EmptyDerivedRule(String),

    #[error("Squad size must be positive")]
    InvalidSquadSize,

    #[error("Invalid rule set JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Inclusive count bounds for one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRule {
    pub position: Position,
    pub min: usize,
    pub max: usize,
}

impl PositionRule {
    fn check(&self, tally: &PositionTally) -> Result<(), CompositionViolation> {
        let actual = tally.count(self.position);
        let breach = if actual < self.min {
            Some((Bound::Min, self.min))
        } else if actual > self.max {
            Some((Bound::Max, self.max))
        } else {
            None
        };

        match breach {
            Some((bound, expected)) => Err(CompositionViolation::Position {
                position: self.position,
                bound,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }
}

/// A bound on the combined count of several positions
///
/// `message` may reference `{min}`, `{max}` and `{actual}`; they are
/// substituted when the rule fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRule {
    pub name: String,
    pub positions: Vec<Position>,
    pub min: usize,
    #[serde(default)]
    pub max: Option<usize>,
    pub message: String,
}

impl DerivedRule {
    /// Creates a "combined count at least `min`" rule
    pub fn at_least(
        name: impl Into<String>,
        positions: Vec<Position>,
        min: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            positions,
            min,
            max: None,
            message: message.into(),
        }
    }

    /// Adds an upper bound to the combined count
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    fn check(&self, tally: &PositionTally) -> Result<(), CompositionViolation> {
        let actual = tally.sum(&self.positions);
        let breach = if actual < self.min {
            Some((Bound::Min, self.min))
        } else {
            self.max
                .filter(|max| actual > *max)
                .map(|max| (Bound::Max, max))
        };

        match breach {
            Some((bound, expected)) => Err(CompositionViolation::Derived {
                name: self.name.clone(),
                message: self.render(actual),
                bound,
                expected,
                actual,
            }),
            None => Ok(()),
        }
    }

    fn render(&self, actual: usize) -> String {
        let max = self
            .max
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unbounded".to_string());
        self.message
            .replace("{min}", &self.min.to_string())
            .replace("{max}", &max)
            .replace("{actual}", &actual.to_string())
    }

    fn verify(&self) -> Result<(), RuleSetError> {
        if self.positions.is_empty() {
            return Err(RuleSetError::EmptyDerivedRule(self.name.clone()));
        }
        match self.max {
            Some(max) if self.min > max => Err(RuleSetError::InvalidBound {
                rule: self.name.clone(),
                min: self.min,
                max,
            }),
            _ => Ok(()),
        }
    }
}

/// Ordered composition rules a roster must satisfy
///
/// Rules are evaluated in declaration order: squad size first (by the
/// validator), then position rules, then derived rules. The first failure
/// is the one reported.
///
/// # Example
/// ```
/// use fantasy_cricket_api::domain::player::Position;
/// use fantasy_cricket_api::domain::roster::CompositionRuleSet;
///
/// // Default rules plus exactly one wicket-keeper
/// let rules = CompositionRuleSet::default()
///     .with_position_rule(Position::WicketKeeper, 1, 1)
///     .expect("valid bounds");
///
/// assert_eq!(rules.position_rules().len(), 4);
/// assert!(CompositionRuleSet::default()
///     .with_position_rule(Position::Bowler, 5, 2)
///     .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionRuleSet {
    squad_size: usize,
    #[serde(default)]
    position_rules: Vec<PositionRule>,
    #[serde(default)]
    derived_rules: Vec<DerivedRule>,
}

impl CompositionRuleSet {
    /// Creates an empty rule set for a squad of `squad_size`
    pub fn new(squad_size: usize) -> Result<Self, RuleSetError> {
        if squad_size == 0 {
            return Err(RuleSetError::InvalidSquadSize);
        }
        Ok(Self {
            squad_size,
            position_rules: Vec::new(),
            derived_rules: Vec::new(),
        })
    }

    /// Appends a position rule after the existing ones
    pub fn with_position_rule(
        mut self,
        position: Position,
        min: usize,
        max: usize,
    ) -> Result<Self, RuleSetError> {
        if min > max {
            return Err(RuleSetError::InvalidBound {
                rule: position.to_string(),
                min,
                max,
            });
        }
        self.position_rules.push(PositionRule { position, min, max });
        Ok(self)
    }

    /// Appends a derived rule after the existing ones
    pub fn with_derived_rule(mut self, rule: DerivedRule) -> Result<Self, RuleSetError> {
        rule.verify()?;
        self.derived_rules.push(rule);
        Ok(self)
    }

    /// Parses and checks a rule set from JSON
    pub fn from_json(json: &str) -> Result<Self, RuleSetError> {
        let parsed: CompositionRuleSet = serde_json::from_str(json)?;
        parsed.verify()?;
        Ok(parsed)
    }

    pub fn squad_size(&self) -> usize {
        self.squad_size
    }

    pub fn position_rules(&self) -> &[PositionRule] {
        &self.position_rules
    }

    pub fn derived_rules(&self) -> &[DerivedRule] {
        &self.derived_rules
    }

    /// Checks a tally against position rules, then derived rules
    pub fn evaluate(&self, tally: &PositionTally) -> Result<(), CompositionViolation> {
        for rule in &self.position_rules {
            rule.check(tally)?;
        }
        for rule in &self.derived_rules {
            rule.check(tally)?;
        }
        Ok(())
    }

    fn verify(&self) -> Result<(), RuleSetError> {
        if self.squad_size == 0 {
            return Err(RuleSetError::InvalidSquadSize);
        }
        for rule in &self.position_rules {
            if rule.min > rule.max {
                return Err(RuleSetError::InvalidBound {
                    rule: rule.position.to_string(),
                    min: rule.min,
                    max: rule.max,
                });
            }
        }
        for rule in &self.derived_rules {
            rule.verify()?;
        }
        Ok(())
    }
}

impl Default for CompositionRuleSet {
    /// The standard fantasy XI: 3–5 batsmen, 3–4 bowlers, 1–3 all-rounders
    /// and at least five bowling options
    fn default() -> Self {
        Self {
            squad_size: SQUAD_SIZE,
            position_rules: vec![
                PositionRule {
                    position: Position::Batsman,
                    min: 3,
                    max: 5,
                },
                PositionRule {
                    position: Position::Bowler,
                    min: 3,
                    max: 4,
                },
                PositionRule {
                    position: Position::AllRounder,
                    min: 1,
                    max: 3,
                },
            ],
            derived_rules: vec![DerivedRule::at_least(
                "bowling_options",
                vec![Position::Bowler, Position::AllRounder],
                5,
                "Team must have at least {min} bowling options (Bowlers + All-Rounders)",
            )],
        }
    }
}
