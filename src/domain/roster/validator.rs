use std::collections::HashMap;
use uuid::Uuid;

use super::candidate::RosterCandidate;
use super::errors::ValidationError;
use super::rules::CompositionRuleSet;
use super::tally::PositionTally;
use crate::domain::player::Player;
use crate::domain::team::TeamName;

/// Successful validation outcome
///
/// Carries everything persistence and statistics need, so ids never have
/// to be resolved a second time. Only [`RosterValidator`] produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    name: TeamName,
    players: Vec<Player>,
    tally: PositionTally,
}

impl Verdict {
    pub fn name(&self) -> &TeamName {
        &self.name
    }

    /// Resolved players, in the order they were submitted
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tally(&self) -> &PositionTally {
        &self.tally
    }

    pub fn contains(&self, player_id: Uuid) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }
}

/// Decides whether a selection of players forms a legal team
///
/// Checks run in a fixed order and stop at the first failure:
/// name, squad size, catalog resolution, position rules, derived rules.
/// Validation has no side effects; the same input always yields the same
/// result.
///
/// # Example
/// ```
/// use fantasy_cricket_api::domain::roster::{RosterValidator, ValidationError};
/// use std::collections::HashMap;
///
/// let validator = RosterValidator::default();
/// let err = validator.check("ab", &[], &HashMap::new()).unwrap_err();
/// assert!(matches!(err, ValidationError::InvalidName { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterValidator {
    rules: CompositionRuleSet,
}

impl RosterValidator {
    pub fn new(rules: CompositionRuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CompositionRuleSet {
        &self.rules
    }

    /// Name and size checks only
    pub fn candidate(
        &self,
        raw_name: &str,
        player_ids: &[Uuid],
    ) -> Result<RosterCandidate, ValidationError> {
        RosterCandidate::new(raw_name, player_ids, self.rules.squad_size())
    }

    /// Resolves a candidate against a catalog snapshot and applies the rules
    pub fn validate(
        &self,
        candidate: RosterCandidate,
        catalog: &HashMap<Uuid, Player>,
    ) -> Result<Verdict, ValidationError> {
        let missing: Vec<Uuid> = candidate
            .player_ids()
            .iter()
            .filter(|id| !catalog.contains_key(id))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::UnknownPlayer { missing });
        }

        let players: Vec<Player> = candidate
            .player_ids()
            .iter()
            .filter_map(|id| catalog.get(id).cloned())
            .collect();

        let tally = PositionTally::from_players(&players);
        tracing::debug!(team = %candidate.name(), ?tally, "Evaluating composition rules");

        self.rules.evaluate(&tally)?;

        Ok(Verdict {
            name: candidate.name().clone(),
            players,
            tally,
        })
    }

    /// Runs every check for a raw name and id list
    pub fn check(
        &self,
        raw_name: &str,
        player_ids: &[Uuid],
        catalog: &HashMap<Uuid, Player>,
    ) -> Result<Verdict, ValidationError> {
        let candidate = self.candidate(raw_name, player_ids)?;
        self.validate(candidate, catalog)
    }
}
