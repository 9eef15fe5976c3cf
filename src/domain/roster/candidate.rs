use std::collections::HashSet;
use uuid::Uuid;

use super::errors::ValidationError;
use crate::domain::team::TeamName;

/// A team name and player selection that passed the shape checks
///
/// Building a candidate normalizes the name and enforces the squad size
/// with no duplicates. It does not touch the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterCandidate {
    name: TeamName,
    player_ids: Vec<Uuid>,
}

impl RosterCandidate {
    pub fn new(
        raw_name: &str,
        player_ids: &[Uuid],
        squad_size: usize,
    ) -> Result<Self, ValidationError> {
        let name = TeamName::new(raw_name)?;

        let distinct = player_ids.iter().collect::<HashSet<_>>().len();
        if distinct != squad_size || distinct != player_ids.len() {
            return Err(ValidationError::InvalidSize {
                expected: squad_size,
                submitted: player_ids.len(),
                distinct,
            });
        }

        Ok(Self {
            name,
            player_ids: player_ids.to_vec(),
        })
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    pub fn player_ids(&self) -> &[Uuid] {
        &self.player_ids
    }
}
