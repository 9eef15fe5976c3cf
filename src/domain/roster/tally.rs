use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::player::{Player, Position};

/// Count of selected players per position
///
/// Every position is present from construction, so a position nobody
/// picked reads as zero rather than missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PositionTally(BTreeMap<Position, usize>);

impl PositionTally {
    /// Creates a tally with every position at zero
    pub fn new() -> Self {
        Self(Position::ALL.into_iter().map(|p| (p, 0)).collect())
    }

    /// Tallies the positions of the given players
    pub fn from_players<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut tally = Self::new();
        for player in players {
            tally.record(player.position);
        }
        tally
    }

    /// Adds one player at `position`
    pub fn record(&mut self, position: Position) {
        *self.0.entry(position).or_insert(0) += 1;
    }

    /// Returns the count for a single position
    pub fn count(&self, position: Position) -> usize {
        self.0.get(&position).copied().unwrap_or(0)
    }

    /// Returns the combined count of several positions
    pub fn sum(&self, positions: &[Position]) -> usize {
        positions.iter().map(|p| self.count(*p)).sum()
    }

    /// Returns the number of players tallied
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, usize)> + '_ {
        self.0.iter().map(|(p, c)| (*p, *c))
    }
}

impl Default for PositionTally {
    fn default() -> Self {
        Self::new()
    }
}
