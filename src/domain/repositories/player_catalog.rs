use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::player::{Player, Position};

/// Listing filter for the catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerFilter {
    /// Position name, matched case-insensitively (`bowler`, `all-rounder`)
    #[serde(default, deserialize_with = "position_name")]
    pub position: Option<Position>,
    /// Case-insensitive substring of the player name
    pub search: Option<String>,
}

/// Parses an optional position through `Position::from_str`; blank means unset
fn position_name<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        let position_ok = self.position.map_or(true, |p| p == player.position);
        let search_ok = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => player
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        };
        position_ok && search_ok
    }
}

/// Read-only player catalog
///
/// The catalog is owned elsewhere; the team workflow only looks players up.
#[async_trait]
pub trait PlayerCatalog: Send + Sync {
    /// Looks up players by id
    ///
    /// Ids with no catalog entry are absent from the returned map; the
    /// caller decides how to report them.
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<HashMap<Uuid, Player>>;

    /// Lists players matching a filter, highest points first, then by name
    async fn list(&self, filter: &PlayerFilter) -> RepositoryResult<Vec<Player>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everyone() {
        let player = Player::new("Jasprit Bumrah", Position::Bowler, "India", 92);
        assert!(PlayerFilter::default().matches(&player));
    }

    #[test]
    fn filter_by_position_and_search() {
        let player = Player::new("Jasprit Bumrah", Position::Bowler, "India", 92);

        let filter = PlayerFilter {
            position: Some(Position::Bowler),
            search: Some("bUmR".to_string()),
        };
        assert!(filter.matches(&player));

        let filter = PlayerFilter {
            position: Some(Position::Batsman),
            search: None,
        };
        assert!(!filter.matches(&player));

        let filter = PlayerFilter {
            position: None,
            search: Some("kohli".to_string()),
        };
        assert!(!filter.matches(&player));
    }

    #[test]
    fn position_filter_ignores_case() {
        let filter: PlayerFilter =
            serde_json::from_str(r#"{"position": "all-rounder"}"#).unwrap();
        assert_eq!(filter.position, Some(Position::AllRounder));

        let filter: PlayerFilter = serde_json::from_str(r#"{"position": " "}"#).unwrap();
        assert_eq!(filter.position, None);

        let filter: PlayerFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.position, None);

        assert!(serde_json::from_str::<PlayerFilter>(r#"{"position": "Captain"}"#).is_err());
    }

    #[test]
    fn blank_search_is_ignored() {
        let player = Player::new("Ben Stokes", Position::AllRounder, "England", 85);
        let filter = PlayerFilter {
            position: None,
            search: Some("   ".to_string()),
        };
        assert!(filter.matches(&player));
    }
}
