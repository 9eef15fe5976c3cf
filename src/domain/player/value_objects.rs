use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing role of a cricketer in the catalog
///
/// The set is closed: every count, tally and rule in the crate is keyed by
/// one of these four variants. Wire and database names use the cricket
/// spelling (`All-Rounder`, `Wicket-Keeper`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "player_position")]
pub enum Position {
    Batsman,
    Bowler,
    #[serde(rename = "All-Rounder")]
    #[sqlx(rename = "All-Rounder")]
    AllRounder,
    #[serde(rename = "Wicket-Keeper")]
    #[sqlx(rename = "Wicket-Keeper")]
    WicketKeeper,
}

impl Position {
    /// Every position, in display order
    pub const ALL: [Position; 4] = [
        Position::Batsman,
        Position::Bowler,
        Position::AllRounder,
        Position::WicketKeeper,
    ];

    /// Returns the canonical name (`"All-Rounder"` etc.)
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Batsman => "Batsman",
            Position::Bowler => "Bowler",
            Position::AllRounder => "All-Rounder",
            Position::WicketKeeper => "Wicket-Keeper",
        }
    }

    /// Returns the name used when counting more than one player
    ///
    /// # Example
    /// ```
    /// use fantasy_cricket_api::domain::player::Position;
    ///
    /// assert_eq!(Position::Batsman.label(1), "Batsman");
    /// assert_eq!(Position::Batsman.label(3), "Batsmen");
    /// ```
    pub fn label(&self, count: usize) -> &'static str {
        if count == 1 {
            return self.as_str();
        }
        match self {
            Position::Batsman => "Batsmen",
            Position::Bowler => "Bowlers",
            Position::AllRounder => "All-Rounders",
            Position::WicketKeeper => "Wicket-Keepers",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown position: {}", s))
    }
}
