use super::events::TeamEvent;
use super::value_objects::TeamName;
use crate::domain::roster::Verdict;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Problems with the captain or vice-captain choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptaincyError {
    #[error("{role} {player_id} is not one of the selected players")]
    NotSelected { role: &'static str, player_id: Uuid },

    #[error("Player {0} cannot be both captain and vice-captain")]
    SamePlayer(Uuid),
}

/// Team aggregate root
///
/// A fantasy XI picked from the player catalog.
///
/// # Invariants
/// - Built only from a validator [`Verdict`], so the selection always met
///   the composition rules at creation time
/// - Captain and vice-captain, when set, are selected players and differ
/// - Never modified after creation
///
/// # Example
/// ```
/// use fantasy_cricket_api::domain::player::{Player, Position};
/// use fantasy_cricket_api::domain::roster::RosterValidator;
/// use fantasy_cricket_api::domain::team::Team;
/// use std::collections::HashMap;
///
/// let mix = [
///     (Position::Batsman, 4),
///     (Position::Bowler, 4),
///     (Position::AllRounder, 2),
///     (Position::WicketKeeper, 1),
/// ];
/// let players: Vec<Player> = mix
///     .iter()
///     .flat_map(|(pos, n)| (0..*n).map(move |i| Player::new(format!("{pos} {i}"), *pos, "Club", 60)))
///     .collect();
/// let ids: Vec<_> = players.iter().map(|p| p.id).collect();
/// let catalog: HashMap<_, _> = players.into_iter().map(|p| (p.id, p)).collect();
///
/// let verdict = RosterValidator::default()
///     .check("Doc XI", &ids, &catalog)
///     .expect("legal roster");
/// let (team, events) = Team::new(&verdict, Some(ids[0]), None).expect("valid team");
///
/// assert_eq!(team.name().as_str(), "Doc XI");
/// assert_eq!(team.player_ids().len(), 11);
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: TeamName,
    player_ids: Vec<Uuid>,
    captain_id: Option<Uuid>,
    vice_captain_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team aggregate from a successful validation
    ///
    /// # Arguments
    /// * `verdict` - Outcome of roster validation
    /// * `captain_id` - Optional captain, must be in the verdict
    /// * `vice_captain_id` - Optional vice-captain, must be in the verdict
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and the Created event
    /// * `Err(CaptaincyError)` - If a leadership pick is invalid
    pub fn new(
        verdict: &Verdict,
        captain_id: Option<Uuid>,
        vice_captain_id: Option<Uuid>,
    ) -> Result<(Self, Vec<TeamEvent>), CaptaincyError> {
        for (role, pick) in [("Captain", captain_id), ("Vice-captain", vice_captain_id)] {
            if let Some(player_id) = pick {
                if !verdict.contains(player_id) {
                    return Err(CaptaincyError::NotSelected { role, player_id });
                }
            }
        }

        if let (Some(captain), Some(vice)) = (captain_id, vice_captain_id) {
            if captain == vice {
                return Err(CaptaincyError::SamePlayer(captain));
            }
        }

        let team = Self {
            id: Uuid::new_v4(),
            name: verdict.name().clone(),
            player_ids: verdict.players().iter().map(|p| p.id).collect(),
            captain_id,
            vice_captain_id,
            created_at: Utc::now(),
        };

        let events = vec![TeamEvent::Created {
            team_id: team.id,
            name: team.name.to_string(),
            player_count: team.player_ids.len(),
            captain_id,
        }];

        Ok((team, events))
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &TeamName {
        &self.name
    }

    /// Selected player ids, in submission order
    pub fn player_ids(&self) -> &[Uuid] {
        &self.player_ids
    }

    pub fn captain_id(&self) -> Option<Uuid> {
        self.captain_id
    }

    pub fn vice_captain_id(&self) -> Option<Uuid> {
        self.vice_captain_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Skips validation: the row was validated before it was stored.
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        player_ids: Vec<Uuid>,
        captain_id: Option<Uuid>,
        vice_captain_id: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: TeamName::from_persistence(name),
            player_ids,
            captain_id,
            vice_captain_id,
            created_at,
        }
    }
}
