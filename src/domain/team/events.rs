use uuid::Uuid;

/// Domain events that occur within the Team aggregate
///
/// Teams are immutable once created, so creation is the only event.
/// The service layer logs events; they are not persisted.
///
/// # Example
/// ```
/// use fantasy_cricket_api::domain::team::events::TeamEvent;
/// use uuid::Uuid;
///
/// let event = TeamEvent::Created {
///     team_id: Uuid::new_v4(),
///     name: "Super Kings".to_string(),
///     player_count: 11,
///     captain_id: None,
/// };
/// assert_eq!(event.name(), "team.created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        /// ID of the newly created team
        team_id: Uuid,
        /// Normalized team name
        name: String,
        /// Number of selected players
        player_count: usize,
        /// Captain, if one was named
        captain_id: Option<Uuid>,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
        }
    }

    /// Returns the event name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            TeamEvent::Created { .. } => "team.created",
        }
    }
}
