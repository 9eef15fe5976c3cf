use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::errors::{TeamCreationError, TeamQueryError};
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerCatalog, PlayerFilter, RepositoryResult, TeamRepository};
use crate::domain::roster::RosterValidator;
use crate::domain::team::{HydratedTeam, Team, TeamStatistics};

/// Input for team creation, as submitted by a client
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    pub players: Vec<Uuid>,
    #[serde(default)]
    pub captain: Option<Uuid>,
    #[serde(default, alias = "viceCaptain")]
    pub vice_captain: Option<Uuid>,
}

/// Team creation and lookup over the catalog and team repository
#[derive(Clone)]
pub struct TeamService {
    catalog: Arc<dyn PlayerCatalog>,
    teams: Arc<dyn TeamRepository>,
    validator: Arc<RosterValidator>,
}

impl TeamService {
    pub fn new(
        catalog: Arc<dyn PlayerCatalog>,
        teams: Arc<dyn TeamRepository>,
        validator: Arc<RosterValidator>,
    ) -> Self {
        Self {
            catalog,
            teams,
            validator,
        }
    }

    /// Validates and persists a new team
    ///
    /// # Steps
    /// 1. Name and squad-size checks (no I/O)
    /// 2. Name uniqueness pre-check against the repository
    /// 3. Catalog resolution and composition rules
    /// 4. Captain and vice-captain membership
    /// 5. Insert; a unique-index rejection still reports `DuplicateName`
    ///
    /// # Returns
    /// The stored team with its full player records
    #[tracing::instrument(skip(self, request), fields(team = %request.name.trim()))]
    pub async fn create_team(&self, request: CreateTeam) -> Result<HydratedTeam, TeamCreationError> {
        let candidate = self.validator.candidate(&request.name, &request.players)?;

        if self.teams.exists_by_name(candidate.name()).await? {
            tracing::warn!("Rejected duplicate team name");
            return Err(TeamCreationError::DuplicateName(candidate.name().to_string()));
        }

        let catalog = self.catalog.find_by_ids(candidate.player_ids()).await?;
        let verdict = self.validator.validate(candidate, &catalog)?;

        let (team, events) = Team::new(&verdict, request.captain, request.vice_captain)?;

        if let Err(err) = self.teams.create(&team).await {
            let err = TeamCreationError::from(err);
            match &err {
                TeamCreationError::DuplicateName(_) => {
                    tracing::warn!("Team name taken by a concurrent request")
                }
                _ => tracing::error!(error = %err, "Failed to store team"),
            }
            return Err(err);
        }

        for event in &events {
            tracing::info!(event = event.name(), team_id = %event.team_id(), "Team created");
        }

        Ok(HydratedTeam::new(team, verdict.into_players()))
    }

    /// Loads a team and replaces its player ids with catalog records
    pub async fn get_team(&self, id: Uuid) -> Result<HydratedTeam, TeamQueryError> {
        let team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or(TeamQueryError::NotFound(id))?;

        let mut catalog = self.catalog.find_by_ids(team.player_ids()).await?;
        let mut players = Vec::with_capacity(team.player_ids().len());
        for player_id in team.player_ids() {
            match catalog.remove(player_id) {
                Some(player) => players.push(player),
                None => tracing::warn!(team_id = %id, %player_id, "Team references a player missing from the catalog"),
            }
        }

        Ok(HydratedTeam::new(team, players))
    }

    /// Computes statistics for a stored team
    pub async fn team_statistics(&self, id: Uuid) -> Result<TeamStatistics, TeamQueryError> {
        Ok(self.get_team(id).await?.statistics())
    }

    /// Lists catalog players
    pub async fn list_players(&self, filter: &PlayerFilter) -> RepositoryResult<Vec<Player>> {
        self.catalog.list(filter).await
    }
}
