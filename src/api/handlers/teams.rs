use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::player::Player;
use crate::domain::team::{HydratedTeam, TeamStatistics};
use crate::services::{CreateTeam, TeamService};

/// Team with its players expanded to full records
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub players: Vec<Player>,
    pub captain: Option<Uuid>,
    pub vice_captain: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<HydratedTeam> for TeamResponse {
    fn from(hydrated: HydratedTeam) -> Self {
        let HydratedTeam { team, players } = hydrated;
        Self {
            id: team.id(),
            name: team.name().to_string(),
            players,
            captain: team.captain_id(),
            vice_captain: team.vice_captain_id(),
            created_at: team.created_at(),
        }
    }
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(service): State<TeamService>,
    WithRejection(Json(req), _): WithRejection<Json<CreateTeam>, ApiError>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = service.create_team(req).await.map_err(|e| {
        tracing::warn!(kind = e.kind(), error = %e, "Team creation rejected");
        ApiError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))))
}

/// Get a team by ID with populated players
///
/// GET /api/teams/:id
pub async fn get_team(
    State(service): State<TeamService>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = service.get_team(id).await?;

    Ok(Json(TeamResponse::from(team)))
}

/// Get team statistics
///
/// GET /api/teams/:id/statistics
pub async fn get_team_statistics(
    State(service): State<TeamService>,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<Json<TeamStatistics>, ApiError> {
    let statistics = service.team_statistics(id).await?;

    Ok(Json(statistics))
}
