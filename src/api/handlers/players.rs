use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::api::errors::ApiError;
use crate::domain::player::Player;
use crate::domain::repositories::PlayerFilter;
use crate::services::TeamService;

/// List catalog players, highest points first
///
/// GET /api/players?position=bowler&search=khan
pub async fn list_players(
    State(service): State<TeamService>,
    WithRejection(Query(filter), _): WithRejection<Query<PlayerFilter>, ApiError>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = service.list_players(&filter).await?;

    Ok(Json(players))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
