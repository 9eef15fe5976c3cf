use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::repositories::{RepositoryError, RepositoryResult, TeamRepository};
use crate::domain::team::{Team, TeamName};

/// PostgreSQL implementation of TeamRepository
///
/// Teams live in `teams`, their ordered selections in `team_players`.
/// The `teams_name_key` unique index decides name collisions.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error, team: &Team) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::duplicate("team", team.name().as_str())
        }
        _ => RepositoryError::Query(format!("Failed to save team: {}", err)),
    }
}

/// Converts a selection index to the SMALLINT `slot` column
fn slot_number(index: usize) -> RepositoryResult<i16> {
    i16::try_from(index).map_err(|_| {
        RepositoryError::Query(format!("Team slot {} does not fit the slot column", index))
    })
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn exists_by_name(&self, name: &TeamName) -> RepositoryResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM teams WHERE name = $1)")
                .bind(name.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::Query(format!("Failed to check team name: {}", e)))?;

        Ok(exists)
    }

    async fn create(&self, team: &Team) -> RepositoryResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO teams (id, name, captain_id, vice_captain_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(team.id())
        .bind(team.name().as_str())
        .bind(team.captain_id())
        .bind(team.vice_captain_id())
        .bind(team.created_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, team))?;

        for (slot, player_id) in team.player_ids().iter().enumerate() {
            let slot = slot_number(slot)?;
            sqlx::query(
                r#"
                INSERT INTO team_players (team_id, player_id, slot)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(team.id())
            .bind(player_id)
            .bind(slot)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(format!("Failed to save team players: {}", e)))?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, captain_id, vice_captain_id, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Query(format!("Failed to find team by id: {}", e)))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let player_ids: Vec<Uuid> = sqlx::query_scalar(
            r#"
            SELECT player_id
            FROM team_players
            WHERE team_id = $1
            ORDER BY slot
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Query(format!("Failed to load team players: {}", e)))?;

        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        Ok(Some(Team::from_persistence(
            row.try_get("id")?,
            row.try_get("name")?,
            player_ids,
            row.try_get("captain_id")?,
            row.try_get("vice_captain_id")?,
            created_at,
        )))
    }
}
