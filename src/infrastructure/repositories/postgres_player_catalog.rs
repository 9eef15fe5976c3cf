use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::player::{Player, Position};
use crate::domain::repositories::{PlayerCatalog, PlayerFilter, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of PlayerCatalog
///
/// Reads the `players` table; nothing here writes to it.
pub struct PostgresPlayerCatalog {
    pool: PgPool,
}

impl PostgresPlayerCatalog {
    /// Creates a new PostgresPlayerCatalog
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn player_from_row(row: &PgRow) -> RepositoryResult<Player> {
    let points: i32 = row.try_get("points")?;
    Ok(Player {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        position: row.try_get::<Position, _>("position")?,
        team: row.try_get("team")?,
        points: u32::try_from(points)
            .map_err(|_| RepositoryError::corrupt("player", format!("negative points {}", points)))?,
    })
}

/// Escapes LIKE wildcards so the search term matches literally
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl PlayerCatalog for PostgresPlayerCatalog {
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<HashMap<Uuid, Player>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, position, team, points
            FROM players
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Query(format!("Failed to resolve players: {}", e)))?;

        rows.iter()
            .map(|row| player_from_row(row).map(|p| (p.id, p)))
            .collect()
    }

    async fn list(&self, filter: &PlayerFilter) -> RepositoryResult<Vec<Player>> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(like_pattern);

        let rows = sqlx::query(
            r#"
            SELECT id, name, position, team, points
            FROM players
            WHERE ($1::player_position IS NULL OR position = $1)
              AND ($2::text IS NULL OR name ILIKE $2)
            ORDER BY points DESC, name
            "#,
        )
        .bind(filter.position)
        .bind(search)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Query(format!("Failed to list players: {}", e)))?;

        rows.iter().map(player_from_row).collect()
    }
}
