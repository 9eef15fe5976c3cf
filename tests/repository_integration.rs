//! Integration tests for repository layer
//!
//! These tests verify that the PostgreSQL adapters correctly interact with
//! the database, including ordered team selections and the unique index on
//! team names. They need a migrated database in `DATABASE_URL`:
//!
//! ```text
//! DATABASE_URL=postgresql://... cargo test --test repository_integration -- --ignored
//! ```

use chrono::Utc;
use fantasy_cricket_api::domain::player::{Player, Position};
use fantasy_cricket_api::domain::repositories::{
    PlayerCatalog, PlayerFilter, RepositoryError, TeamRepository,
};
use fantasy_cricket_api::domain::team::{Team, TeamName};
use fantasy_cricket_api::infrastructure::repositories::{
    PostgresPlayerCatalog, PostgresTeamRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Insert eleven players from a uniquely named club
async fn seed_players(pool: &PgPool, club: &str) -> Vec<Player> {
    let mix = [
        (Position::Batsman, 4),
        (Position::Bowler, 3),
        (Position::AllRounder, 2),
        (Position::WicketKeeper, 2),
    ];

    let mut players = Vec::new();
    for (position, count) in mix {
        for i in 0..count {
            let player = Player::new(format!("{} {} {}", club, position, i), position, club, 50 + i);
            sqlx::query(
                "INSERT INTO players (id, name, position, team, points) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(player.id)
            .bind(&player.name)
            .bind(player.position)
            .bind(&player.team)
            .bind(player.points as i32)
            .execute(pool)
            .await
            .expect("Failed to seed player");
            players.push(player);
        }
    }
    players
}

/// Clean up test data after each test
async fn cleanup(pool: &PgPool, club: &str) {
    // team_players rows go with their team through ON DELETE CASCADE
    sqlx::query(
        "DELETE FROM teams WHERE id IN (
            SELECT tp.team_id FROM team_players tp
            JOIN players p ON p.id = tp.player_id
            WHERE p.team = $1)",
    )
    .bind(club)
    .execute(pool)
    .await
    .expect("Failed to cleanup teams");

    sqlx::query("DELETE FROM players WHERE team = $1")
        .bind(club)
        .execute(pool)
        .await
        .expect("Failed to cleanup players");
}

fn team_for(players: &[Player], name: &str) -> Team {
    Team::from_persistence(
        Uuid::new_v4(),
        name.to_string(),
        players.iter().map(|p| p.id).collect(),
        Some(players[0].id),
        Some(players[1].id),
        Utc::now(),
    )
}

fn unique(prefix: &str) -> String {
    format!("{} {}", prefix, &Uuid::new_v4().simple().to_string()[..8])
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_catalog_find_by_ids_and_list() {
    let pool = setup_test_db().await;
    let club = unique("Club");
    let players = seed_players(&pool, &club).await;

    let catalog = PostgresPlayerCatalog::new(pool.clone());

    let mut ids: Vec<Uuid> = players.iter().map(|p| p.id).collect();
    ids.push(Uuid::new_v4());
    let found = catalog.find_by_ids(&ids).await.expect("Failed to resolve");

    assert_eq!(found.len(), 11, "Unknown id should be absent");
    assert_eq!(found.get(&players[0].id), Some(&players[0]));

    let filter = PlayerFilter {
        position: Some(Position::AllRounder),
        search: Some(club.clone()),
    };
    let listed = catalog.list(&filter).await.expect("Failed to list");

    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|p| p.position == Position::AllRounder));
    assert!(listed[0].points >= listed[1].points);

    cleanup(&pool, &club).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_team_repository_create_and_find_by_id() {
    let pool = setup_test_db().await;
    let club = unique("Club");
    let players = seed_players(&pool, &club).await;

    let repo = PostgresTeamRepository::new(pool.clone());
    let team = team_for(&players, &unique("Team"));

    repo.create(&team).await.expect("Failed to create team");

    let found = repo
        .find_by_id(team.id())
        .await
        .expect("Failed to find team")
        .expect("Team should exist");

    assert_eq!(found.name(), team.name());
    assert_eq!(found.player_ids(), team.player_ids(), "Slot order should be kept");
    assert_eq!(found.captain_id(), team.captain_id());
    assert_eq!(found.vice_captain_id(), team.vice_captain_id());
    assert!(repo.exists_by_name(team.name()).await.unwrap());

    cleanup(&pool, &club).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_team_repository_duplicate_name_fails() {
    let pool = setup_test_db().await;
    let club = unique("Club");
    let players = seed_players(&pool, &club).await;

    let repo = PostgresTeamRepository::new(pool.clone());
    let name = unique("Team");

    repo.create(&team_for(&players, &name))
        .await
        .expect("First team creation should succeed");

    let result = repo.create(&team_for(&players, &name)).await;

    assert!(
        matches!(result, Err(RepositoryError::Duplicate { .. })),
        "Unique index should reject the second insert: {:?}",
        result
    );

    cleanup(&pool, &club).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database in DATABASE_URL"]
async fn test_team_repository_missing_team() {
    let pool = setup_test_db().await;
    let repo = PostgresTeamRepository::new(pool);

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    let name = TeamName::new(&unique("Nobody")).unwrap();
    assert!(!repo.exists_by_name(&name).await.unwrap());
}
