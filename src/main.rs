use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use fantasy_cricket_api::api;
use fantasy_cricket_api::config::Config;
use fantasy_cricket_api::domain::roster::RosterValidator;
use fantasy_cricket_api::infrastructure::repositories::{
    PostgresPlayerCatalog, PostgresTeamRepository,
};
use fantasy_cricket_api::services::TeamService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    let rules = config.load_rules()?;

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database connected and migrated");

    let service = TeamService::new(
        Arc::new(PostgresPlayerCatalog::new(pool.clone())),
        Arc::new(PostgresTeamRepository::new(pool)),
        Arc::new(RosterValidator::new(rules)),
    );
    let app = api::router(service);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
