// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_player_catalog;
pub mod postgres_team_repository;

pub use in_memory::{InMemoryPlayerCatalog, InMemoryTeamRepository};
pub use postgres_player_catalog::PostgresPlayerCatalog;
pub use postgres_team_repository::PostgresTeamRepository;
