// Infrastructure layer module
// PostgreSQL and in-memory adapters for the repository ports

pub mod repositories;
