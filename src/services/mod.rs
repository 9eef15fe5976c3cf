// Application services
// Orchestrate domain rules over the repository ports

pub mod errors;
pub mod team_service;

pub use errors::{TeamCreationError, TeamQueryError};
pub use team_service::{CreateTeam, TeamService};
