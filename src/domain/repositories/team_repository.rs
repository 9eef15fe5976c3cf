use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::team::{Team, TeamName};

/// Repository trait for Team aggregate
///
/// Implementations must enforce team-name uniqueness themselves (a unique
/// index or an equivalent atomic check), because a pre-check in the
/// service cannot stop two concurrent requests with the same name.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Returns true if a team with exactly this name exists
    async fn exists_by_name(&self, name: &TeamName) -> RepositoryResult<bool>;

    /// Insert a new team
    ///
    /// Fails with [`super::RepositoryError::Duplicate`] when the name is taken.
    async fn create(&self, team: &Team) -> RepositoryResult<()>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>>;
}
