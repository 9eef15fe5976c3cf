//! In-memory repository implementations
//!
//! Thread-safe `HashMap` storage behind a `tokio` `RwLock`. Used by tests
//! and for running the API without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::player::Player;
use crate::domain::repositories::{
    PlayerCatalog, PlayerFilter, RepositoryError, RepositoryResult, TeamRepository,
};
use crate::domain::team::{Team, TeamName};

/// In-memory implementation of [`PlayerCatalog`]
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlayerCatalog {
    players: Arc<RwLock<HashMap<Uuid, Player>>>,
}

impl InMemoryPlayerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-loaded with `players`
    pub fn with_players(players: impl IntoIterator<Item = Player>) -> Self {
        let map = players.into_iter().map(|p| (p.id, p)).collect();
        Self {
            players: Arc::new(RwLock::new(map)),
        }
    }

    /// Adds or replaces a player
    pub async fn insert(&self, player: Player) {
        self.players.write().await.insert(player.id, player);
    }
}

#[async_trait]
impl PlayerCatalog for InMemoryPlayerCatalog {
    async fn find_by_ids(&self, ids: &[Uuid]) -> RepositoryResult<HashMap<Uuid, Player>> {
        let players = self.players.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| players.get(id).map(|p| (*id, p.clone())))
            .collect())
    }

    async fn list(&self, filter: &PlayerFilter) -> RepositoryResult<Vec<Player>> {
        let players = self.players.read().await;
        let mut matching: Vec<Player> = players
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
        Ok(matching)
    }
}

#[derive(Debug, Default)]
struct TeamStore {
    by_id: HashMap<Uuid, Team>,
    names: HashMap<String, Uuid>,
}

/// In-memory implementation of [`TeamRepository`]
///
/// The name check and the insert happen under one write lock, which is
/// this repository's equivalent of a unique index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    store: Arc<RwLock<TeamStore>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored teams
    pub async fn len(&self) -> usize {
        self.store.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn exists_by_name(&self, name: &TeamName) -> RepositoryResult<bool> {
        Ok(self.store.read().await.names.contains_key(name.as_str()))
    }

    async fn create(&self, team: &Team) -> RepositoryResult<()> {
        let mut store = self.store.write().await;
        if store.names.contains_key(team.name().as_str()) {
            return Err(RepositoryError::duplicate("team", team.name().as_str()));
        }
        store.names.insert(team.name().to_string(), team.id());
        store.by_id.insert(team.id(), team.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        Ok(self.store.read().await.by_id.get(&id).cloned())
    }
}
