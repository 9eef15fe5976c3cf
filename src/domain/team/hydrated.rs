use super::statistics::TeamStatistics;
use super::team::Team;
use crate::domain::player::Player;

/// A team with its player ids replaced by full catalog records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydratedTeam {
    pub team: Team,
    /// Same order as `team.player_ids()`
    pub players: Vec<Player>,
}

impl HydratedTeam {
    pub fn new(team: Team, players: Vec<Player>) -> Self {
        Self { team, players }
    }

    pub fn statistics(&self) -> TeamStatistics {
        TeamStatistics::from_players(&self.players)
    }

    pub fn captain(&self) -> Option<&Player> {
        self.team
            .captain_id()
            .and_then(|id| self.players.iter().find(|p| p.id == id))
    }

    pub fn vice_captain(&self) -> Option<&Player> {
        self.team
            .vice_captain_id()
            .and_then(|id| self.players.iter().find(|p| p.id == id))
    }
}
