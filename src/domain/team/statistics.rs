use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::player::{Player, Position};
use crate::domain::roster::PositionTally;

/// Summary figures for a team's selected players
///
/// Recomputed on every request; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatistics {
    pub total_batsmen: usize,
    pub total_bowlers: usize,
    pub total_all_rounders: usize,
    pub wicket_keepers: usize,
    pub position_counts: PositionTally,
    pub total_points: u64,
    /// Zero for an empty player list
    pub average_points: f64,
    /// Club name to number of selected players from that club
    pub players_by_team: BTreeMap<String, usize>,
}

impl TeamStatistics {
    pub fn from_players(players: &[Player]) -> Self {
        let position_counts = PositionTally::from_players(players);
        let total_points: u64 = players.iter().map(|p| u64::from(p.points)).sum();
        let average_points = if players.is_empty() {
            0.0
        } else {
            total_points as f64 / players.len() as f64
        };

        let mut players_by_team = BTreeMap::new();
        for player in players {
            *players_by_team.entry(player.team.clone()).or_insert(0) += 1;
        }

        Self {
            total_batsmen: position_counts.count(Position::Batsman),
            total_bowlers: position_counts.count(Position::Bowler),
            total_all_rounders: position_counts.count(Position::AllRounder),
            wicket_keepers: position_counts.count(Position::WicketKeeper),
            position_counts,
            total_points,
            average_points,
            players_by_team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_for_mixed_squad() {
        let players = vec![
            Player::new("A", Position::Batsman, "India", 90),
            Player::new("B", Position::Batsman, "Australia", 80),
            Player::new("C", Position::Bowler, "India", 70),
            Player::new("D", Position::WicketKeeper, "England", 60),
        ];

        let stats = TeamStatistics::from_players(&players);

        assert_eq!(stats.total_batsmen, 2);
        assert_eq!(stats.total_bowlers, 1);
        assert_eq!(stats.total_all_rounders, 0);
        assert_eq!(stats.wicket_keepers, 1);
        assert_eq!(stats.total_points, 300);
        assert!((stats.average_points - 75.0).abs() < f64::EPSILON);
        assert_eq!(stats.players_by_team.get("India"), Some(&2));
        assert_eq!(stats.players_by_team.get("England"), Some(&1));
        assert_eq!(stats.players_by_team.len(), 3);
    }

    #[test]
    fn empty_squad_averages_zero() {
        let stats = TeamStatistics::from_players(&[]);

        assert_eq!(stats.average_points, 0.0);
        assert_eq!(stats.total_points, 0);
        assert!(stats.players_by_team.is_empty());
        assert_eq!(stats.position_counts.total(), 0);
    }

    #[test]
    fn fractional_average() {
        let players = vec![
            Player::new("A", Position::Bowler, "X", 1),
            Player::new("B", Position::Bowler, "X", 2),
        ];
        let stats = TeamStatistics::from_players(&players);
        assert!((stats.average_points - 1.5).abs() < f64::EPSILON);
    }
}
