use super::value_objects::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rated cricketer from the player catalog
///
/// Players are reference data: the roster validator and the team workflow
/// only ever read them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    /// Club or side the player turns out for
    pub team: String,
    pub points: u32,
}

impl Player {
    /// Creates a player with a fresh id
    pub fn new(
        name: impl Into<String>,
        position: Position,
        team: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position,
            team: team.into(),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_gets_unique_id() {
        let a = Player::new("Virat Kohli", Position::Batsman, "India", 95);
        let b = Player::new("Virat Kohli", Position::Batsman, "India", 95);

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Virat Kohli");
        assert_eq!(a.points, 95);
    }

    #[test]
    fn player_json_shape() {
        let player = Player::new("Rashid Khan", Position::Bowler, "Afghanistan", 88);
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json["position"], "Bowler");
        assert_eq!(json["team"], "Afghanistan");
        assert_eq!(json["points"], 88);
    }
}
