use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned team identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

/// Caller-assigned player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for TeamId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A registered team. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team identifier (e.g., 1)
    pub id: TeamId,

    /// Team name (e.g., "Internacional")
    pub name: String,

    /// Date the club was founded
    pub created_on: NaiveDate,

    /// Home kit color (e.g., "Red")
    pub primary_color: String,

    /// Alternate kit color, worn on a clash (e.g., "White")
    pub secondary_color: String,
}

impl Team {
    /// Create a new team
    pub fn new(
        id: TeamId,
        name: impl Into<String>,
        created_on: NaiveDate,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            created_on,
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
        }
    }

    /// Kit color this team wears when visiting `home`.
    ///
    /// Colors are compared exactly (case-sensitive). On a clash with the home team's
    /// primary color the secondary color is worn.
    pub fn away_color_against(&self, home: &Team) -> &str {
        if self.primary_color == home.primary_color {
            &self.secondary_color
        } else {
            &self.primary_color
        }
    }
}

/// A registered player. Only the captain flag changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier
    pub id: PlayerId,

    /// Owning team, which must exist when the player is registered
    pub team_id: TeamId,

    /// Player name
    pub name: String,

    pub birth_date: NaiveDate,

    /// Skill rating, higher is better
    pub skill_level: i32,

    /// Exact salary amount
    pub salary: Decimal,

    /// Whether this player currently captains `team_id`
    pub is_captain: bool,
}

impl Player {
    /// Create a new player, not captain
    pub fn new(
        id: PlayerId,
        team_id: TeamId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        skill_level: i32,
        salary: Decimal,
    ) -> Self {
        Self { id, team_id, name: name.into(), birth_date, skill_level, salary, is_captain: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_away_color_without_clash() {
        let home = Team::new(TeamId(1), "Internacional", date(1909, 4, 4), "Red", "White");
        let away = Team::new(TeamId(2), "Gremio", date(1903, 9, 15), "Blue", "Black");

        assert_eq!(away.away_color_against(&home), "Blue");
    }

    #[test]
    fn test_away_color_on_clash() {
        let home = Team::new(TeamId(1), "Internacional", date(1909, 4, 4), "Red", "White");
        let away = Team::new(TeamId(3), "Flamengo", date(1895, 11, 17), "Red", "Black");

        assert_eq!(away.away_color_against(&home), "Black");
    }

    #[test]
    fn test_color_comparison_is_case_sensitive() {
        let home = Team::new(TeamId(1), "Internacional", date(1909, 4, 4), "Red", "White");
        let away = Team::new(TeamId(4), "Vitoria", date(1899, 5, 13), "red", "Black");

        assert_eq!(away.away_color_against(&home), "red");
    }

    #[test]
    fn test_new_player_is_not_captain() {
        let player = Player::new(
            PlayerId(10),
            TeamId(1),
            "D'Alessandro",
            date(1981, 4, 15),
            9,
            Decimal::new(150050, 2),
        );

        assert!(!player.is_captain);
        assert_eq!(player.salary.to_string(), "1500.50");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&PlayerId(42)).unwrap();
        assert_eq!(json, "42");

        let team: TeamId = serde_json::from_str("7").unwrap();
        assert_eq!(team, TeamId(7));
    }
}
