use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::types::{Player, PlayerId, Team, TeamId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Roster Registry - Teams, players and captains
///
/// Both collections are keyed by caller-assigned ids and kept in ascending id order,
/// so listings and tie-breaks are deterministic: whenever two players are equally good,
/// old or well paid, the one with the lowest id wins.
pub struct RosterRegistry {
    /// Map from team ID to Team
    teams: BTreeMap<TeamId, Team>,

    /// Map from player ID to Player
    players: BTreeMap<PlayerId, Player>,

    /// Current captain of each team. Mirrors the `is_captain` flags.
    captains: BTreeMap<TeamId, PlayerId>,

    config: RegistryConfig,
}

impl RosterRegistry {
    /// Create a new empty registry with no limits
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new empty registry enforcing the limits in `config`
    pub fn with_config(config: RegistryConfig) -> Self {
        Self { teams: BTreeMap::new(), players: BTreeMap::new(), captains: BTreeMap::new(), config }
    }

    /// Register a new team
    pub fn register_team(
        &mut self,
        id: TeamId,
        name: impl Into<String>,
        created_on: NaiveDate,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
    ) -> Result<()> {
        if self.teams.contains_key(&id) {
            return Err(RegistryError::DuplicateTeamId(id));
        }

        if let Some(limit) = self.config.max_teams {
            if self.teams.len() >= limit {
                return Err(RegistryError::CapacityExceeded { what: "teams", limit });
            }
        }

        let team = Team::new(id, name, created_on, primary_color, secondary_color);
        debug!("Registered team {} ({})", team.id, team.name);
        self.teams.insert(id, team);
        Ok(())
    }

    /// Register a new player on an existing team. The player starts out as not captain.
    pub fn register_player(
        &mut self,
        id: PlayerId,
        team_id: TeamId,
        name: impl Into<String>,
        birth_date: NaiveDate,
        skill_level: i32,
        salary: Decimal,
    ) -> Result<()> {
        if self.players.contains_key(&id) {
            return Err(RegistryError::DuplicatePlayerId(id));
        }

        if !self.teams.contains_key(&team_id) {
            return Err(RegistryError::TeamNotFound(team_id));
        }

        if let Some(limit) = self.config.max_players_per_team {
            if self.roster(team_id).count() >= limit {
                return Err(RegistryError::CapacityExceeded { what: "players per team", limit });
            }
        }

        let player = Player::new(id, team_id, name, birth_date, skill_level, salary);
        debug!("Registered player {} ({}) on team {}", player.id, player.name, team_id);
        self.players.insert(id, player);
        Ok(())
    }

    /// Make `player_id` the captain of its team, replacing any previous captain
    pub fn set_captain(&mut self, player_id: PlayerId) -> Result<()> {
        let team_id = self.player(player_id)?.team_id;

        let previous = self.captains.insert(team_id, player_id);
        if let Some(previous_id) = previous.filter(|prev| *prev != player_id) {
            if let Some(previous_captain) = self.players.get_mut(&previous_id) {
                previous_captain.is_captain = false;
            }
        }

        if let Some(captain) = self.players.get_mut(&player_id) {
            captain.is_captain = true;
        }

        debug!("Team {} captain set to {} (previous: {:?})", team_id, player_id, previous);
        Ok(())
    }

    /// Current captain of a team
    pub fn captain_of(&self, team_id: TeamId) -> Result<PlayerId> {
        self.team(team_id)?;
        self.captains.get(&team_id).copied().ok_or(RegistryError::NoCaptainSet(team_id))
    }

    /// Whether the player currently captains its team
    pub fn is_captain(&self, player_id: PlayerId) -> Result<bool> {
        Ok(self.player(player_id)?.is_captain)
    }

    /// Get a team by ID
    pub fn team(&self, team_id: TeamId) -> Result<&Team> {
        self.teams.get(&team_id).ok_or(RegistryError::TeamNotFound(team_id))
    }

    /// Get a player by ID
    pub fn player(&self, player_id: PlayerId) -> Result<&Player> {
        self.players.get(&player_id).ok_or(RegistryError::PlayerNotFound(player_id))
    }

    pub fn player_name(&self, player_id: PlayerId) -> Result<&str> {
        Ok(&self.player(player_id)?.name)
    }

    pub fn team_name(&self, team_id: TeamId) -> Result<&str> {
        Ok(&self.team(team_id)?.name)
    }

    pub fn player_salary(&self, player_id: PlayerId) -> Result<Decimal> {
        Ok(self.player(player_id)?.salary)
    }

    /// Player ids of a team in ascending order. Empty if the team has no players.
    pub fn team_players(&self, team_id: TeamId) -> Result<Vec<PlayerId>> {
        self.team(team_id)?;
        Ok(self.roster(team_id).map(|player| player.id).collect())
    }

    /// Highest skill level on the team
    pub fn best_player(&self, team_id: TeamId) -> Result<PlayerId> {
        self.pick_from_roster(team_id, |candidate, best| candidate.skill_level > best.skill_level)
    }

    /// Earliest birth date on the team
    pub fn oldest_player(&self, team_id: TeamId) -> Result<PlayerId> {
        self.pick_from_roster(team_id, |candidate, oldest| candidate.birth_date < oldest.birth_date)
    }

    /// Highest salary on the team
    pub fn highest_paid_player(&self, team_id: TeamId) -> Result<PlayerId> {
        self.pick_from_roster(team_id, |candidate, richest| candidate.salary > richest.salary)
    }

    /// All team ids in ascending order
    pub fn all_teams(&self) -> Vec<TeamId> {
        self.teams.keys().copied().collect()
    }

    /// Top `limit` players league-wide by skill level.
    ///
    /// Equal skill levels keep ascending id order. Returns every player when `limit`
    /// exceeds the player count.
    pub fn top_players(&self, limit: usize) -> Vec<PlayerId> {
        let mut players: Vec<&Player> = self.players.values().collect();
        players.sort_by(|a, b| b.skill_level.cmp(&a.skill_level));
        players.truncate(limit);
        players.into_iter().map(|player| player.id).collect()
    }

    /// Kit color the away team wears at the home team's ground
    pub fn away_kit_color(&self, home_team_id: TeamId, away_team_id: TeamId) -> Result<&str> {
        let home = self.team(home_team_id)?;
        let away = self.team(away_team_id)?;
        Ok(away.away_color_against(home))
    }

    pub fn contains_team(&self, team_id: TeamId) -> bool {
        self.teams.contains_key(&team_id)
    }

    pub fn contains_player(&self, player_id: PlayerId) -> bool {
        self.players.contains_key(&player_id)
    }

    /// Get team count
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Get player count
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Players of a team, ascending by id
    fn roster(&self, team_id: TeamId) -> impl Iterator<Item = &Player> + '_ {
        self.players.values().filter(move |player| player.team_id == team_id)
    }

    /// Walk the roster in ascending id order, replacing the pick only when `beats`
    /// holds strictly, so ties stay with the lowest id.
    fn pick_from_roster<F>(&self, team_id: TeamId, beats: F) -> Result<PlayerId>
    where
        F: Fn(&Player, &Player) -> bool,
    {
        self.team(team_id)?;
        self.roster(team_id)
            .reduce(|pick, candidate| if beats(candidate, pick) { candidate } else { pick })
            .map(|player| player.id)
            .ok_or(RegistryError::NoPlayers(team_id))
    }
}

impl Default for RosterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
