//! Error types for the roster registry

use crate::types::{PlayerId, TeamId};
use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors returned by [`RosterRegistry`](crate::RosterRegistry) operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Team id already registered: {0}")]
    DuplicateTeamId(TeamId),

    #[error("Player id already registered: {0}")]
    DuplicatePlayerId(PlayerId),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// The team exists but has no registered players
    #[error("Team {0} has no players")]
    NoPlayers(TeamId),

    #[error("No captain set for team {0}")]
    NoCaptainSet(TeamId),

    #[error("Capacity exceeded: {what} limit is {limit}")]
    CapacityExceeded { what: &'static str, limit: usize },
}

/// Coarse error category, for callers that only care about the kind of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateId,
    TeamNotFound,
    PlayerNotFound,
    NoCaptainSet,
    CapacityExceeded,
}

impl RegistryError {
    /// Category of this error. An empty team reports as `PlayerNotFound`.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::DuplicateTeamId(_) | RegistryError::DuplicatePlayerId(_) => {
                ErrorKind::DuplicateId
            }
            RegistryError::TeamNotFound(_) => ErrorKind::TeamNotFound,
            RegistryError::PlayerNotFound(_) | RegistryError::NoPlayers(_) => {
                ErrorKind::PlayerNotFound
            }
            RegistryError::NoCaptainSet(_) => ErrorKind::NoCaptainSet,
            RegistryError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(RegistryError::DuplicateTeamId(TeamId(1)).kind(), ErrorKind::DuplicateId);
        assert_eq!(RegistryError::DuplicatePlayerId(PlayerId(1)).kind(), ErrorKind::DuplicateId);
        assert_eq!(RegistryError::NoPlayers(TeamId(1)).kind(), ErrorKind::PlayerNotFound);
        assert_eq!(RegistryError::NoCaptainSet(TeamId(1)).kind(), ErrorKind::NoCaptainSet);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RegistryError::TeamNotFound(TeamId(9)).to_string(), "Team not found: 9");
        assert_eq!(
            RegistryError::CapacityExceeded { what: "teams", limit: 2 }.to_string(),
            "Capacity exceeded: teams limit is 2"
        );
    }
}
