//! Roster Registry - Teams, players, captains and roster queries
//!
//! This crate keeps an in-memory registry of teams and their players, tracks a single
//! captain per team, and answers roster questions (best, oldest and highest paid player,
//! league-wide top players, away kit color).

pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod types;


pub use config::{LoggingConfig, RegistryConfig};
pub use error::{ErrorKind, RegistryError, Result};
pub use registry::RosterRegistry;
pub use types::{Player, PlayerId, Team, TeamId};
