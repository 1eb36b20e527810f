use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use roster_registry::logging::initialize_logging;
use roster_registry::{LoggingConfig, PlayerId, RegistryConfig, RosterRegistry, TeamId};
use rust_decimal::Decimal;
use tracing::info;

/// Roster registry demo: builds a small league and prints roster queries
#[derive(Parser, Debug)]
#[command(name = "roster-cli", version, about)]
struct Args {
    /// Number of league-wide top players to list
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long)]
    log_format: Option<String>,

    /// Print each team's roster as JSON
    #[arg(long)]
    json: bool,
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("Invalid date {y}-{m}-{d}"))
}

fn build_league(registry: &mut RosterRegistry) -> Result<()> {
    registry.register_team(TeamId(1), "Internacional", date(1909, 4, 4)?, "Red", "White")?;
    registry.register_team(TeamId(2), "Gremio", date(1903, 9, 15)?, "Blue", "Black")?;
    registry.register_team(TeamId(3), "Flamengo", date(1895, 11, 17)?, "Red", "Black")?;

    let players = [
        (10, 1, "Edenilson", date(1989, 12, 18)?, 5, Decimal::new(90_000, 0)),
        (11, 1, "Alan Patrick", date(1991, 5, 13)?, 9, Decimal::new(120_000, 0)),
        (12, 1, "Rochet", date(1993, 3, 23)?, 7, Decimal::new(8_550_000, 2)),
        (20, 2, "Suarez", date(1987, 1, 24)?, 9, Decimal::new(250_000, 0)),
        (21, 2, "Villasanti", date(1997, 1, 24)?, 6, Decimal::new(70_000, 0)),
        (30, 3, "Arrascaeta", date(1994, 6, 1)?, 8, Decimal::new(180_000, 0)),
    ];

    for (id, team, name, birth_date, skill, salary) in players {
        registry.register_player(PlayerId(id), TeamId(team), name, birth_date, skill, salary)?;
    }

    registry.set_captain(PlayerId(10))?;
    registry.set_captain(PlayerId(11))?;
    registry.set_captain(PlayerId(20))?;

    Ok(())
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut logging = LoggingConfig::from_env()?;
    if let Some(level) = args.log_level {
        logging.level = level;
    }
    if let Some(format) = args.log_format {
        logging.format = format;
    }
    initialize_logging(&logging)?;

    let mut registry = RosterRegistry::with_config(RegistryConfig::from_env()?);
    build_league(&mut registry).context("Failed to build demo league")?;

    info!("Registry loaded with {} teams and {} players", registry.team_count(), registry.player_count());

    for team_id in registry.all_teams() {
        let team = registry.team(team_id)?;
        println!("\n{} (#{}, founded {})", team.name, team.id, team.created_on);

        if args.json {
            let roster = registry
                .team_players(team_id)?
                .into_iter()
                .map(|id| registry.player(id))
                .collect::<roster_registry::Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&roster)?);
            continue;
        }

        for player_id in registry.team_players(team_id)? {
            let player = registry.player(player_id)?;
            let marker = if player.is_captain { " (C)" } else { "" };
            println!(
                "  {:4} {:20} skill {:3} salary {:>12}{}",
                player.id, player.name, player.skill_level, player.salary, marker
            );
        }

        match registry.captain_of(team_id) {
            Ok(captain) => println!("  Captain:      {}", registry.player_name(captain)?),
            Err(err) => println!("  Captain:      {err}"),
        }
        println!("  Best:         {}", registry.player_name(registry.best_player(team_id)?)?);
        println!("  Oldest:       {}", registry.player_name(registry.oldest_player(team_id)?)?);
        println!("  Highest paid: {}", registry.player_name(registry.highest_paid_player(team_id)?)?);
    }

    println!("\nTop {} players:", args.top);
    for (rank, player_id) in registry.top_players(args.top).into_iter().enumerate() {
        let player = registry.player(player_id)?;
        println!("{:4} {:20} {}", rank + 1, player.name, player.skill_level);
    }

    println!("\nAway kit colors:");
    let teams = registry.all_teams();
    for home in &teams {
        for away in teams.iter().filter(|away| *away != home) {
            println!(
                "  {} at {}: {}",
                registry.team_name(*away)?,
                registry.team_name(*home)?,
                registry.away_kit_color(*home, *away)?
            );
        }
    }

    info!("Roster demo completed");
    Ok(())
}
