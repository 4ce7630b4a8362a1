//! Scoreboard CLI
//!
//! Replays a point sequence through the scoring engine and prints the
//! resulting scoreboard, or the JSON snapshot with `--json`.

use anyhow::{Context, Result};
use clap::Parser;

use ts_core::{snapshot_json, MatchRules, Player, TennisMatch};

#[derive(Parser)]
#[command(name = "ts_cli")]
#[command(about = "Score a tennis match from a point sequence", long_about = None)]
struct Cli {
    /// Comma-separated winner ids per point, e.g. "0,0,1,0"
    #[arg(long)]
    points: String,

    /// Request tie-break scoring for every point (engine gates eligibility)
    #[arg(long, default_value = "false")]
    tie_break: bool,

    /// Maximum number of sets in the match
    #[arg(long, default_value = "13")]
    max_sets: usize,

    /// Emit the JSON snapshot instead of the scoreboard
    #[arg(long, default_value = "false")]
    json: bool,
}

fn parse_points(raw: &str) -> Result<Vec<Player>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let id: u8 = s.parse().with_context(|| format!("bad point entry: {s:?}"))?;
            Player::from_id(id).with_context(|| format!("bad player id: {id}"))
        })
        .collect()
}

fn print_scoreboard(m: &TennisMatch) {
    for (i, set) in m.sets().iter().enumerate() {
        let a = set.points(Player::A);
        let b = set.points(Player::B);
        match set.owner() {
            Some(owner) => println!("set {i}: {a}-{b} (won by {owner:?})"),
            None => println!("set {i}: {a}-{b} (in progress)"),
        }
    }
    println!(
        "current score: {} - {}",
        m.score_label(Player::A),
        m.score_label(Player::B)
    );
    println!(
        "sets: {}-{}",
        m.sets_won(Player::A),
        m.sets_won(Player::B)
    );
    match m.owner() {
        Some(owner) => println!("match won by {owner:?}"),
        None => match m.provisional_owner() {
            Some(leader) => println!("match in progress, {leader:?} leads"),
            None => println!("match in progress, level"),
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut m = TennisMatch::with_rules(MatchRules {
        max_sets: cli.max_sets,
        ..MatchRules::default()
    });
    for player in parse_points(&cli.points)? {
        m.record_point(player, cli.tie_break)?;
    }

    if cli.json {
        println!("{}", snapshot_json(&m)?);
    } else {
        print_scoreboard(&m);
    }
    Ok(())
}
