//! Toy battle simulator for two creature records: pick the faster side,
//! trade damage until one hp bar runs out, and report the winner with a
//! formatted line per attack.

pub mod battle;
pub mod damage;
pub mod error;
pub mod log;
pub mod model;
pub mod roster;
pub mod types;
pub mod winrate;

pub use crate::battle::{simulate_battle, simulate_battle_with_rng, BattleOutcome};
pub use crate::error::BattleError;
pub use crate::winrate::win_rates;

use crate::model::Pokemon;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub roster_path: Option<PathBuf>,
    pub first: String,
    pub second: String,
    pub seed: u64,
    pub sims: usize,
    pub json_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub pokemon: Vec<Pokemon>,
}

pub fn load_roster(path: &Path) -> anyhow::Result<RosterFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file at {}", path.display()))?;
    let parsed: RosterFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    validate_roster(&parsed)?;
    Ok(parsed)
}

fn validate_roster(roster: &RosterFile) -> anyhow::Result<()> {
    if roster.pokemon.is_empty() {
        anyhow::bail!("Roster file lists no Pokemon");
    }
    // Duplicate names would make --first/--second picks ambiguous.
    for (idx, mon) in roster.pokemon.iter().enumerate() {
        if roster.pokemon[idx + 1..]
            .iter()
            .any(|other| other.name.eq_ignore_ascii_case(&mon.name))
        {
            anyhow::bail!("Roster file lists '{}' more than once", mon.name);
        }
    }
    Ok(())
}

/// A roster file wins over the built-in records; either source matches the
/// requested name case-insensitively.
fn resolve_pokemon(roster: Option<&RosterFile>, name: &str) -> anyhow::Result<Pokemon> {
    if let Some(roster) = roster {
        if let Some(found) = roster
            .pokemon
            .iter()
            .find(|mon| mon.name.eq_ignore_ascii_case(name))
        {
            return Ok(found.clone());
        }
    }
    if let Some(found) = roster::builtin(name) {
        return Ok(found);
    }
    let mut known: Vec<String> = roster
        .map(|r| r.pokemon.iter().map(|mon| mon.name.clone()).collect())
        .unwrap_or_default();
    known.extend(roster::builtin_names().iter().map(|n| n.to_string()));
    anyhow::bail!("No Pokemon named '{name}' (known: {})", known.join(", "))
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    if opts.sims == 0 {
        anyhow::bail!("--sims must be > 0");
    }
    if opts.sims > 1 && opts.json_path.is_some() {
        anyhow::bail!("--json applies to a single battle; drop it or use --sims 1");
    }
    let roster = match &opts.roster_path {
        Some(path) => Some(load_roster(path)?),
        None => None,
    };
    let first = resolve_pokemon(roster.as_ref(), &opts.first)?;
    let second = resolve_pokemon(roster.as_ref(), &opts.second)?;

    if opts.sims > 1 {
        let summary = win_rates(&first, &second, opts.sims, opts.seed)?;
        println!(
            "{} battles: {} won {} ({:.1}%), {} won {} ({:.1}%), mean length {:.2} rounds",
            summary.simulations,
            first.name,
            summary.wins_first,
            100.0 * summary.first_rate(),
            second.name,
            summary.wins_second,
            100.0 * summary.second_rate(),
            summary.mean_rounds()
        );
        return Ok(());
    }

    let outcome = simulate_battle(&first, &second, opts.seed)?;
    for line in &outcome.history {
        println!("{line}");
    }
    println!(
        "Battle over in {} round(s): {} wins with {} HP, {} is down at {} HP",
        outcome.rounds,
        outcome.results.winner.name,
        outcome.results.winner.hp,
        outcome.results.loser.name,
        outcome.results.loser.hp
    );
    if let Some(path) = &opts.json_path {
        let rendered = serde_json::to_string_pretty(&outcome)?;
        std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write battle report to {}", path.display()))?;
        println!("Wrote battle report to {}", path.display());
    }
    Ok(())
}
