//! `freeslot` CLI — manage availability schedules and compute two-person
//! overlap from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Register users
//! freeslot user add alice
//! freeslot user add bob
//!
//! # Replace alice's weekly pattern (slots are minute-of-day ranges)
//! freeslot set-week alice monday=540-720,780-900 tuesday=600-660
//!
//! # Override one specific date
//! freeslot set-date alice 2025-01-06 600-660
//!
//! # Resolve availability over an inclusive date range
//! freeslot resolve alice 2025-01-06 2025-01-12
//!
//! # Overlapping free time of two users
//! freeslot overlap alice bob 2025-01-06 2025-01-12
//!
//! # Remove date overrides (one date, or all when omitted)
//! freeslot delete-date alice 2025-01-06
//! freeslot delete-date alice
//! ```
//!
//! State lives in a single JSON file (`--store`, default `freeslot.json`).
//! Set `RUST_LOG=debug` to see engine activity on stderr.

mod store;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use freeslot_engine::{Scheduler, Slot, Weekday, WeeklyPattern};
use store::FileStore;

#[derive(Parser)]
#[command(
    name = "freeslot",
    version,
    about = "Availability schedules and two-person overlap"
)]
struct Cli {
    /// Path to the JSON store file
    #[arg(long, global = true, default_value = "freeslot.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the user registry
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Replace a user's full weekly pattern; omitted days lose availability
    SetWeek {
        name: String,
        /// Day entries as day=slots, e.g. monday=540-720,780-900
        #[arg(required = true)]
        days: Vec<String>,
    },
    /// Insert or replace the availability override for one date
    SetDate {
        name: String,
        /// Date as YYYY-MM-DD
        date: NaiveDate,
        /// Comma-separated minute ranges, e.g. 540-720,780-900
        slots: String,
    },
    /// Delete a user's weekly pattern
    DeleteWeek { name: String },
    /// Delete one date override, or all of them when no date is given
    DeleteDate {
        name: String,
        date: Option<NaiveDate>,
    },
    /// Resolve a user's availability over an inclusive date range
    Resolve {
        name: String,
        from: NaiveDate,
        to: NaiveDate,
    },
    /// Compute the overlapping availability of two users
    Overlap {
        a: String,
        b: String,
        from: NaiveDate,
        to: NaiveDate,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a new user
    Add { name: String },
    /// List registered users and their identities
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FileStore::load(&cli.store)?;

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Add { name } => {
                let mut store = store;
                let identity = store.add_user(&name)?;
                store.save(&cli.store)?;
                println!("{} {}", name, identity);
            }
            UserAction::List => {
                for (name, identity) in store.users() {
                    println!("{} {}", name, identity);
                }
            }
        },
        Commands::SetWeek { name, days } => {
            let identity = store.lookup(&name)?;
            let pattern = parse_week_pattern(&days)?;
            let mut scheduler = Scheduler::new(store);
            let stored = scheduler
                .set_weekly_pattern(identity, pattern)
                .context("Failed to replace weekly pattern")?;
            scheduler.into_store().save(&cli.store)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        Commands::SetDate { name, date, slots } => {
            let identity = store.lookup(&name)?;
            let slots = parse_slots(&slots)?;
            let mut scheduler = Scheduler::new(store);
            let stored = scheduler
                .set_date_override(identity, date, slots)
                .context("Failed to upsert date override")?;
            scheduler.into_store().save(&cli.store)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        Commands::DeleteWeek { name } => {
            let identity = store.lookup(&name)?;
            let mut scheduler = Scheduler::new(store);
            scheduler.clear_weekly_pattern(identity)?;
            scheduler.into_store().save(&cli.store)?;
        }
        Commands::DeleteDate { name, date } => {
            let identity = store.lookup(&name)?;
            let mut scheduler = Scheduler::new(store);
            scheduler.clear_date_overrides(identity, date)?;
            scheduler.into_store().save(&cli.store)?;
        }
        Commands::Resolve { name, from, to } => {
            let identity = store.lookup(&name)?;
            let scheduler = Scheduler::new(store);
            let resolved = scheduler
                .resolve(identity, from, to)
                .context("Failed to resolve availability")?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Commands::Overlap { a, b, from, to } => {
            let id_a = store.lookup(&a)?;
            let id_b = store.lookup(&b)?;
            let scheduler = Scheduler::new(store);
            let overlap = scheduler
                .overlap(id_a, id_b, from, to)
                .context("Failed to compute overlap")?;
            println!("{}", serde_json::to_string_pretty(&overlap)?);
        }
    }

    Ok(())
}

/// Parse `day=slots` arguments into a weekly pattern.
///
/// A day given more than once is an error — the write is a full replace, so
/// a duplicate would silently drop one of the two lists.
fn parse_week_pattern(days: &[String]) -> Result<WeeklyPattern> {
    let mut pattern = WeeklyPattern::new();
    for entry in days {
        let (day, slots) = entry
            .split_once('=')
            .with_context(|| format!("Expected day=slots, got: {}", entry))?;
        let day: Weekday = day.parse()?;
        if pattern.contains_key(&day) {
            anyhow::bail!("duplicate day in weekly pattern: {}", day);
        }
        pattern.insert(day, parse_slots(slots)?);
    }
    Ok(pattern)
}

/// Parse a comma-separated list of `start-end` minute ranges.
///
/// Only the shape is checked here; bounds validation belongs to the engine's
/// write-side normalizer.
fn parse_slots(raw: &str) -> Result<Vec<Slot>> {
    raw.split(',')
        .map(|range| {
            let (start, end) = range
                .split_once('-')
                .with_context(|| format!("Expected start-end, got: {}", range))?;
            let start: u16 = start
                .trim()
                .parse()
                .with_context(|| format!("Invalid start minute: {}", start))?;
            let end: u16 = end
                .trim()
                .parse()
                .with_context(|| format!("Invalid end minute: {}", end))?;
            Ok(Slot { start, end })
        })
        .collect()
}
