use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::partition::partition;
use crate::roster::Roster;
use crate::theme::ThemeMode;

use super::render::print_groups;

/// Arguments for the non-interactive `split` subcommand
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Number of groups to create
    #[arg(short, long)]
    pub groups: usize,

    /// Read names from a file, one per line
    #[arg(long, value_name = "FILE")]
    pub names_file: Option<PathBuf>,

    /// Names given directly on the command line
    pub names: Vec<String>,

    /// Seed the shuffle to make the output reproducible
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the groups as JSON instead of themed text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &SplitArgs, theme: ThemeMode) -> Result<()> {
    let mut roster = Roster::new();

    if let Some(path) = &args.names_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read names from {}", path.display()))?;
        for line in contents.lines() {
            // blank lines are dropped by the roster
            roster.add(line);
        }
    }
    for name in &args.names {
        roster.add(name);
    }

    anyhow::ensure!(!roster.is_empty(), "No student names were given");
    debug!(
        students = roster.len(),
        groups = args.groups,
        seed = ?args.seed,
        "splitting roster"
    );

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let groups = partition(roster.students(), args.groups, rng.as_mut())
        .context("Failed to partition the roster")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        print_groups(&groups, theme.palette());
    }

    Ok(())
}
