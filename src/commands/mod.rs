mod interactive;
mod render;
mod split;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::theme::ThemeMode;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Start with the light palette instead of the dark default
    #[arg(long, global = true)]
    light: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a roster interactively and group it (the default)
    New,
    /// Partition a ready-made list of names without prompts
    Split(split::SplitArgs),
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        let theme = if cli.light {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };

        match cli.command {
            None | Some(Commands::New) => interactive::run(theme),
            Some(Commands::Split(args)) => split::run(&args, theme),
        }
    }
}
