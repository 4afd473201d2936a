//! PowerLetter - CLI
//!
//! Clue-driven word puzzle with TUI and text modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use powerletter::{
    catalog::{GameKind, LevelCatalog},
    commands::{run_simple, run_verify, summarize_catalog},
    logging::init_logger,
    output::{print_catalog_summary, print_verify_report},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "powerletter",
    about = "Unscramble letters into the word the clue describes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Level file (JSON) to play instead of the built-in levels
    #[arg(short = 'l', long, global = true)]
    levels: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode without the TUI
    Simple {
        /// Game to play (game1, game2, game3)
        #[arg(short, long, default_value = "game3")]
        game: String,
    },

    /// List games and their levels
    List,

    /// Check that every level can be solved from its own letters
    Verify {
        /// Game to verify (game1, game2, game3)
        #[arg(short, long, default_value = "game3")]
        game: String,
    },
}

/// Load the level catalog based on the --levels flag
fn load_catalog(levels: Option<&PathBuf>) -> Result<LevelCatalog> {
    match levels {
        Some(path) => LevelCatalog::from_file(path)
            .with_context(|| format!("loading levels from {}", path.display())),
        None => LevelCatalog::embedded().context("loading built-in levels"),
    }
}

fn parse_game(id: &str) -> Result<GameKind> {
    match GameKind::from_id(id) {
        Some(kind) => Ok(kind),
        None => bail!("unknown game '{id}' (expected game1, game2 or game3)"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Keep the TUI screen clean unless debugging
    let default_level = match command {
        Commands::Play => LevelFilter::Warn,
        _ => LevelFilter::Info,
    };
    init_logger(cli.debug, default_level);

    let catalog = load_catalog(cli.levels.as_ref())?;

    match command {
        Commands::Play => run_play_command(&catalog),
        Commands::Simple { game } => run_simple(&catalog, parse_game(&game)?),
        Commands::List => {
            print_catalog_summary(&summarize_catalog(&catalog));
            Ok(())
        }
        Commands::Verify { game } => run_verify_command(&catalog, &game),
    }
}

fn run_verify_command(catalog: &LevelCatalog, game: &str) -> Result<()> {
    let kind = parse_game(game)?;
    let report = run_verify(catalog, kind);
    print_verify_report(&report);

    if report.all_solvable() {
        Ok(())
    } else {
        bail!("{} levels cannot be solved", report.failures().len())
    }
}

fn run_play_command(catalog: &LevelCatalog) -> Result<()> {
    use powerletter::interactive::{App, run_tui};

    let app = App::new(catalog);
    run_tui(app)
}
