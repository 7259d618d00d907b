//! Knight's Travail - prints a shortest knight path between two squares.
//!
//! Squares may be given as arguments or typed at the prompt:
//!
//! ```text
//! $ knights-travail a1 h8
//! A1 B3 C5 D7 F8 G6 H8
//! ```

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use knight_core::Position;
use knight_search::{DistanceTable, KnightsTravail};
use knights_travail::config::{OutputFormat, TravailConfig};
use knights_travail::prompt::{stdio_prompter, END_PROMPT, START_PROMPT};
use knights_travail::render::{render_distances, render_path};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "knights-travail")]
#[command(about = "Find the shortest sequence of knight moves between two squares")]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start square, e.g. A1 (prompted for if omitted)
    start: Option<String>,

    /// End square, e.g. H8 (prompted for if omitted)
    end: Option<String>,

    /// Text placed between squares
    #[arg(short, long)]
    separator: Option<String>,

    /// Path to the config file [default: travail.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of knight moves from a square to every square
    Distances {
        /// Origin square
        from: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => TravailConfig::load_from(path)?,
        None => TravailConfig::load()?,
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(separator) = cli.separator {
        config.separator = separator;
    }

    let output = match cli.command {
        Some(Commands::Distances { from }) => {
            let origin = Position::from_algebraic(&from)?;
            tracing::info!(%origin, "computing distances");
            render_distances(&DistanceTable::knight(origin), config.format)?
        }
        None => {
            let (start, end) = read_squares(cli.start, cli.end)?;
            tracing::info!(%start, %end, "searching for shortest knight path");

            let outcome = KnightsTravail::new(end).solve(start);
            match outcome.moves() {
                Some(moves) => tracing::info!(
                    moves,
                    expanded = outcome.stats.expanded,
                    discovered = outcome.stats.discovered,
                    "path found"
                ),
                None => tracing::warn!(%start, %end, "no path found"),
            }
            render_path(start, end, &outcome.path, &config)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("failed to write output")?;
    Ok(())
}

/// Parses the squares given as arguments, prompting for any that are missing.
///
/// An invalid start square is reported before the end square is read.
fn read_squares(
    start: Option<String>,
    end: Option<String>,
) -> anyhow::Result<(Position, Position)> {
    let mut prompter = stdio_prompter();

    let start = match start {
        Some(s) => Position::from_algebraic(&s)?,
        None => prompter.read_position(START_PROMPT)?,
    };
    let end = match end {
        Some(s) => Position::from_algebraic(&s)?,
        None => prompter.read_position(END_PROMPT)?,
    };
    Ok((start, end))
}
