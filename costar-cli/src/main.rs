//! costar CLI - how is this actor connected to that one?
//!
//! Builds a co-appearance graph from a film/cast record file and prints the
//! shortest chain of shared films between two actors.

use clap::{CommandFactory, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::CostarConfig;
use output::OutputFormat;

/// Shortest co-appearance paths between actors.
///
/// Reads a record file of blank-line separated blocks (a film title followed
/// by its cast, one name per line) and answers how any actor connects to a
/// target actor through shared films.
#[derive(Parser)]
#[command(name = "costar")]
#[command(author, version)]
#[command(about = "Shortest co-appearance paths between actors")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  costar path movies.txt \"Tom Hanks\"            Connect Tom Hanks to Kevin Bacon
  costar path movies.txt A B C --to \"Meryl Streep\"
  costar repl movies.txt                        Ask for names until an empty line
  costar stats movies.txt                       Entity, film and edge counts")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path from each name to the target
    #[command(visible_alias = "p")]
    Path {
        /// Record file (film title, then one actor per line; blank line between films)
        file: PathBuf,

        /// Start names, matched exactly
        #[arg(required = true)]
        names: Vec<String>,

        /// Target name (default: config, then "Kevin Bacon")
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Interactive session: ask for names until an empty line
    #[command(visible_alias = "i")]
    Repl {
        /// Record file (prompted for when omitted)
        file: Option<PathBuf>,

        /// Target name (default: config, then "Kevin Bacon")
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Show entity, event and edge counts of a record file
    Stats {
        /// Record file
        file: PathBuf,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .costarrc.toml
    let config = CostarConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Color: config override, otherwise only on a terminal
    match config.use_color() {
        Some(use_color) => colored::control::set_override(use_color),
        None if !std::io::stdout().is_terminal() => colored::control::set_override(false),
        None => {}
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Path { file, names, to } => {
            path::run(&file, &names, config.target(to.as_deref()), format)
        }
        Commands::Repl { file, to } => {
            repl::run(file.as_deref(), config.target(to.as_deref()), format)
        }
        Commands::Stats { file } => stats::run(&file, format),
    }
}
