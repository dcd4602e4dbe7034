#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use chroma_core::ErrorCode;
use chroma_core::config::{ChromaConfig, load_config};
use clap::{Parser, Subcommand};
use output::{CliError, OutputMode};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "chroma: greedy and backtracking graph coloring",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ./chroma.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format (default: pretty on a terminal, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Color the graph described by a TOML problem file",
        after_help = "EXAMPLES:\n    # Exact search with a numbered palette of 3 colors\n    chroma color map.toml --algorithm backtracking --colors 3"
    )]
    Color(cmd::color::ColorArgs),

    #[command(
        about = "Show graph statistics and the greedy color bound",
        after_help = "EXAMPLES:\n    chroma stats map.toml"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        about = "Color a generated graph",
        after_help = "EXAMPLES:\n    # Seeded random graph, 200 nodes, edge probability 0.05\n    chroma generate random --nodes 200 --probability 0.05 --seed 7"
    )]
    Generate(cmd::generate::GenerateArgs),

    #[command(
        about = "Solve a Sudoku puzzle by coloring its constraint graph",
        after_help = "EXAMPLES:\n    # 81 cells, row by row; '.' or '0' marks a blank\n    chroma sudoku 1....................................................................8......."
    )]
    Sudoku(cmd::sudoku::SudokuArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CHROMA_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "chroma=debug,info"
        } else {
            "chroma=info,warn"
        })
    });

    let format = env::var("CHROMA_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so stdout carries only command output.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// I/O failures mean the file could not be read; anything else is bad TOML.
fn config_error_code(err: &anyhow::Error) -> ErrorCode {
    if err.chain().any(|cause| cause.is::<std::io::Error>()) {
        ErrorCode::ConfigReadError
    } else {
        ErrorCode::ConfigParseError
    }
}

fn load(cli: &Cli) -> anyhow::Result<ChromaConfig> {
    load_config(cli.config.as_deref()).map_err(|err| {
        CliError::with_code(config_error_code(&err), format!("{err:#}")).into()
    })
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load(cli)?;
    debug!(?config, "configuration loaded");
    let output = output::resolve_output_mode(cli.format, config.output.format.as_deref());

    match &cli.command {
        Commands::Color(args) => cmd::color::run_color(args, &config, output),
        Commands::Stats(args) => cmd::stats::run_stats(args, output),
        Commands::Generate(args) => cmd::generate::run_generate(args, &config, output),
        Commands::Sudoku(args) => cmd::sudoku::run_sudoku(args, output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error = CliError::from_anyhow(&err);
            // Nothing sensible remains to be done if stderr is gone.
            let _ = output::render_error(&error);
            ExitCode::from(error.exit_status())
        }
    }
}
