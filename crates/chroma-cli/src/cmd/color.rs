//! `chroma color`: color the graph of a TOML problem file.

use std::path::PathBuf;

use anyhow::Context;
use chroma_core::config::ChromaConfig;
use chroma_core::coloring::{coloring, verify};
use chroma_core::{Algorithm, Problem};
use clap::Args;
use tracing::{info, instrument, warn};

use super::{AlgorithmArg, ColoringReport};
use crate::output::{CliError, OutputMode, render};

/// Arguments for `chroma color`.
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Problem file (TOML).
    pub file: PathBuf,

    /// Coloring algorithm (default: from config, else greedy).
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Size of the numbered palette used when the problem names no colors.
    #[arg(long, value_name = "N")]
    pub colors: Option<usize>,

    /// Check the result independently before printing it.
    #[arg(long, overrides_with = "no_verify")]
    pub verify: bool,

    /// Skip the independent check, even when the config enables it.
    #[arg(long, overrides_with = "verify")]
    pub no_verify: bool,
}

impl ColorArgs {
    /// Flags win over `coloring.verify` in the config.
    const fn should_verify(&self, config: &ChromaConfig) -> bool {
        if self.no_verify {
            false
        } else {
            self.verify || config.coloring.verify
        }
    }
}

/// Execute `chroma color`.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn run_color(args: &ColorArgs, config: &ChromaConfig, output: OutputMode) -> anyhow::Result<()> {
    let problem =
        Problem::load(&args.file).map_err(|err| CliError::with_code(err.code(), &err))?;
    let graph = problem.graph();
    let palette = problem.palette(args.colors.unwrap_or(config.coloring.palette_size));
    let partial = problem
        .partial(&graph)
        .map_err(|err| CliError::with_code(err.code(), &err))?;

    let mut algorithm = args.algorithm.map_or(config.coloring.algorithm, Algorithm::from);
    if problem.has_precolored() && algorithm != Algorithm::Backtracking {
        warn!(precolored = partial.len(), "pre-colored nodes need backtracking; switching algorithm");
        algorithm = Algorithm::Backtracking;
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        colors = palette.len(),
        %algorithm,
        "coloring problem"
    );

    let selector = coloring(&graph)
        .map_err(|err| CliError::with_code(err.code(), &err))?
        .with_colors(palette);
    let result = if partial.is_empty() {
        selector.apply(algorithm)
    } else {
        selector.backtracking_from(partial)
    };
    let result = result.map_err(|err| CliError::with_code(err.code(), &err))?;

    let verified = args.should_verify(config);
    if verified {
        verify(&graph, &result).context("coloring failed verification")?;
    }

    let report = ColoringReport::new(
        &result,
        algorithm,
        selector.palette().len(),
        verified,
        |idx| graph.label(*idx).unwrap_or_default().to_string(),
    );
    render(output, |w| report.render_text(w), |w| report.render_pretty(w))
}
