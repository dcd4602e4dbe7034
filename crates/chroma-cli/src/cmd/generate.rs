//! `chroma generate`: build a graph from a known family and color it.

use chroma_core::config::ChromaConfig;
use chroma_core::coloring::{Palette, coloring, verify};
use chroma_core::graph::{GraphStats, generate};
use chroma_core::Algorithm;
use clap::{Args, ValueEnum};
use petgraph::graph::UnGraph;
use tracing::{info, instrument};

use super::{AlgorithmArg, ColoringReport};
use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render};

/// Graph families `chroma generate` can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphKind {
    /// Every pair of nodes adjacent.
    Complete,
    /// Two halves, every cross pair adjacent.
    Bipartite,
    /// A single ring.
    Cycle,
    /// No edges.
    Empty,
    /// Seeded G(n, p).
    Random,
}

/// Arguments for `chroma generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Graph family.
    #[arg(value_enum)]
    pub kind: GraphKind,

    /// Number of nodes.
    #[arg(long, short = 'n')]
    pub nodes: usize,

    /// Edge probability for `random`.
    #[arg(long, default_value_t = 0.1)]
    pub probability: f64,

    /// Seed for `random`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Coloring algorithm (default: from config, else greedy).
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Palette size (default: from config).
    #[arg(long, value_name = "N")]
    pub colors: Option<usize>,
}

impl GenerateArgs {
    fn build(&self) -> UnGraph<usize, ()> {
        match self.kind {
            GraphKind::Complete => generate::complete(self.nodes),
            GraphKind::Bipartite => {
                let left = self.nodes / 2;
                generate::complete_bipartite(left, self.nodes - left)
            }
            GraphKind::Cycle => generate::cycle(self.nodes),
            GraphKind::Empty => generate::empty(self.nodes),
            GraphKind::Random => generate::random(self.nodes, self.probability, self.seed),
        }
    }
}

/// Execute `chroma generate`.
#[instrument(skip_all, fields(kind = ?args.kind, nodes = args.nodes))]
pub fn run_generate(
    args: &GenerateArgs,
    config: &ChromaConfig,
    output: OutputMode,
) -> anyhow::Result<()> {
    let graph = args.build();
    let stats = GraphStats::from_graph(&graph);
    let algorithm = args.algorithm.map_or(config.coloring.algorithm, Algorithm::from);
    let palette = Palette::numbered(args.colors.unwrap_or(config.coloring.palette_size));
    info!(edges = stats.edge_count, colors = palette.len(), %algorithm, "generated graph");

    let result = coloring(&graph)
        .map_err(|err| CliError::with_code(err.code(), &err))?
        .with_colors(palette)
        .apply(algorithm)
        .map_err(|err| CliError::with_code(err.code(), &err))?;

    let verified = config.coloring.verify;
    if verified {
        verify(&graph, &result)?;
    }

    let report = ColoringReport::new(
        &result,
        algorithm,
        args.colors.unwrap_or(config.coloring.palette_size),
        verified,
        |idx| idx.index().to_string(),
    );

    render(
        output,
        |w| report.render_text(w),
        |w| {
            pretty_section(w, "Generated graph")?;
            pretty_kv(w, "kind", format!("{:?}", args.kind).to_lowercase())?;
            pretty_kv(w, "nodes", stats.node_count.to_string())?;
            pretty_kv(w, "edges", stats.edge_count.to_string())?;
            pretty_kv(w, "max degree", stats.max_degree.to_string())?;
            report.render_pretty_summary(w)
        },
    )
}
