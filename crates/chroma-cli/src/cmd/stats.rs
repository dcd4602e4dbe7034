//! `chroma stats`: structural statistics of a problem's graph.

use std::io::{self, Write};
use std::path::PathBuf;

use chroma_core::graph::{GraphStats, check_colorable};
use chroma_core::Problem;
use clap::Args;
use tracing::instrument;

use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render};

/// Arguments for `chroma stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Problem file (TOML).
    pub file: PathBuf,
}

/// Execute `chroma stats`.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let problem =
        Problem::load(&args.file).map_err(|err| CliError::with_code(err.code(), &err))?;
    let graph = problem.graph();
    let stats = GraphStats::from_graph(&graph);
    let colorable = check_colorable(&graph).err().map(|err| err.to_string());

    render(
        output,
        |w| render_stats_text(&stats, colorable.as_deref(), w),
        |w| render_stats_pretty(&stats, colorable.as_deref(), w),
    )
}

fn render_stats_text(stats: &GraphStats, problem: Option<&str>, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "nodes={}", stats.node_count)?;
    writeln!(w, "edges={}", stats.edge_count)?;
    writeln!(w, "density={:.4}", stats.density)?;
    writeln!(w, "max_degree={}", stats.max_degree)?;
    writeln!(w, "min_degree={}", stats.min_degree)?;
    writeln!(w, "components={}", stats.component_count)?;
    writeln!(w, "isolated={}", stats.isolated_node_count)?;
    writeln!(w, "greedy_bound={}", stats.greedy_bound())?;
    writeln!(w, "colorable={}", problem.unwrap_or("yes"))
}

fn render_stats_pretty(
    stats: &GraphStats,
    problem: Option<&str>,
    w: &mut dyn Write,
) -> io::Result<()> {
    pretty_section(w, "Graph")?;
    pretty_kv(w, "nodes", stats.node_count.to_string())?;
    pretty_kv(w, "edges", stats.edge_count.to_string())?;
    pretty_kv(w, "density", format!("{:.4}", stats.density))?;
    pretty_kv(w, "degree", format!("{}..={}", stats.min_degree, stats.max_degree))?;
    pretty_kv(w, "components", stats.component_count.to_string())?;
    pretty_kv(w, "isolated", stats.isolated_node_count.to_string())?;

    writeln!(w)?;
    pretty_section(w, "Coloring")?;
    pretty_kv(w, "greedy bound", format!("at most {} colors", stats.greedy_bound()))?;
    if stats.is_complete() {
        pretty_kv(w, "lower bound", format!("{} colors (complete graph)", stats.node_count))?;
    } else if stats.is_edgeless() && stats.node_count > 0 {
        pretty_kv(w, "lower bound", "1 color (no edges)")?;
    }
    pretty_kv(w, "colorable", problem.unwrap_or("yes"))
}
