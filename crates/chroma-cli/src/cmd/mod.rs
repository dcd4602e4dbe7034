//! Subcommand handlers and the coloring report they share.

pub mod color;
pub mod generate;
pub mod stats;
pub mod sudoku;

use std::fmt;
use std::hash::Hash;
use std::io::{self, Write};

use chroma_core::{Algorithm, Coloring};
use clap::ValueEnum;

use crate::output::{pretty_kv, pretty_section};

/// `--algorithm` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// First-fit by descending degree.
    Greedy,
    /// Exhaustive search; failure proves the palette is too small.
    Backtracking,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Greedy => Self::Greedy,
            AlgorithmArg::Backtracking => Self::Backtracking,
        }
    }
}

/// Outcome of one coloring run, with nodes and colors already rendered as
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringReport {
    pub algorithm: Algorithm,
    pub palette_size: usize,
    pub required_colors: usize,
    /// `false` when verification was skipped.
    pub verified: bool,
    /// `(color, nodes)` in first-use order.
    pub classes: Vec<(String, Vec<String>)>,
}

impl ColoringReport {
    /// Summarize `result`. Classes keep first-use order; nodes within a
    /// class are listed in node order and rendered with `label`.
    pub fn new<N, C>(
        result: &Coloring<N, C>,
        algorithm: Algorithm,
        palette_size: usize,
        verified: bool,
        label: impl Fn(&N) -> String,
    ) -> Self
    where
        N: Ord + Hash,
        C: Clone + PartialEq + fmt::Display,
    {
        let classes = result
            .color_classes()
            .into_iter()
            .map(|(color, mut nodes)| {
                nodes.sort_unstable();
                (color.to_string(), nodes.into_iter().map(&label).collect())
            })
            .collect();

        Self {
            algorithm,
            palette_size,
            required_colors: result.required_colors(),
            verified,
            classes,
        }
    }

    const fn verified_label(&self) -> &'static str {
        if self.verified { "yes" } else { "skipped" }
    }

    /// Plain output: a summary line, then one `node color` line per node.
    pub fn render_text(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "algorithm={} palette={} required={} verified={}",
            self.algorithm,
            self.palette_size,
            self.required_colors,
            self.verified_label()
        )?;
        for (color, nodes) in &self.classes {
            for node in nodes {
                writeln!(w, "{node} {color}")?;
            }
        }
        Ok(())
    }

    /// Framed summary plus one line per color class.
    pub fn render_pretty(&self, w: &mut dyn Write) -> io::Result<()> {
        pretty_section(w, "Coloring")?;
        pretty_kv(w, "algorithm", self.algorithm.as_str())?;
        pretty_kv(w, "palette", self.palette_size.to_string())?;
        pretty_kv(w, "required colors", self.required_colors.to_string())?;
        pretty_kv(w, "verified", self.verified_label())?;

        if self.classes.is_empty() {
            return Ok(());
        }
        writeln!(w)?;
        pretty_section(w, "Color classes")?;
        for (color, nodes) in &self.classes {
            writeln!(w, "{color:<12} ({:>3})  {}", nodes.len(), nodes.join(", "))?;
        }
        Ok(())
    }

    /// Short pretty summary without the class listing, for large graphs.
    pub fn render_pretty_summary(&self, w: &mut dyn Write) -> io::Result<()> {
        pretty_kv(w, "algorithm", self.algorithm.as_str())?;
        pretty_kv(w, "palette", self.palette_size.to_string())?;
        pretty_kv(w, "required colors", self.required_colors.to_string())?;
        pretty_kv(w, "verified", self.verified_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ColoringReport {
        ColoringReport {
            algorithm: Algorithm::Greedy,
            palette_size: 3,
            required_colors: 2,
            verified: true,
            classes: vec![
                ("red".to_string(), vec!["a".to_string(), "c".to_string()]),
                ("green".to_string(), vec!["b".to_string()]),
            ],
        }
    }

    #[test]
    fn text_lists_every_node() {
        let mut out = Vec::new();
        report().render_text(&mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert_eq!(
            rendered,
            "algorithm=greedy palette=3 required=2 verified=yes\na red\nc red\nb green\n"
        );
    }

    #[test]
    fn new_orders_nodes_within_class() {
        let result: Coloring<u32, &str> = [(3, "red"), (1, "red"), (2, "green")].into_iter().collect();
        let report = ColoringReport::new(&result, Algorithm::Backtracking, 4, false, |n| format!("n{n}"));
        assert_eq!(report.required_colors, 2);
        assert_eq!(report.classes[0].0, "red");
        assert_eq!(report.classes[0].1, ["n1", "n3"]);
        assert_eq!(report.classes[1].1, ["n2"]);
        assert_eq!(report.verified_label(), "skipped");
    }

    #[test]
    fn pretty_groups_classes() {
        let mut out = Vec::new();
        report().render_pretty(&mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.contains("Color classes"));
        assert!(rendered.contains("a, c"));
        assert!(rendered.contains("required colors: 2"), "{rendered}");
    }
}
