//! Shared output layer for the `chroma` commands.
//!
//! Every command handler receives an [`OutputMode`]: framed sections for
//! humans, or plain whitespace-separated lines for scripts and pipes.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. `--format`
//! 2. `CHROMA_FORMAT` env var: `"pretty"` | `"text"`
//! 3. `[output] format` in the config file
//! 4. Default: [`OutputMode::Pretty`] if stdout is a TTY, [`OutputMode::Text`] if piped.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use chroma_core::ErrorCode;
use clap::ValueEnum;

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 60;

/// Write a horizontal separator used by pretty human output.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn pretty_kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<16} {}", format!("{key}:"), value.as_ref())
}

/// The output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Sections, rules and aligned key/value lines.
    Pretty,
    /// One fact per line, no framing.
    Text,
}

fn parse_mode(raw: &str) -> Option<OutputMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "pretty" => Some(OutputMode::Pretty),
        "text" => Some(OutputMode::Text),
        _ => None,
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    format_env: Option<&str>,
    config_format: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    // Unknown values fall through to the next source.
    if let Some(mode) = format_env.and_then(parse_mode) {
        return mode;
    }
    if let Some(mode) = config_format.and_then(parse_mode) {
        return mode;
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from the `--format` flag, `CHROMA_FORMAT`, the
/// config file and finally TTY detection.
pub fn resolve_output_mode(
    format_flag: Option<OutputMode>,
    config_format: Option<&str>,
) -> OutputMode {
    let env_val = std::env::var("CHROMA_FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, env_val.as_deref(), config_format, is_tty)
}

/// Render to stdout with the writer matching `mode`.
pub fn render(
    mode: OutputMode,
    text_fn: impl FnOnce(&mut dyn Write) -> io::Result<()>,
    pretty_fn: impl FnOnce(&mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Pretty => pretty_fn(&mut out)?,
        OutputMode::Text => text_fn(&mut out)?,
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A user-facing failure with an optional machine code and remediation hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    pub suggestion: Option<String>,
    /// Machine-readable error code.
    pub code: Option<ErrorCode>,
}

impl CliError {
    /// Create a simple error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            code: None,
        }
    }

    /// Create an error carrying `code` and its standard hint.
    pub fn with_code(code: ErrorCode, message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
            suggestion: code.hint().map(str::to_string),
            code: Some(code),
        }
    }

    /// Recover the coded error from an `anyhow` chain, or wrap the whole
    /// chain as an uncoded message.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<Self>())
            .cloned()
            .unwrap_or_else(|| Self::new(format!("{err:#}")))
    }

    /// Process exit status: 2 when the palette was insufficient, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.code == Some(ErrorCode::NotEnoughColors) { 2 } else { 1 }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Write `error` to `w` as `error[CODE]: message` plus an indented hint.
pub fn write_error(w: &mut dyn Write, error: &CliError) -> io::Result<()> {
    match error.code {
        Some(code) => writeln!(w, "error[{code}]: {}", error.message)?,
        None => writeln!(w, "error: {}", error.message)?,
    }
    if let Some(ref suggestion) = error.suggestion {
        writeln!(w, "  hint: {suggestion}")?;
    }
    Ok(())
}

/// Render an error to stderr.
pub fn render_error(error: &CliError) -> io::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    write_error(&mut out, error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_env_and_config() {
        let mode = resolve_output_mode_inner(Some(OutputMode::Text), Some("pretty"), None, true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn env_overrides_config() {
        let mode = resolve_output_mode_inner(None, Some("TEXT"), Some("pretty"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn config_used_when_env_unknown() {
        let mode = resolve_output_mode_inner(None, Some("yaml"), Some("text"), true);
        assert_eq!(mode, OutputMode::Text);
    }

    #[test]
    fn tty_decides_last() {
        assert_eq!(resolve_output_mode_inner(None, None, None, true), OutputMode::Pretty);
        assert_eq!(resolve_output_mode_inner(None, None, None, false), OutputMode::Text);
    }

    #[test]
    fn coded_error_rendering() {
        let err = CliError::with_code(ErrorCode::NotEnoughColors, "ran out");
        let mut out = Vec::new();
        write_error(&mut out, &err).expect("write");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("error[E2001]: ran out"), "{rendered}");
        assert!(rendered.contains("hint: Retry with a larger palette"), "{rendered}");
        assert_eq!(err.exit_status(), 2);
    }

    #[test]
    fn coded_error_survives_context() {
        let err = anyhow::Error::new(CliError::with_code(ErrorCode::SelfLoop, "loop"))
            .context("while coloring");
        let recovered = CliError::from_anyhow(&err);
        assert_eq!(recovered.code, Some(ErrorCode::SelfLoop));
        assert_eq!(recovered.exit_status(), 1);

        let plain = CliError::from_anyhow(&anyhow::anyhow!("boom"));
        assert_eq!(plain.code, None);
        assert_eq!(plain.message, "boom");
    }

    #[test]
    fn pretty_helpers_align() {
        let mut out = Vec::new();
        pretty_section(&mut out, "Coloring").expect("section");
        pretty_kv(&mut out, "colors", "3").expect("kv");
        let rendered = String::from_utf8(out).expect("utf8");
        assert!(rendered.starts_with("Coloring\n---"));
        assert!(rendered.contains("colors:          3"));
    }
}
