//! CLI argument structures and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Color output mode for CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    /// Always output with colors
    Always,
    /// Never output with colors
    Never,
}

/// ctable - render console tables
#[derive(Parser, Debug)]
#[command(name = "ctable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Log level for diagnostics on stderr; defaults to RUST_LOG, then warn
    #[arg(long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Control color output: auto (default), always, or never
    #[arg(long = "color", global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The log level asked for on the command line, `--verbose` first.
    pub fn requested_log_level(&self) -> Option<LogLevel> {
        if self.verbose {
            Some(LogLevel::Debug)
        } else {
            self.log_level
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a table document to stdout
    Render(RenderArgs),

    /// Print the expansion of a border pattern
    Pattern(PatternArgs),
}

/// Arguments for `ctable render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// TOML table document, `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Width budget; defaults to the terminal width minus one
    #[arg(long, short = 'w', env = "CTABLE_WIDTH")]
    pub width: Option<usize>,
}

/// Arguments for `ctable pattern`.
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Border pattern, e.g. "[+](-)[+]"
    pub pattern: String,

    /// Number of glyphs to expand to
    pub width: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_overrides_log_level() {
        let cli = Cli::parse_from(["ctable", "-v", "--log-level", "error", "pattern", "-", "3"]);
        assert_eq!(cli.requested_log_level(), Some(LogLevel::Debug));
        let cli = Cli::parse_from(["ctable", "pattern", "-", "3", "--log-level", "trace"]);
        assert_eq!(cli.requested_log_level(), Some(LogLevel::Trace));
        let cli = Cli::parse_from(["ctable", "pattern", "-", "3"]);
        assert_eq!(cli.requested_log_level(), None);
    }

    #[test]
    fn render_args() {
        let cli = Cli::parse_from(["ctable", "render", "table.toml", "--width", "40", "--color", "never"]);
        assert_eq!(cli.color, ColorMode::Never);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.file, PathBuf::from("table.toml"));
                assert_eq!(args.width, Some(40));
            }
            Commands::Pattern(_) => panic!("expected render"),
        }
    }
}
