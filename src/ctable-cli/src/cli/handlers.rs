//! Command dispatch and execution handlers.

use anyhow::{Context, Result};
use ctable::engine::pattern::{expand, glyph_string};
use ctable::Render;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use super::args::{Cli, ColorMode, Commands, PatternArgs, RenderArgs};
use crate::document::Document;

/// Dispatch a CLI command to its handler.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let color = use_color(cli.color, io::stdout().is_terminal(), no_color);
    match cli.command {
        Commands::Render(args) => run_render(args, color),
        Commands::Pattern(args) => run_pattern(args),
    }
}

/// Decides whether to emit ANSI colors.
pub fn use_color(mode: ColorMode, is_terminal: bool, no_color: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_terminal && !no_color,
    }
}

fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read document from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))
}

fn run_render(args: RenderArgs, color: bool) -> Result<()> {
    let text = read_document(&args.file)?;
    let table = Document::from_toml_str(&text)
        .with_context(|| format!("Invalid document: {}", args.file.display()))?
        .build()?;

    tracing::debug!(width = ?args.width, color, "rendering table");
    let mut stdout = io::stdout().lock();
    table
        .write_to(&mut stdout, args.width, color)
        .context("Failed to write table")?;
    Ok(())
}

fn run_pattern(args: PatternArgs) -> Result<()> {
    let glyphs = expand(Some(args.pattern.as_str()), args.width);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", glyph_string(&glyphs)).context("Failed to write pattern")?;
    Ok(())
}
