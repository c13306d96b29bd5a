//! End-to-end rendering through the content layer.

use ctable::config::{CellConfig, RowConfig, TableConfig};
use ctable::core::{BoxStyle, ColorToken, CornerMerge, PaletteColor, SizeBounds};
use ctable::{Cell, Render, Table};
use pretty_assertions::assert_eq;
use std::fmt::Write;

fn single(text: &str) -> Table {
    let mut table = Table::new();
    write!(table.push_row().push_cell(), "{text}").unwrap();
    table
}

#[test]
fn narrow_budget_wraps_single_cell() {
    assert_eq!(single("hello world").render_lines(5), ["hello", "world"]);
}

#[test]
fn slack_is_shared_in_proportion_to_wanted_width() {
    let bounded = |pref, min| CellConfig {
        width: SizeBounds::new().with_pref(pref).with_min(min),
        ..CellConfig::default()
    };
    let mut table = Table::with_config(TableConfig {
        rows: vec![RowConfig {
            cells: vec![bounded(10, 2), bounded(20, 2)],
            ..RowConfig::default()
        }],
        ..TableConfig::default()
    });
    let row = table.push_row();
    write!(row.push_cell(), "a").unwrap();
    write!(row.push_cell(), "b").unwrap();

    // slack 12 over wanted 8:18 floors to 3 + 8, the spare unit goes to the
    // first column
    assert_eq!(table.render_lines(16), ["a     b         "]);
}

#[test]
fn max_width_holds_while_slack_is_shared() {
    let capped = CellConfig {
        width: SizeBounds::new().with_pref(10).with_max(3),
        ..CellConfig::default()
    };
    let open = CellConfig {
        width: SizeBounds::new().with_pref(10),
        ..CellConfig::default()
    };
    let mut table = Table::with_config(TableConfig {
        rows: vec![RowConfig {
            cells: vec![capped, open],
            ..RowConfig::default()
        }],
        ..TableConfig::default()
    });
    let row = table.push_row();
    write!(row.push_cell(), "abcdef").unwrap();
    write!(row.push_cell(), "b").unwrap();

    assert_eq!(table.render_lines(12), ["abcb        ", "def         "]);
}

#[test]
fn rewrapping_wrapped_text_is_stable() {
    let text = "the quick brown fox jumps over the lazy dog";
    for width in [5, 9, 15, 43] {
        let lines = single(text).render_lines(width);
        let joined = lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(single(&joined).render_lines(width), lines, "width {width}");
    }
}

#[test]
fn forced_breaks_survive_wrapping() {
    assert_eq!(single("ab\ncd ef").render_lines(80), ["ab   ", "cd ef"]);
}

#[test]
fn boxed_table_with_header_divider() {
    let header = RowConfig {
        style: BoxStyle::new()
            .with_margin((0, 0, 1, 0))
            .with_pattern("─"),
        ..RowConfig::default()
    };
    let cell = CellConfig {
        style: BoxStyle::new().with_padding((0, 1)),
        ..CellConfig::default()
    };
    let body = RowConfig {
        cells: vec![cell.clone()],
        ..RowConfig::default()
    };
    let mut table = Table::with_config(TableConfig {
        headers: vec![RowConfig {
            cells: vec![cell],
            ..header
        }],
        rows: vec![body],
        style: BoxStyle::new()
            .with_margin(1)
            .with_pattern(("─", "│"))
            .with_corners(CornerMerge::Rounded),
        ..TableConfig::default()
    });

    let head = table.push_header();
    write!(head.push_cell(), "name").unwrap();
    write!(head.push_cell(), "size").unwrap();
    for (name, size) in [("a.rs", "12"), ("lib.rs", "3")] {
        let row = table.push_row();
        write!(row.push_cell(), "{name}").unwrap();
        write!(row.push_cell(), "{size}").unwrap();
    }

    assert_eq!(
        table.render_lines(80),
        [
            "╭──────────────╮",
            "│ name    size │",
            "│──────────────│",
            "│ a.rs    12   │",
            "│ lib.rs  3    │",
            "╰──────────────╯",
        ]
    );
}

#[test]
fn budget_below_borders_degrades_to_borders() {
    let mut table = single("text");
    table.config_mut().style = BoxStyle::new().with_margin(1).with_pattern(("-", "|"));
    assert_eq!(table.render_lines(2), ["--", "--"]);
}

#[test]
fn ansi_output_colors_text_and_resets() {
    let mut cell = Cell::new();
    cell.set_color(PaletteColor::Red.into(), ColorToken::Current);
    write!(cell, "hot").unwrap();
    let mut table = Table::new();
    table.push_row().push(cell);

    let ansi = table.render_ansi(80);
    assert!(ansi.contains("\x1b[38;5;1mhot"), "{ansi:?}");
    assert!(ansi.ends_with("\x1b[0m\n"), "{ansi:?}");
    assert_eq!(table.render_plain(80), "hot\n");
    assert_eq!(format!("{table:80}"), "hot");
}

#[test]
fn write_to_uses_explicit_width() {
    let mut out = Vec::new();
    single("hello world")
        .write_to(&mut out, Some(5), false)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "hello\nworld\n");
}

#[test]
fn config_from_toml_renders() {
    let config = TableConfig::from_toml_str(
        r#"
        [box]
        corners = "ascii"
        [box.top]
        margin = 1
        pattern = "-"
        [box.bottom]
        margin = 1
        pattern = "-"
        [box.left]
        margin = 1
        pattern = "|"
        [box.right]
        margin = 1
        pattern = "|"

        [[rows]]
        [[rows.cells]]
        box = { align = { horizontal = "right" } }
        width = { min = 5 }
        "#,
    )
    .unwrap();
    let mut table = Table::with_config(config);
    write!(table.push_row().push_cell(), "42").unwrap();
    assert_eq!(table.render_lines(80), ["+-----+", "|   42|", "+-----+"]);
}
