//! Handles all user-facing output for the CLI.
//!
//! The engine hands over plain data; this module turns it into a boxed
//! terminal table, CSV, or JSON. Table layout is computed as a `String` first
//! so it can be tested without a terminal.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::engine::ChartData;
use crate::errors::{FolioError, FolioResult};
use crate::stats::{SceneLabel, StatsGrid};

// ============================================================================
// TOTALS TABLE
// ============================================================================

const TABLE_HEADERS: [&str; 2] = ["Character", "Lines"];

/// Lays out `(name, lines)` pairs as a boxed two-column table.
pub fn render_totals_table(totals: &[(&str, usize)]) -> String {
    let counts: Vec<String> = totals.iter().map(|(_, n)| n.to_string()).collect();
    let name_width = totals
        .iter()
        .map(|(name, _)| name.width())
        .chain([TABLE_HEADERS[0].width()])
        .max()
        .unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|c| c.width())
        .chain([TABLE_HEADERS[1].width()])
        .max()
        .unwrap_or(0);
    let widths = [name_width, count_width];

    let mut table = String::new();
    table.push_str(&rule(&widths, ('╒', '╤', '╕'), '═'));
    table.push_str(&format!(
        "│ {} │ {} │\n",
        pad_right(TABLE_HEADERS[0], name_width),
        pad_left(TABLE_HEADERS[1], count_width)
    ));
    table.push_str(&rule(&widths, ('╞', '╪', '╡'), '═'));
    for (row, ((name, _), count)) in totals.iter().zip(&counts).enumerate() {
        if row > 0 {
            table.push_str(&rule(&widths, ('├', '┼', '┤'), '─'));
        }
        table.push_str(&format!(
            "│ {} │ {} │\n",
            pad_right(name, name_width),
            pad_left(count, count_width)
        ));
    }
    table.push_str(&rule(&widths, ('╘', '╧', '╛'), '═'));
    table
}

/// Prints the play title in bold followed by the totals table.
pub fn print_totals(title: &str, totals: &[(&str, usize)]) -> FolioResult<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let stdout_err = |e: std::io::Error| FolioError::io("<stdout>", e);
    stdout
        .set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))
        .map_err(stdout_err)?;
    writeln!(stdout, "{title}:").map_err(stdout_err)?;
    stdout.reset().map_err(stdout_err)?;
    write!(stdout, "{}", render_totals_table(totals)).map_err(stdout_err)?;
    Ok(())
}

fn rule(widths: &[usize], (left, mid, right): (char, char, char), fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{left}{}{right}\n", segments.join(&mid.to_string()))
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{text}{}", " ".repeat(width.saturating_sub(text.width())))
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{}{text}", " ".repeat(width.saturating_sub(text.width())))
}

// ============================================================================
// SCENES
// ============================================================================

/// One `index<TAB>label` line per scene.
pub fn render_scenes(scenes: &[SceneLabel]) -> String {
    scenes
        .iter()
        .map(|s| format!("{}\t{}\n", s.scene_index, s.label))
        .collect()
}

// ============================================================================
// EXPORTS
// ============================================================================

/// Writes the grid as CSV: header row, then one row per ranked character.
pub fn write_grid_csv<W: Write>(grid: &StatsGrid, writer: W) -> FolioResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(grid.header())?;
    for row in grid.export_rows() {
        csv.write_record(&row)?;
    }
    csv.flush().map_err(|e| FolioError::io("<csv output>", e))?;
    Ok(())
}

/// Writes chart series as pretty-printed JSON.
pub fn write_chart_json<W: Write>(chart: &ChartData, mut writer: W) -> FolioResult<()> {
    serde_json::to_writer_pretty(&mut writer, chart)?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(|e| FolioError::io("<json output>", e))?;
    Ok(())
}
