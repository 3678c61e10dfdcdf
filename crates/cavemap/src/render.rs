//! Text and JSON output for a generated cave.
//!
//! Nothing here mutates the grid. The text format is the rule summary
//! followed by the map, one line per row, `#` for walls and `.` for floor.

use cavemap_automata::{CaveConfig, FillProbability, RuleSet};
use cavemap_core::TileGrid;
use serde::Serialize;

use crate::OutputFormat;

/// One line per rule, preceded by the initial fill line. No trailing newlines.
///
/// The radius-2 clause is left out for rules whose `r2_threshold` is negative.
pub fn rule_summary_lines(fill: FillProbability, rules: &RuleSet) -> Vec<String> {
    let mut lines = Vec::with_capacity(rules.len() + 1);
    lines.push(format!("W[0](p) = rand[0,100) < {}", fill.percent()));

    for rule in rules {
        let mut line = format!(
            "Repeat {}: W'(p) = R[1](p) >= {}",
            rule.repeat_count, rule.r1_threshold
        );
        if rule.uses_r2() {
            line.push_str(&format!(" || R[2](p) <= {}", rule.r2_threshold));
        }
        lines.push(line);
    }

    lines
}

/// The rule summary as newline-terminated text
pub fn rule_summary(fill: FillProbability, rules: &RuleSet) -> String {
    let mut out = String::new();
    for line in rule_summary_lines(fill, rules) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Rows of glyphs, top to bottom, without line terminators
fn map_lines(grid: &TileGrid) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(|tile| tile.glyph()).collect())
        .collect()
}

/// The map as newline-terminated rows
pub fn render_map(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for line in map_lines(grid) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a CaveConfig,
    summary: Vec<String>,
    map: Vec<String>,
}

/// A single JSON document holding the config, the rule summary lines and the map rows
pub fn render_json(config: &CaveConfig, grid: &TileGrid) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        config,
        summary: rule_summary_lines(config.fill, &config.rules),
        map: map_lines(grid),
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}

/// Everything the binary writes to standard output for `format`
pub fn render_output(
    format: OutputFormat,
    config: &CaveConfig,
    grid: &TileGrid,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            let mut out = rule_summary(config.fill, &config.rules);
            out.push_str(&render_map(grid));
            Ok(out)
        }
        OutputFormat::Json => render_json(config, grid),
    }
}
