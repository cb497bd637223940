//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use concord::Properties;

/// One lint warning found by `concord check`.
#[derive(Debug)]
pub struct LintRow {
    /// File the template came from.
    pub file: String,
    /// 1-based line of the template.
    pub line: usize,
    /// Field the warning is about (`0`, `noun`, `=a`).
    pub field: String,
    /// Warning text.
    pub message: String,
}

/// Format lint warnings as an ASCII table.
pub fn format_lint_table(rows: &[LintRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Location", "Field", "Warning"]);

    for row in rows {
        table.add_row(vec![
            format!("{}:{}", row.file, row.line),
            row.field.clone(),
            row.message.clone(),
        ]);
    }

    table
}

/// Format a word's paradigm: one row per property combination.
pub fn format_paradigm_table(paradigm: &[(Properties, String)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Properties", "Form"]);

    for (properties, form) in paradigm {
        let key = if properties.is_empty() {
            "(none)".to_string()
        } else {
            properties.to_string()
        };
        table.add_row(vec![key, form.clone()]);
    }

    table
}
