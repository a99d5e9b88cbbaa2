//! Output formatting: table, JSON, plain.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render `data` in the chosen format.
///
/// - `table`: `to_rows` builds the `Tabled` rows
/// - `json`: serializes `data` itself
/// - `plain`: `to_lines` emits one value per line
pub fn render<T, R>(
    format: OutputFormat,
    data: &T,
    to_rows: impl Fn(&T) -> Vec<R>,
    to_lines: impl Fn(&T) -> Vec<String>,
) -> Result<String, CliError>
where
    T: serde::Serialize + ?Sized,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => render_table(&to_rows(data)),
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Plain => to_lines(data).join("\n"),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Two-column row used by the detail views.
#[derive(Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
