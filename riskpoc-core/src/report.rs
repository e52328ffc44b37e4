//! Console report rendering.
//!
//! Purely a presentation step over already-validated data. Output goes to
//! an injected sink so tests can capture it without global state.

use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::{Result, RiskPocError};

#[derive(Tabled)]
struct TableRow<'a> {
    #[tabled(rename = "Table Name")]
    name: &'a str,
}

/// Renders the table listing for `database` into `out`.
///
/// An empty listing produces a single warning line. Otherwise the names
/// are sorted lexicographically for display and followed by a summary
/// line counting the input as given.
///
/// # Errors
/// Fails only when the sink rejects a write.
pub fn render_tables<W: Write>(out: &mut W, tables: &[String], database: &str) -> Result<()> {
    if tables.is_empty() {
        writeln!(out, "No tables found in database '{database}'").map_err(write_failed)?;
        return Ok(());
    }

    let mut names: Vec<&str> = tables.iter().map(String::as_str).collect();
    names.sort_unstable();

    let mut table = Table::new(names.into_iter().map(|name| TableRow { name }));
    table.with(Style::sharp());

    writeln!(out, "Tables in database '{database}'").map_err(write_failed)?;
    writeln!(out, "{table}").map_err(write_failed)?;
    writeln!(out, "\nTotal tables: {}", tables.len()).map_err(write_failed)?;

    Ok(())
}

fn write_failed(source: std::io::Error) -> RiskPocError {
    RiskPocError::Io {
        context: "writing report".to_string(),
        source,
    }
}
