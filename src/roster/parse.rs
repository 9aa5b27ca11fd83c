use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Header name of the member column. The DEWIS export nests a pipe-delimited
/// record inside one semicolon-delimited CSV column, so the pipe-joined
/// field list is literally the column's name.
pub const MEMBER_COLUMN: &str = "id|nachname|vorname|titel|verein|mglnr|status|dwz|dwzindex|turniercode|turnierende|fideid|fideelo|fidetitel";

/// Pull the member-column value out of every data row.
///
/// Returns (1-based data row number, raw composite value) pairs. Rows the
/// CSV reader rejects are skipped with a diagnostic; a missing member
/// column means no row is usable.
pub fn composite_values(text: &str) -> Result<Vec<(usize, String)>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .context("Roster has no readable header row")?
        .clone();
    debug!("Roster columns: {}", headers.iter().collect::<Vec<_>>().join(", "));

    let Some(col) = headers.iter().position(|h| h == MEMBER_COLUMN) else {
        if !headers.is_empty() {
            warn!("Roster is missing the member column; no rows usable");
        }
        return Ok(Vec::new());
    };

    let mut values = Vec::new();
    for (i, record) in reader.records().enumerate() {
        match record {
            Ok(row) => values.push((i + 1, row.get(col).unwrap_or("").to_string())),
            Err(e) => warn!("Skipping unreadable row {}: {}", i + 1, e),
        }
    }
    Ok(values)
}
