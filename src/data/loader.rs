use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, DemographicTable};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a demographic dataset from a CSV file with a header row.
///
/// Every column is kept, in file order, with header names exactly as
/// written. Cells are typed by inspection; a row whose field count differs
/// from the header is a parse error.
pub fn load_csv(path: &Path) -> Result<DemographicTable> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_table(reader)
}

/// Parse a dataset from any CSV source.
pub fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<DemographicTable> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = DemographicTable::new(headers);

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        table
            .rows
            .push(record.iter().map(CellValue::parse).collect());
    }

    Ok(table)
}
