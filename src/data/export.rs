use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, DemographicTable};

/// Write a table as CSV with a header row. Cells are written with the text
/// they were loaded from; nulls become empty fields.
pub fn save_csv(table: &DemographicTable, path: &Path) -> Result<()> {
    let writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_table(table, writer)
}

pub fn write_table<W: Write>(table: &DemographicTable, mut writer: csv::Writer<W>) -> Result<()> {
    writer
        .write_record(&table.columns)
        .context("writing CSV header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row.iter().map(CellValue::as_str))
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}
