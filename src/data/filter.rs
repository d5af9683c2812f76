use super::model::DemographicTable;

// ---------------------------------------------------------------------------
// Exact-match row filter
// ---------------------------------------------------------------------------

/// Result of filtering a dataset by one classification value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// At least one row matched.
    Rows(DemographicTable),
    /// Nothing matched; the caller shows a "no data" message.
    Empty,
}

impl FilterOutcome {
    pub fn rows(&self) -> Option<&DemographicTable> {
        match self {
            FilterOutcome::Rows(t) => Some(t),
            FilterOutcome::Empty => None,
        }
    }
}

/// Keep the rows whose `column` equals `value` exactly (case-sensitive).
///
/// Columns are kept in their original order. An absent column matches
/// nothing.
pub fn filter_rows(table: &DemographicTable, column: &str, value: &str) -> FilterOutcome {
    let Some(idx) = table.column_index(column) else {
        return FilterOutcome::Empty;
    };

    let rows: Vec<_> = table
        .rows
        .iter()
        .filter(|row| row[idx].matches(value))
        .cloned()
        .collect();

    if rows.is_empty() {
        FilterOutcome::Empty
    } else {
        FilterOutcome::Rows(DemographicTable {
            columns: table.columns.clone(),
            rows,
        })
    }
}
