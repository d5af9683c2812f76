use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a demographic table
// ---------------------------------------------------------------------------

/// A CSV cell typed by inspection.
///
/// Numeric cells keep the field text they were parsed from, so `"2.50"`
/// is shown, matched and exported as `"2.50"`, never as `"2.5"`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer { value: i64, raw: String },
    Float { value: f64, raw: String },
    Null,
}

impl CellValue {
    /// Guess the type of a raw CSV field.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        let raw = s.to_string();
        if let Ok(value) = s.parse::<i64>() {
            return CellValue::Integer { value, raw };
        }
        if let Ok(value) = s.parse::<f64>() {
            return CellValue::Float { value, raw };
        }
        CellValue::Text(raw)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer { .. } | CellValue::Float { .. })
    }

    /// The field text as it appeared in the file; empty for nulls.
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Text(s) => s,
            CellValue::Integer { raw, .. } | CellValue::Float { raw, .. } => raw,
            CellValue::Null => "",
        }
    }

    /// Whether the cell's field text equals `value` exactly.
    pub fn matches(&self, value: &str) -> bool {
        self.as_str() == value
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DemographicTable – one loaded dataset
// ---------------------------------------------------------------------------

/// Name of the classification column every dataset must carry.
pub const STRUCTURE_COLUMN: &str = "Structure";

/// Rows of a dataset in file order. Every row has `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemographicTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl DemographicTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Distinct values of a column in first-seen order.
    pub fn distinct_values(&self, column: &str) -> Option<Vec<String>> {
        let idx = self.column_index(column)?;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for row in &self.rows {
            let v = row[idx].as_str();
            if seen.insert(v) {
                out.push(v.to_string());
            }
        }
        Some(out)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
