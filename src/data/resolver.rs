use std::path::Path;

use anyhow::anyhow;

use super::loader::load_csv;
use super::model::{DemographicTable, STRUCTURE_COLUMN};
use super::selection::Selection;
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Selection → dataset
// ---------------------------------------------------------------------------

/// A dataset loaded for a selection, with its structure picker options.
#[derive(Debug, Clone)]
pub struct ResolvedDataset {
    /// File name the dataset was read from.
    pub file_name: String,
    pub table: DemographicTable,
    /// Distinct `Structure` values in first-seen order.
    pub structures: Vec<String>,
}

/// Load the dataset named by `selection` from `data_dir`.
///
/// Any failure (missing file, parse error, no `Structure` column) is
/// reported as [`DashboardError::DatasetNotFound`].
pub fn resolve(data_dir: &Path, selection: &Selection) -> Result<ResolvedDataset> {
    let file_name = selection.dataset_file_name();
    let path = data_dir.join(&file_name);

    let not_found = |source: anyhow::Error| DashboardError::DatasetNotFound {
        file: file_name.clone(),
        source,
    };

    let table = load_csv(&path).map_err(not_found)?;
    let structures = table
        .distinct_values(STRUCTURE_COLUMN)
        .ok_or_else(|| not_found(anyhow!("missing '{STRUCTURE_COLUMN}' column")))?;

    log::info!(
        "Loaded {file_name}: {} rows, {} structure types",
        table.len(),
        structures.len()
    );

    Ok(ResolvedDataset {
        file_name,
        table,
        structures,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::data::reference::{StateRef, STATES};
    use crate::data::selection::{Category, UnitType};

    fn ohio_pop() -> Selection {
        Selection {
            state: StateRef::lookup("Ohio").unwrap(),
            unit_type: UnitType::AllUnits,
            category: Category::PersonsByAge,
        }
    }

    #[test]
    fn resolves_existing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("DM_pop_OHIO_ALLunits.csv"),
            "Structure,BR,Total\n\
             Single Family,2,2.41\n\
             Multifamily,1,1.62\n\
             Single Family,3,3.05\n",
        )
        .unwrap();

        let resolved = resolve(dir.path(), &ohio_pop()).unwrap();
        assert_eq!(resolved.file_name, "DM_pop_OHIO_ALLunits.csv");
        assert_eq!(resolved.table.len(), 3);
        assert_eq!(resolved.structures, ["Single Family", "Multifamily"]);
    }

    #[test]
    fn missing_file_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve(dir.path(), &ohio_pop()).unwrap_err();
        match err {
            DashboardError::DatasetNotFound { file, .. } => {
                assert_eq!(file, "DM_pop_OHIO_ALLunits.csv")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_structure_column_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("DM_pop_OHIO_ALLunits.csv"),
            "Type,Total\nSingle Family,2.41\n",
        )
        .unwrap();

        let err = resolve(dir.path(), &ohio_pop()).unwrap_err();
        assert!(matches!(err, DashboardError::DatasetNotFound { .. }));
        assert!(err.to_string().contains("Structure"));
    }

    #[test]
    fn padded_structure_header_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("DM_pop_OHIO_ALLunits.csv"),
            " Structure,Total\nSingle Family,2.41\n",
        )
        .unwrap();

        let err = resolve(dir.path(), &ohio_pop()).unwrap_err();
        assert!(matches!(err, DashboardError::DatasetNotFound { .. }));
    }

    #[test]
    fn unparsable_file_is_dataset_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("DM_pop_OHIO_ALLunits.csv"),
            "Structure,Total\nSingle Family,2.41,extra\n",
        )
        .unwrap();

        let err = resolve(dir.path(), &ohio_pop()).unwrap_err();
        assert!(matches!(err, DashboardError::DatasetNotFound { .. }));
    }

    #[test]
    fn every_selection_resolves_or_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("DM_sac_TEXAS_NEWERunits.csv"),
            "Structure,Total\nMultifamily,0.4\n",
        )
        .unwrap();

        let mut found = 0;
        for state in STATES {
            for unit_type in UnitType::ALL {
                for category in Category::ALL {
                    let sel = Selection {
                        state,
                        unit_type,
                        category,
                    };
                    match resolve(dir.path(), &sel) {
                        Ok(ds) => {
                            found += 1;
                            assert_eq!(ds.file_name, "DM_sac_TEXAS_NEWERunits.csv");
                            assert_eq!(ds.structures, ["Multifamily"]);
                        }
                        Err(DashboardError::DatasetNotFound { file, .. }) => {
                            assert_eq!(file, sel.dataset_file_name())
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
            }
        }
        assert_eq!(found, 1);
    }
}
