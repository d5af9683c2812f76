use std::path::Path;

use geojson::FeatureCollection;

use crate::data::boundary::{empty_collection, BoundaryDocument};
use crate::data::filter::{filter_rows, FilterOutcome};
use crate::data::model::STRUCTURE_COLUMN;
use crate::data::reference::{title_case, StateRef};
use crate::data::resolver::resolve;
use crate::data::selection::Selection;
use crate::error::Result;

/// Map zoom level. Fixed, not derived from the boundary extent.
pub const MAP_ZOOM: f64 = 5.0;
/// Map pitch in degrees.
pub const MAP_PITCH: f64 = 0.0;

// ---------------------------------------------------------------------------
// Map composition
// ---------------------------------------------------------------------------

/// Camera of the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

/// Point marker at a state's reference centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything the map panel draws.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub view: ViewState,
    pub marker: Marker,
    /// Zero or one feature: the highlighted state outline.
    pub boundary: FeatureCollection,
}

impl MapView {
    pub fn has_boundary(&self) -> bool {
        !self.boundary.features.is_empty()
    }
}

/// Build the map for a state name in any letter case: a centroid marker
/// plus its boundary feature, or an empty overlay when the document has no
/// feature of that name.
///
/// A name without a reference centroid is a
/// [`MissingCentroid`](crate::error::DashboardError::MissingCentroid)
/// error; a missing boundary feature is not.
pub fn compose_map(state_name: &str, boundaries: &BoundaryDocument) -> Result<MapView> {
    let name = title_case(state_name);
    let state = StateRef::lookup(&name)?;

    let mut boundary = empty_collection();
    match boundaries.find(&name) {
        Some(feature) => boundary.features.push(feature.clone()),
        None => log::warn!("No boundary feature named '{name}', showing marker only"),
    }

    Ok(MapView {
        view: ViewState {
            latitude: state.latitude,
            longitude: state.longitude,
            zoom: MAP_ZOOM,
            pitch: MAP_PITCH,
        },
        marker: Marker {
            label: name,
            latitude: state.latitude,
            longitude: state.longitude,
        },
        boundary,
    })
}

// ---------------------------------------------------------------------------
// Full dashboard
// ---------------------------------------------------------------------------

/// Resolved table and map for one selection.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub dataset_file: String,
    /// Structure picker options, first-seen order.
    pub structures: Vec<String>,
    /// The structure the table is filtered by; `None` for a row-less dataset.
    pub structure: Option<String>,
    pub table: FilterOutcome,
    pub map: MapView,
}

/// Run resolve → filter → map for one interaction.
///
/// `structure` is the previously chosen structure; when it is absent from
/// the new dataset the first available value is used instead.
pub fn compose(
    data_dir: &Path,
    boundaries: &BoundaryDocument,
    selection: &Selection,
    structure: Option<&str>,
) -> Result<DashboardView> {
    let resolved = resolve(data_dir, selection)?;

    let structure = match structure {
        Some(s) if resolved.structures.iter().any(|v| v == s) => Some(s.to_string()),
        requested => {
            if let Some(s) = requested {
                log::debug!("Structure '{s}' not in {}, using first", resolved.file_name);
            }
            resolved.structures.first().cloned()
        }
    };

    let table = match &structure {
        Some(s) => filter_rows(&resolved.table, STRUCTURE_COLUMN, s),
        None => FilterOutcome::Empty,
    };

    Ok(DashboardView {
        dataset_file: resolved.file_name,
        structures: resolved.structures,
        structure,
        table,
        map: compose_map(&selection.state.upper_name(), boundaries)?,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::data::boundary::TWO_STATES;
    use crate::data::model::CellValue;
    use crate::data::selection::{Category, UnitType};
    use crate::error::DashboardError;

    fn boundaries() -> BoundaryDocument {
        TWO_STATES.parse().unwrap()
    }

    fn selection(state: &str) -> Selection {
        Selection {
            state: StateRef::lookup(state).unwrap(),
            unit_type: UnitType::AllUnits,
            category: Category::PersonsByAge,
        }
    }

    fn ohio_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("DM_pop_OHIO_ALLunits.csv"),
            "Structure,BR,Total\n\
             Single Family,2,2.41\n\
             Multifamily,1,1.62\n\
             Single Family,3,3.05\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn map_highlights_matching_feature() {
        let ohio = StateRef::lookup("Ohio").unwrap();
        let map = compose_map("OHIO", &boundaries()).unwrap();

        assert!(map.has_boundary());
        assert_eq!(map.boundary.features.len(), 1);
        let name = map.boundary.features[0].property("NAME").and_then(|v| v.as_str());
        assert_eq!(name, Some("Ohio"));
        assert_eq!(map.marker.latitude, ohio.latitude);
        assert_eq!(map.marker.longitude, ohio.longitude);
        assert_eq!(map.view.zoom, 5.0);
        assert_eq!(map.view.pitch, 0.0);
    }

    #[test]
    fn map_passes_geometry_through_unchanged() {
        let doc = boundaries();
        let map = compose_map("Hawaii", &doc).unwrap();
        assert_eq!(&map.boundary.features[0], doc.find("Hawaii").unwrap());
    }

    #[test]
    fn missing_feature_keeps_marker_and_empty_overlay() {
        let map = compose_map("TEXAS", &boundaries()).unwrap();

        assert!(!map.has_boundary());
        assert_eq!(map.marker.label, "Texas");
        assert_eq!(map.marker.latitude, 31.054487);
        assert_eq!(map.marker.longitude, -97.563461);
        assert_eq!(map.view.latitude, 31.054487);
    }

    #[test]
    fn multi_word_names_are_title_cased() {
        let map = compose_map("WASHINGTON D.C.", &boundaries()).unwrap();
        assert_eq!(map.marker.label, "Washington D.C.");
        assert_eq!(map.marker.latitude, 38.9072);
        assert!(!map.has_boundary());
    }

    #[test]
    fn unknown_state_is_missing_centroid() {
        let err = compose_map("ATLANTIS", &boundaries()).unwrap_err();
        assert!(matches!(err, DashboardError::MissingCentroid(ref n) if n == "Atlantis"));
    }

    #[test]
    fn compose_defaults_to_first_structure() {
        let dir = ohio_dir();
        let view = compose(dir.path(), &boundaries(), &selection("Ohio"), None).unwrap();

        assert_eq!(view.dataset_file, "DM_pop_OHIO_ALLunits.csv");
        assert_eq!(view.structures, ["Single Family", "Multifamily"]);
        assert_eq!(view.structure.as_deref(), Some("Single Family"));
        let rows = view.table.rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(view.map.has_boundary());
    }

    #[test]
    fn compose_keeps_requested_structure() {
        let dir = ohio_dir();
        let view = compose(
            dir.path(),
            &boundaries(),
            &selection("Ohio"),
            Some("Multifamily"),
        )
        .unwrap();

        let rows = view.table.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.rows[0][2], CellValue::parse("1.62"));
    }

    #[test]
    fn compose_replaces_unknown_structure() {
        let dir = ohio_dir();
        let view = compose(
            dir.path(),
            &boundaries(),
            &selection("Ohio"),
            Some("Mobile Home"),
        )
        .unwrap();
        assert_eq!(view.structure.as_deref(), Some("Single Family"));
    }

    #[test]
    fn row_less_dataset_is_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("DM_pop_TEXAS_ALLunits.csv"), "Structure,Total\n").unwrap();

        let view = compose(dir.path(), &boundaries(), &selection("Texas"), None).unwrap();
        assert!(view.structures.is_empty());
        assert_eq!(view.structure, None);
        assert_eq!(view.table, FilterOutcome::Empty);
        assert!(!view.map.has_boundary());
    }

    #[test]
    fn missing_dataset_produces_no_partial_view() {
        let dir = tempfile::tempdir().unwrap();
        let err = compose(dir.path(), &boundaries(), &selection("Ohio"), None).unwrap_err();
        assert!(matches!(err, DashboardError::DatasetNotFound { .. }));
    }
}
