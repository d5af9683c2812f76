use std::path::{Path, PathBuf};

use crate::color::MapStyle;
use crate::data::boundary::BoundaryDocument;
use crate::data::export::save_csv;
use crate::data::reference::StateRef;
use crate::data::selection::{Category, Selection, UnitType};
use crate::error::DashboardError;
use crate::view::{compose, DashboardView};

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// Message shown in the top bar. Errors are drawn highlighted.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(s) | StatusMessage::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Directory the `DM_*.csv` datasets are read from.
    pub data_dir: PathBuf,

    /// State outlines, loaded once at startup.
    pub boundaries: BoundaryDocument,

    pub map_style: MapStyle,

    /// Current state / unit type / category.
    pub selection: Selection,

    /// Structure chosen in the secondary picker.
    pub structure: Option<String>,

    /// Result of the last recompute.
    pub view: Option<Result<DashboardView, DashboardError>>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, boundaries: BoundaryDocument, map_style: MapStyle) -> Self {
        let mut state = Self {
            data_dir,
            boundaries,
            map_style,
            selection: Selection::default(),
            structure: None,
            view: None,
            status_message: None,
        };
        state.recompute();
        state
    }

    /// Resolve, filter and compose for the current selection.
    pub fn recompute(&mut self) {
        log::debug!(
            "Recomputing for {} / {} / {} / {:?}",
            self.selection.state.name,
            self.selection.unit_type,
            self.selection.category,
            self.structure
        );

        let result = compose(
            &self.data_dir,
            &self.boundaries,
            &self.selection,
            self.structure.as_deref(),
        );

        match &result {
            Ok(view) => self.structure = view.structure.clone(),
            Err(e) => log::error!("{e}"),
        }
        self.view = Some(result);
    }

    pub fn set_state(&mut self, state: &'static StateRef) {
        if self.selection.state != state {
            self.selection.state = state;
            self.recompute();
        }
    }

    pub fn set_unit_type(&mut self, unit_type: UnitType) {
        if self.selection.unit_type != unit_type {
            self.selection.unit_type = unit_type;
            self.recompute();
        }
    }

    pub fn set_category(&mut self, category: Category) {
        if self.selection.category != category {
            self.selection.category = category;
            self.recompute();
        }
    }

    pub fn set_structure(&mut self, structure: String) {
        if self.structure.as_deref() != Some(structure.as_str()) {
            self.structure = Some(structure);
            self.recompute();
        }
    }

    /// Point at a different data folder and reload.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        log::info!("Data folder set to {}", dir.display());
        self.data_dir = dir;
        self.status_message = None;
        self.recompute();
    }

    /// The successfully composed view, if any.
    pub fn dashboard(&self) -> Option<&DashboardView> {
        self.view.as_ref().and_then(|r| r.as_ref().ok())
    }

    /// Write the currently displayed rows to `path`.
    pub fn export_table(&mut self, path: &Path) {
        let rows = self
            .view
            .as_ref()
            .and_then(|r| r.as_ref().ok())
            .and_then(|v| v.table.rows());
        let Some(table) = rows else {
            self.status_message =
                Some(StatusMessage::Info("Nothing to export".to_string()));
            return;
        };
        match save_csv(table, path) {
            Ok(()) => {
                log::info!("Exported {} rows to {}", table.len(), path.display());
                self.status_message =
                    Some(StatusMessage::Info(format!("Saved {}", path.display())));
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                self.status_message = Some(StatusMessage::Error(format!("Error: {e:#}")));
            }
        }
    }
}
