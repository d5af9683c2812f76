use thiserror::Error;

// ---------------------------------------------------------------------------
// Interaction errors
// ---------------------------------------------------------------------------

/// Failures that abort a dashboard recompute.
///
/// Soft outcomes (an empty filter result, a state without a boundary
/// feature) are not errors; see [`crate::data::filter::FilterOutcome`] and
/// [`crate::view::MapView::has_boundary`].
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dataset file for a selection is absent, unreadable, or has no
    /// classification column.
    #[error("no usable dataset '{file}': {source:#}")]
    DatasetNotFound {
        file: String,
        #[source]
        source: anyhow::Error,
    },

    /// A state name has no entry in the reference centroid table.
    #[error("no reference centroid for state '{0}'")]
    MissingCentroid(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
