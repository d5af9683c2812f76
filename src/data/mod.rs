/// Data layer: reference tables, dataset resolution, and filtering.
///
/// Architecture:
/// ```text
///   state / unit type / category
///        │
///        ▼
///   ┌───────────┐
///   │ selection  │  closed enums → DM_{code}_{STATE}_{token}.csv
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ resolver   │  loader: CSV → DemographicTable + Structure values
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │  filter    │  Structure == value → rows | Empty
///   └───────────┘
///
///   reference (centroids) + boundary (GeoJSON) feed the map composer.
/// ```

pub mod boundary;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod reference;
pub mod resolver;
pub mod selection;
