use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use geojson::{Feature, FeatureCollection, GeoJson};

/// Feature property holding the state name.
pub const NAME_PROPERTY: &str = "NAME";

// ---------------------------------------------------------------------------
// Boundary document
// ---------------------------------------------------------------------------

/// State outlines keyed by their `NAME` property. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct BoundaryDocument {
    collection: FeatureCollection,
}

impl BoundaryDocument {
    /// Load a GeoJSON FeatureCollection from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening boundary file {}", path.display()))?;
        let geojson = GeoJson::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing GeoJSON {}", path.display()))?;
        let doc = Self::from_geojson(geojson)?;
        log::info!(
            "Loaded {} boundary features from {}",
            doc.len(),
            path.display()
        );
        Ok(doc)
    }

    pub fn from_geojson(geojson: GeoJson) -> Result<Self> {
        match geojson {
            GeoJson::FeatureCollection(collection) => Ok(Self { collection }),
            _ => Err(anyhow!("boundary GeoJSON must be a FeatureCollection")),
        }
    }

    /// A document without features; every lookup misses.
    pub fn empty() -> Self {
        Self {
            collection: empty_collection(),
        }
    }

    /// First feature whose `NAME` equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&Feature> {
        self.collection.features.iter().find(|f| {
            f.property(NAME_PROPERTY)
                .and_then(|v| v.as_str())
                .is_some_and(|n| n == name)
        })
    }

    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }
}

impl std::str::FromStr for BoundaryDocument {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let geojson: GeoJson = s.parse().context("parsing GeoJSON")?;
        Self::from_geojson(geojson)
    }
}

pub fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}

/// Ohio as a Polygon and Hawaii as a MultiPolygon.
#[cfg(test)]
pub(crate) const TWO_STATES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "NAME": "Ohio", "STATE": "39" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-84.8, 38.4], [-80.5, 38.4], [-80.5, 42.0], [-84.8, 42.0], [-84.8, 38.4]]]
            }
        },
        {
            "type": "Feature",
            "properties": { "NAME": "Hawaii" },
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[-156.1, 19.0], [-154.8, 19.0], [-154.8, 20.3], [-156.1, 19.0]]],
                    [[[-158.3, 21.2], [-157.6, 21.2], [-157.6, 21.7], [-158.3, 21.2]]]
                ]
            }
        }
    ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_feature_by_exact_name() {
        let doc: BoundaryDocument = TWO_STATES.parse().unwrap();
        assert_eq!(doc.len(), 2);
        let ohio = doc.find("Ohio").unwrap();
        assert_eq!(ohio.property("STATE").and_then(|v| v.as_str()), Some("39"));
        assert!(doc.find("Hawaii").is_some());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let doc: BoundaryDocument = TWO_STATES.parse().unwrap();
        assert!(doc.find("OHIO").is_none());
        assert!(doc.find("Texas").is_none());
    }

    #[test]
    fn rejects_non_collection() {
        let err = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#
            .parse::<BoundaryDocument>()
            .unwrap_err();
        assert!(err.to_string().contains("FeatureCollection"));
    }

    #[test]
    fn loads_from_disk_and_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        std::fs::write(&path, TWO_STATES).unwrap();
        assert_eq!(BoundaryDocument::load(&path).unwrap().len(), 2);

        let err = BoundaryDocument::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{err:#}").contains("opening boundary file"));
    }

    #[test]
    fn empty_document_misses_everything() {
        let doc = BoundaryDocument::empty();
        assert!(doc.is_empty());
        assert!(doc.find("Ohio").is_none());
    }
}
