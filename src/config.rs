use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Runtime settings. Every key is optional; see [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the `DM_*.csv` datasets.
    pub data_dir: PathBuf,
    /// Boundary GeoJSON, relative to the working directory.
    pub boundary_file: PathBuf,
    pub map: MapStyleConfig,
}

/// Colours are hex sRGB strings (`#rrggbb` or `#rgb`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapStyleConfig {
    pub fill_color: String,
    pub fill_alpha: u8,
    pub line_color: String,
    /// Outline width in points.
    pub line_width: f32,
    pub marker_color: String,
    pub marker_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            boundary_file: PathBuf::from("gz_2010_us_040_00_5m.json"),
            map: MapStyleConfig::default(),
        }
    }
}

impl Default for MapStyleConfig {
    fn default() -> Self {
        Self {
            fill_color: "#ff0000".to_string(),
            fill_alpha: 80,
            line_color: "#ff0000".to_string(),
            line_width: 2.0,
            marker_color: "#1e64c8".to_string(),
            marker_radius: 6.0,
        }
    }
}

impl Settings {
    /// Read `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("parsing TOML settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let settings = Settings::from_toml(
            r##"
            data_dir = "/srv/multipliers"

            [map]
            fill_alpha = 120
            line_color = "#00ff00"
            "##,
        )
        .unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/srv/multipliers"));
        assert_eq!(settings.boundary_file, Settings::default().boundary_file);
        assert_eq!(settings.map.fill_alpha, 120);
        assert_eq!(settings.map.line_color, "#00ff00");
        assert_eq!(settings.map.fill_color, "#ff0000");
        assert_eq!(settings.map.line_width, 2.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_toml("datadir = \"x\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "data_dir = 5").unwrap();
        let err = Settings::load_or_default(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid settings"));
    }
}
