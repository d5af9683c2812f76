use anyhow::{anyhow, Result};
use eframe::egui::{Color32, Stroke};
use palette::Srgb;

use crate::config::MapStyleConfig;

// ---------------------------------------------------------------------------
// Hex colour parsing
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` / `#rgb` into an opaque colour.
pub fn parse_hex(hex: &str) -> Result<Color32> {
    let rgb: Srgb<u8> = hex
        .trim()
        .parse()
        .map_err(|e| anyhow!("invalid colour '{hex}': {e}"))?;
    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

// ---------------------------------------------------------------------------
// Map style
// ---------------------------------------------------------------------------

/// Resolved colours and sizes for the map layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStyle {
    pub fill: Color32,
    pub outline: Stroke,
    pub marker: Color32,
    pub marker_radius: f32,
}

impl MapStyle {
    pub fn from_config(cfg: &MapStyleConfig) -> Result<Self> {
        let fill = parse_hex(&cfg.fill_color)?;
        let line = parse_hex(&cfg.line_color)?;
        Ok(Self {
            fill: Color32::from_rgba_unmultiplied(fill.r(), fill.g(), fill.b(), cfg.fill_alpha),
            outline: Stroke::new(cfg.line_width.max(0.0), line),
            marker: parse_hex(&cfg.marker_color)?,
            marker_radius: cfg.marker_radius,
        })
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            fill: Color32::from_rgba_unmultiplied(255, 0, 0, 80),
            outline: Stroke::new(2.0, Color32::from_rgb(255, 0, 0)),
            marker: Color32::from_rgb(30, 100, 200),
            marker_radius: 6.0,
        }
    }
}
