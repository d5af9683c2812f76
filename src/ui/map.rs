use eframe::egui::Ui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points, Polygon};
use geojson::{FeatureCollection, Value};

use crate::color::MapStyle;
use crate::view::MapView;

/// Assumed on-screen width of the map, in pixels, when converting zoom to
/// degrees of longitude.
const VIEWPORT_PX: f64 = 768.0;
const TILE_PX: f64 = 256.0;

// ---------------------------------------------------------------------------
// State map (central panel, below the table)
// ---------------------------------------------------------------------------

/// Longitude span visible at a web-map zoom level.
pub fn view_span_degrees(zoom: f64) -> f64 {
    360.0 * VIEWPORT_PX / (TILE_PX * 2f64.powf(zoom))
}

/// Render the boundary overlay and centroid marker.
pub fn state_map(ui: &mut Ui, map: &MapView, style: &MapStyle) {
    let lat = map.view.latitude;
    let lon = map.view.longitude;
    let half_span = view_span_degrees(map.view.zoom) / 2.0;
    // Shrink longitude so shapes keep their proportions at this latitude.
    let aspect = lat.to_radians().cos().max(0.1) as f32;

    // Keyed by state so switching states resets pan/zoom.
    Plot::new(("state_map", &map.marker.label))
        .data_aspect(aspect)
        .include_x(lon - half_span)
        .include_x(lon + half_span)
        .include_y(lat - half_span / 2.0)
        .include_y(lat + half_span / 2.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .legend(egui_plot::Legend::default())
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for polygon in polygon_rings(&map.boundary) {
                let mut rings = polygon.into_iter();
                if let Some(exterior) = rings.next() {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(exterior))
                            .fill_color(style.fill)
                            .stroke(style.outline)
                            .name(&map.marker.label),
                    );
                }
                for hole in rings {
                    plot_ui.line(
                        Line::new(PlotPoints::from(hole))
                            .color(style.outline.color)
                            .width(style.outline.width),
                    );
                }
            }

            plot_ui.points(
                Points::new(vec![[map.marker.longitude, map.marker.latitude]])
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(style.marker_radius)
                    .color(style.marker)
                    .name(format!("{} centroid", map.marker.label)),
            );
        });
}

/// Rings of every polygon in the collection as `[lon, lat]` points.
///
/// The first ring of each polygon is its exterior. Non-areal geometries
/// are skipped.
pub fn polygon_rings(collection: &FeatureCollection) -> Vec<Vec<Vec<[f64; 2]>>> {
    let to_ring = |ring: &Vec<Vec<f64>>| -> Vec<[f64; 2]> {
        ring.iter()
            .filter(|p| p.len() >= 2)
            .map(|p| [p[0], p[1]])
            .collect()
    };

    let mut out = Vec::new();
    for geometry in collection.features.iter().filter_map(|f| f.geometry.as_ref()) {
        match &geometry.value {
            Value::Polygon(rings) => out.push(rings.iter().map(to_ring).collect()),
            Value::MultiPolygon(polygons) => {
                for rings in polygons {
                    out.push(rings.iter().map(to_ring).collect());
                }
            }
            _ => {}
        }
    }
    out
}
