use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;

/// (name, latitude, longitude, has outline)
const SAMPLE_STATES: &[(&str, f64, f64, bool)] = &[
    ("Ohio", 40.388783, -82.764915, true),
    ("Texas", 31.054487, -97.563461, true),
    ("New York", 42.165726, -74.948051, true),
    // No outline: exercises the marker-only map.
    ("Washington D.C.", 38.9072, -77.0369, false),
];

const STRUCTURES: &[(&str, f64)] = &[
    ("Single Family Detached", 1.00),
    ("Single Family Attached", 0.86),
    ("2-4 Units", 0.74),
    ("5+ Units", 0.58),
    ("Mobile Home", 0.81),
];

const UNIT_TYPES: &[(&str, f64)] = &[("ALLunits", 1.00), ("NEWERunits", 1.12)];

const POP_COLUMNS: &[(&str, f64)] = &[
    ("Age 0-4", 0.07),
    ("Age 5-17", 0.18),
    ("Age 18-34", 0.22),
    ("Age 35-64", 0.38),
    ("Age 65+", 0.15),
];
const PSC_COLUMNS: &[(&str, f64)] = &[
    ("Grades K-6", 0.52),
    ("Grades 7-8", 0.15),
    ("Grades 9-12", 0.33),
];
const SAC_COLUMNS: &[(&str, f64)] = &[
    ("Age 5-10", 0.43),
    ("Age 11-13", 0.21),
    ("Age 14-17", 0.36),
];

/// Category code → (total column, breakdown columns with their shares).
fn category_columns(code: &str) -> (&'static str, &'static [(&'static str, f64)]) {
    match code {
        "pop" => ("Total Persons", POP_COLUMNS),
        "psc" => ("Total PSC", PSC_COLUMNS),
        _ => ("Total SAC", SAC_COLUMNS),
    }
}

/// Base occupants per unit for a category and bedroom count.
fn base_multiplier(code: &str, bedrooms: u32) -> f64 {
    let persons = 1.2 + 0.62 * bedrooms as f64;
    match code {
        "pop" => persons,
        "psc" => (persons - 1.3).max(0.02) * 0.48,
        _ => (persons - 1.3).max(0.03) * 0.55,
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn write_dataset(
    dir: &Path,
    code: &str,
    state_idx: usize,
    state: &str,
    unit: (&str, f64),
) -> Result<PathBuf> {
    let path = dir.join(format!("DM_{code}_{}_{}.csv", state.to_uppercase(), unit.0));
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    let (total_col, parts) = category_columns(code);
    let mut header = vec!["Structure", "BR", total_col];
    header.extend(parts.iter().map(|(name, _)| *name));
    writer.write_record(&header)?;

    // Small per-state variation so datasets differ.
    let state_factor = 0.94 + 0.04 * state_idx as f64;

    for &(structure, structure_factor) in STRUCTURES {
        let bedrooms: &[u32] = if structure.starts_with("Single Family") {
            &[1, 2, 3, 4, 5]
        } else {
            &[0, 1, 2, 3]
        };
        for &br in bedrooms {
            let total = base_multiplier(code, br) * structure_factor * unit.1 * state_factor;
            let mut record = vec![
                structure.to_string(),
                br.to_string(),
                round3(total).to_string(),
            ];
            record.extend(parts.iter().map(|(_, share)| round3(total * share).to_string()));
            writer.write_record(&record)?;
        }
    }
    writer.flush()?;
    Ok(path)
}

fn write_boundaries(dir: &Path) -> Result<PathBuf> {
    let features: Vec<_> = SAMPLE_STATES
        .iter()
        .filter(|(_, _, _, outlined)| *outlined)
        .map(|&(name, lat, lon, _)| {
            let (w, e, s, n) = (lon - 2.5, lon + 2.5, lat - 2.0, lat + 2.0);
            json!({
                "type": "Feature",
                "properties": { "NAME": name },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[w, s], [e, s], [e, n], [w, n], [w, s]]]
                }
            })
        })
        .collect();

    let collection = json!({ "type": "FeatureCollection", "features": features });
    let path = dir.join("states.json");
    fs::write(&path, serde_json::to_string_pretty(&collection)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Settings for running the dashboard from inside the sample folder.
const SAMPLE_SETTINGS: &str = "data_dir = \".\"\nboundary_file = \"states.json\"\n";

/// Write `dashboard.toml` into `dir` unless one is already there.
///
/// Returns `None` when an existing file was left untouched.
fn write_settings(dir: &Path) -> Result<Option<PathBuf>> {
    let path = dir.join("dashboard.toml");
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("creating {}", path.display())),
    };
    file.write_all(SAMPLE_SETTINGS.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(Some(path))
}

fn main() -> Result<()> {
    let out_dir = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "sample_data".to_string()),
    );
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut n_files = 0;
    for (idx, &(state, _, _, _)) in SAMPLE_STATES.iter().enumerate() {
        for code in ["pop", "psc", "sac"] {
            for &unit in UNIT_TYPES {
                write_dataset(&out_dir, code, idx, state, unit)?;
                n_files += 1;
            }
        }
    }
    let boundary = write_boundaries(&out_dir)?;

    println!(
        "Wrote {n_files} datasets and {} to {}",
        boundary.display(),
        out_dir.display()
    );
    match write_settings(&out_dir)? {
        Some(path) => println!(
            "Run the dashboard from {} to use {}",
            out_dir.display(),
            path.display()
        ),
        None => println!(
            "Kept the existing dashboard.toml in {}; these settings point at the sample:\n{SAMPLE_SETTINGS}",
            out_dir.display()
        ),
    }
    Ok(())
}
