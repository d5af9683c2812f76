use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// State reference table
// ---------------------------------------------------------------------------

/// A state (or territory) with the centroid the map is centred on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRef {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn state(name: &'static str, latitude: f64, longitude: f64) -> StateRef {
    StateRef {
        name,
        latitude,
        longitude,
    }
}

/// The 50 states, Washington D.C. and Puerto Rico, in picker order.
pub static STATES: &[StateRef] = &[
    state("Alabama", 32.806671, -86.791130),
    state("Alaska", 61.370716, -152.404419),
    state("Arizona", 33.729759, -111.431221),
    state("Arkansas", 34.969704, -92.373123),
    state("California", 36.116203, -119.681564),
    state("Colorado", 39.059811, -105.311104),
    state("Connecticut", 41.597782, -72.755371),
    state("Delaware", 39.318523, -75.507141),
    state("Florida", 27.766279, -81.686783),
    state("Georgia", 33.040619, -83.643074),
    state("Hawaii", 21.094318, -157.498337),
    state("Idaho", 44.240459, -114.478828),
    state("Illinois", 40.349457, -88.986137),
    state("Indiana", 39.849426, -86.258278),
    state("Iowa", 42.011539, -93.210526),
    state("Kansas", 38.526600, -96.726486),
    state("Kentucky", 37.668140, -84.670067),
    state("Louisiana", 31.169546, -91.867805),
    state("Maine", 44.693947, -69.381927),
    state("Maryland", 39.063946, -76.802101),
    state("Massachusetts", 42.230171, -71.530106),
    state("Michigan", 43.326618, -84.536095),
    state("Minnesota", 45.694454, -93.900192),
    state("Mississippi", 32.741646, -89.678696),
    state("Missouri", 38.456085, -92.288368),
    state("Montana", 46.921925, -110.454353),
    state("Nebraska", 41.125370, -98.268082),
    state("Nevada", 38.313515, -117.055374),
    state("New Hampshire", 43.452492, -71.563896),
    state("New Jersey", 40.298904, -74.521011),
    state("New Mexico", 34.840515, -106.248482),
    state("New York", 42.165726, -74.948051),
    state("North Carolina", 35.630066, -79.806419),
    state("North Dakota", 47.528912, -99.784012),
    state("Ohio", 40.388783, -82.764915),
    state("Oklahoma", 35.565342, -96.928917),
    state("Oregon", 44.572021, -122.070938),
    state("Pennsylvania", 40.590752, -77.209755),
    state("Rhode Island", 41.680893, -71.511780),
    state("South Carolina", 33.856892, -80.945007),
    state("South Dakota", 44.299782, -99.438828),
    state("Tennessee", 35.747845, -86.692345),
    state("Texas", 31.054487, -97.563461),
    state("Utah", 40.150032, -111.862434),
    state("Vermont", 44.045876, -72.710686),
    state("Virginia", 37.769337, -78.169968),
    state("Washington", 47.400902, -121.490494),
    state("West Virginia", 38.491226, -80.954456),
    state("Wisconsin", 44.268543, -89.616508),
    state("Wyoming", 42.755966, -107.302490),
    state("Washington D.C.", 38.9072, -77.0369),
    state("Puerto Rico", 38.89511, -77.03637),
];

impl StateRef {
    /// Look a state up by its exact reference name.
    pub fn lookup(name: &str) -> Result<&'static StateRef> {
        STATES
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| DashboardError::MissingCentroid(name.to_string()))
    }

    /// Upper-case form used in dataset file names (spaces kept).
    pub fn upper_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
///
/// `"WASHINGTON D.C."` becomes `"Washington D.C."`, `"NEW YORK"` becomes
/// `"New York"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
