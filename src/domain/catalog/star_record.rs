// ============================================================
// STAR RECORD
// ============================================================
// One normalized catalog row

use serde::{Deserialize, Serialize};

use super::Vec3;

/// Magnitude assumed when the column is missing or unparsable
pub const DEFAULT_MAGNITUDE: f32 = 6.0;

/// A parsed catalog row.
///
/// Optional numeric columns stay `None` when absent so that a zero
/// coordinate is never mistaken for a missing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// 1-based line number in the source text
    pub line: usize,

    /// Right ascension in degrees
    pub right_ascension: Option<f32>,

    /// Declination in degrees
    pub declination: Option<f32>,

    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,

    pub magnitude: f32,
    pub color_index: Option<f32>,

    /// Spectral class, empty when not given
    pub spectral_type: String,

    /// Common name, empty when not given
    pub proper_name: String,
}

impl Default for StarRecord {
    fn default() -> Self {
        Self {
            line: 0,
            right_ascension: None,
            declination: None,
            x: None,
            y: None,
            z: None,
            magnitude: DEFAULT_MAGNITUDE,
            color_index: None,
            spectral_type: String::new(),
            proper_name: String::new(),
        }
    }
}

impl StarRecord {
    pub fn cartesian(&self) -> Option<Vec3> {
        match (self.x, self.y, self.z) {
            (Some(x), Some(y), Some(z)) => Some(Vec3::new(x, y, z)),
            _ => None,
        }
    }

    /// `(ra, dec)` in degrees when both are present
    pub fn celestial(&self) -> Option<(f32, f32)> {
        match (self.right_ascension, self.declination) {
            (Some(ra), Some(dec)) => Some((ra, dec)),
            _ => None,
        }
    }

    pub fn is_placeable(&self) -> bool {
        self.cartesian().is_some() || self.celestial().is_some()
    }
}
