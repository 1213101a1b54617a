// ============================================================
// VISUAL MAPPING
// ============================================================
// Magnitude -> scale, color index / spectral class -> RGB

use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::{PlacementConfig, StarRecord};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const GRAY: Rgb = Rgb::new(0.5, 0.5, 0.5);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Mul<f32> for Rgb {
    type Output = Rgb;

    fn mul(self, rhs: f32) -> Rgb {
        Rgb::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

// Blue-white through orange-red, shared by both lookups (O B A F G K M)
const RAMP: [Rgb; 7] = [
    Rgb::new(0.67, 0.76, 1.00),
    Rgb::new(0.78, 0.84, 1.00),
    Rgb::WHITE,
    Rgb::new(1.00, 0.98, 0.83),
    Rgb::new(1.00, 0.91, 0.71),
    Rgb::new(1.00, 0.78, 0.51),
    Rgb::new(1.00, 0.67, 0.45),
];

// Upper bounds (exclusive) of the first six color index buckets
const COLOR_INDEX_THRESHOLDS: [f32; 6] = [-0.33, 0.00, 0.30, 0.58, 0.81, 1.40];

const SPECTRAL_CLASSES: [char; 7] = ['O', 'B', 'A', 'F', 'G', 'K', 'M'];

/// Clamped display scale; brighter (lower magnitude) stars come out larger
pub fn star_scale(magnitude: f32, config: &PlacementConfig) -> f32 {
    ((config.magnitude_base_value - magnitude) * config.magnitude_scale_factor)
        .clamp(config.min_scale, config.max_scale)
}

/// Color index wins over spectral type; white when neither is known
pub fn star_color(record: &StarRecord) -> Rgb {
    if let Some(ci) = record.color_index {
        return color_from_color_index(ci);
    }
    if !record.spectral_type.trim().is_empty() {
        return color_from_spectral_type(&record.spectral_type);
    }
    Rgb::WHITE
}

pub fn color_from_color_index(ci: f32) -> Rgb {
    let bucket = COLOR_INDEX_THRESHOLDS
        .iter()
        .position(|&upper| ci < upper)
        .unwrap_or(RAMP.len() - 1);
    RAMP[bucket]
}

pub fn color_from_spectral_type(spectral_type: &str) -> Rgb {
    let Some(class) = spectral_type.trim().chars().next() else {
        return Rgb::WHITE;
    };

    let class = class.to_ascii_uppercase();
    SPECTRAL_CLASSES
        .iter()
        .position(|&c| c == class)
        .map(|idx| RAMP[idx])
        .unwrap_or(Rgb::GRAY)
}
