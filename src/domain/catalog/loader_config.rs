// ============================================================
// LOADER CONFIGURATION
// ============================================================
// Parsing, placement and source settings for one load pass

use serde::{Deserialize, Serialize};

use super::ColumnSchema;

/// Unit of the right ascension column in the source catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaUnit {
    /// Hour angle, converted to degrees by multiplying by 15
    #[default]
    Hours,
    Degrees,
}

impl RaUnit {
    pub fn to_degrees(self, value: f32) -> f32 {
        match self {
            RaUnit::Hours => value * 15.0,
            RaUnit::Degrees => value,
        }
    }
}

/// How records are turned into positions, scales and colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Radius of the sphere celestial coordinates are projected onto
    pub sphere_radius: f32,

    /// Uniform factor applied to cartesian coordinates
    pub cartesian_scale_multiplier: f32,

    /// Scale gained per magnitude below the base value
    pub magnitude_scale_factor: f32,

    /// Magnitude at which the unclamped scale is zero
    pub magnitude_base_value: f32,

    pub min_scale: f32,
    pub max_scale: f32,

    /// Multiplier applied to the color for the emissive channel
    pub emission_intensity: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            sphere_radius: 100.0,
            cartesian_scale_multiplier: 1.0,
            magnitude_scale_factor: 0.5,
            magnitude_base_value: 6.0,
            min_scale: 0.05,
            max_scale: 1.0,
            emission_intensity: 1.0,
        }
    }
}

impl PlacementConfig {
    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("sphere_radius", self.sphere_radius),
            ("cartesian_scale_multiplier", self.cartesian_scale_multiplier),
            ("magnitude_scale_factor", self.magnitude_scale_factor),
            ("magnitude_base_value", self.magnitude_base_value),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("emission_intensity", self.emission_intensity),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number", name));
            }
        }
        if self.sphere_radius <= 0.0 {
            return Err("sphere_radius must be > 0".to_string());
        }
        if self.magnitude_scale_factor < 0.0 {
            return Err("magnitude_scale_factor must be >= 0".to_string());
        }
        if self.min_scale > self.max_scale {
            return Err("min_scale must be <= max_scale".to_string());
        }
        Ok(())
    }
}

/// Full configuration of a catalog load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub columns: ColumnSchema,
    pub placement: PlacementConfig,

    /// Maximum number of records to keep (0 = unlimited)
    pub max_records: usize,

    pub ra_unit: RaUnit,

    /// Path or http(s) URL of the catalog, if configured
    pub source: Option<String>,

    /// Timeout for remote downloads in seconds
    pub request_timeout_secs: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            columns: ColumnSchema::default(),
            placement: PlacementConfig::default(),
            max_records: 5000,
            ra_unit: RaUnit::Hours,
            source: None,
            request_timeout_secs: 60,
        }
    }
}

impl LoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), String> {
        self.columns.validate()?;
        self.placement.validate()?;
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be > 0".to_string());
        }
        Ok(())
    }
}
