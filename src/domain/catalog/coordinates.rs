// ============================================================
// COORDINATE DERIVATION
// ============================================================
// Record -> scene position, cartesian first, then celestial sphere

use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::{PlacementConfig, StarRecord};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Scene position of a record, or `None` when it carries no usable coordinates.
///
/// Celestial coordinates land on a sphere of `sphere_radius` with
/// declination as elevation (y up) and right ascension as azimuth in the
/// x/z plane.
pub fn derive_position(record: &StarRecord, config: &PlacementConfig) -> Option<Vec3> {
    if let Some(position) = record.cartesian() {
        return Some(position * config.cartesian_scale_multiplier);
    }

    let (ra, dec) = record.celestial()?;
    Some(celestial_to_sphere(ra, dec, config.sphere_radius))
}

fn celestial_to_sphere(ra_degrees: f32, dec_degrees: f32, radius: f32) -> Vec3 {
    let ra = ra_degrees.to_radians();
    let dec = dec_degrees.to_radians();

    Vec3::new(
        radius * dec.cos() * ra.cos(),
        radius * dec.sin(),
        radius * dec.cos() * ra.sin(),
    )
}
