// ============================================================
// PLACEMENT TYPES
// ============================================================
// What a renderer needs to instance one star

use serde::{Deserialize, Serialize};

use super::{Rgb, Vec3};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarPlacement {
    /// Source line of the record this placement came from
    pub line: usize,
    pub display_name: String,
    pub position: Vec3,
    pub scale: f32,
    pub color: Rgb,
    pub emission: Rgb,
}

/// Placement outcome for one parsed record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    Placed(StarPlacement),
    Unplaceable { line: usize },
}

impl Placement {
    pub fn as_placed(&self) -> Option<&StarPlacement> {
        match self {
            Placement::Placed(placement) => Some(placement),
            Placement::Unplaceable { .. } => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed(_))
    }
}
