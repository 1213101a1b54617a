// ============================================================
// STAR CATALOG DOMAIN LAYER
// ============================================================
// Core types and value objects for catalog parsing and placement
// No I/O, no async, no external dependencies

mod column_schema;
mod coordinates;
mod header_index;
mod loader_config;
mod placement;
mod star_record;
mod visuals;
mod warning;

pub use column_schema::ColumnSchema;
pub use coordinates::{derive_position, Vec3};
pub use header_index::{CoordinateSupport, HeaderIndex};
pub use loader_config::{LoaderConfig, PlacementConfig, RaUnit};
pub use placement::{Placement, StarPlacement};
pub use star_record::{StarRecord, DEFAULT_MAGNITUDE};
pub use visuals::{color_from_color_index, color_from_spectral_type, star_color, star_scale, Rgb};
pub use warning::CatalogWarning;
