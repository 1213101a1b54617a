pub mod use_cases;

pub use use_cases::catalog_loader::{CatalogLoad, StarCatalogLoader};
pub use use_cases::placement::{hand_off, PlacementSink};
