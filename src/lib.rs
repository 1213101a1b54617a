mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use app::run;
pub use application::use_cases::catalog_loader::{CatalogLoad, StarCatalogLoader};
pub use application::use_cases::placement::{hand_off, PlacementSink};
pub use domain::catalog::*;
pub use domain::error::{AppError, Result};
pub use infrastructure::config::ConfigService;
pub use infrastructure::sources::{CatalogSource, InlineSource, SourceLocation};
