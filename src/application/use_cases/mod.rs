pub mod catalog_loader;
pub mod placement;
