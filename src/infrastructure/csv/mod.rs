// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Catalog CSV reading: header resolution and row coercion

mod star_row_parser;

pub use star_row_parser::{ParsedCatalog, StarCsvReader};
