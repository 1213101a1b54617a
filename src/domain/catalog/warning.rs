// ============================================================
// CATALOG WARNINGS
// ============================================================
// Non-fatal diagnostics collected during a load pass

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogWarning {
    /// Text had no header or no data rows
    EmptyCatalog,

    /// Header resolves neither x,y,z nor ra,dec
    MissingCoordinateSystem { headers: Vec<String> },

    /// Row could not be read and was skipped
    MalformedRow {
        line: usize,
        content: String,
        reason: String,
    },

    /// Rows left unread once `max_records` was reached
    RecordCapReached { cap: usize, skipped: usize },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::EmptyCatalog => {
                write!(f, "catalog contains no data rows")
            }
            CatalogWarning::MissingCoordinateSystem { headers } => write!(
                f,
                "no usable coordinate columns: need x,y,z or ra,dec (header: {})",
                headers.join(",")
            ),
            CatalogWarning::MalformedRow {
                line,
                content,
                reason,
            } => write!(f, "line {}: {}. content: '{}'", line, reason, content),
            CatalogWarning::RecordCapReached { cap, skipped } => write!(
                f,
                "record cap {} reached, {} remaining rows skipped",
                cap, skipped
            ),
        }
    }
}
