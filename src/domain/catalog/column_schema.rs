// ============================================================
// COLUMN SCHEMA
// ============================================================
// Header names expected for each logical star field

use serde::{Deserialize, Serialize};

/// Header names for every logical field a catalog row can carry.
///
/// Names are matched case-insensitively against the CSV header, so
/// `"RA"` in a schema resolves a `ra` column and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    pub right_ascension: String,
    pub declination: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub magnitude: String,
    pub color_index: String,
    pub spectral_type: String,
    pub proper_name: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            right_ascension: "ra".to_string(),
            declination: "dec".to_string(),
            x: "x".to_string(),
            y: "y".to_string(),
            z: "z".to_string(),
            magnitude: "mag".to_string(),
            color_index: "ci".to_string(),
            spectral_type: "spect".to_string(),
            proper_name: "proper".to_string(),
        }
    }
}

impl ColumnSchema {
    /// All configured names paired with their logical field
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("right_ascension", &self.right_ascension),
            ("declination", &self.declination),
            ("x", &self.x),
            ("y", &self.y),
            ("z", &self.z),
            ("magnitude", &self.magnitude),
            ("color_index", &self.color_index),
            ("spectral_type", &self.spectral_type),
            ("proper_name", &self.proper_name),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        for (field, name) in self.entries() {
            if name.trim().is_empty() {
                return Err(format!("column name for {} must not be empty", field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let schema = ColumnSchema::default();
        assert_eq!(schema.right_ascension, "ra");
        assert_eq!(schema.magnitude, "mag");
        assert_eq!(schema.proper_name, "proper");
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_name() {
        let schema = ColumnSchema {
            color_index: "  ".to_string(),
            ..Default::default()
        };
        let err = schema.validate().unwrap_err();
        assert!(err.contains("color_index"));
    }
}
