// ============================================================
// HEADER INDEX
// ============================================================
// Case-insensitive header token -> column position lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ColumnSchema;

/// Column positions keyed by lower-cased header token.
///
/// Built once from the header line before any data row is read and
/// only read afterwards. The first occurrence of a duplicated header wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
    headers: Vec<String>,
}

/// Which coordinate systems the header can supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateSupport {
    pub cartesian: bool,
    pub celestial: bool,
}

impl CoordinateSupport {
    pub fn any(&self) -> bool {
        self.cartesian || self.celestial
    }

    /// Human readable list of detected systems, e.g. `"cartesian (x,y,z), celestial (ra,dec)"`
    pub fn describe(&self) -> String {
        let mut systems = Vec::new();
        if self.cartesian {
            systems.push("cartesian (x,y,z)");
        }
        if self.celestial {
            systems.push("celestial (ra,dec)");
        }
        if systems.is_empty() {
            "none".to_string()
        } else {
            systems.join(", ")
        }
    }
}

impl HeaderIndex {
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut positions = HashMap::new();
        let mut headers = Vec::new();

        for (idx, raw) in fields.into_iter().enumerate() {
            let token = normalize(raw);
            positions.entry(token.clone()).or_insert(idx);
            headers.push(token);
        }

        Self { positions, headers }
    }

    /// Build from a raw header line split on commas
    pub fn from_line(line: &str) -> Self {
        Self::from_fields(line.split(','))
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(&normalize(name)).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Normalized header tokens in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn coordinate_support(&self, schema: &ColumnSchema) -> CoordinateSupport {
        CoordinateSupport {
            cartesian: self.contains(&schema.x)
                && self.contains(&schema.y)
                && self.contains(&schema.z),
            celestial: self.contains(&schema.right_ascension)
                && self.contains(&schema.declination),
        }
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let index = HeaderIndex::from_line(" RA , Dec ,MAG");
        assert_eq!(index.position("ra"), Some(0));
        assert_eq!(index.position("DEC"), Some(1));
        assert_eq!(index.position("Mag "), Some(2));
        assert_eq!(index.position("ci"), None);
        assert_eq!(index.headers(), &["ra", "dec", "mag"]);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let index = HeaderIndex::from_line("mag,ra,MAG,dec");
        assert_eq!(index.position("mag"), Some(0));
        assert_eq!(index.position("dec"), Some(3));
    }

    #[test]
    fn test_coordinate_support() {
        let schema = ColumnSchema::default();

        let both = HeaderIndex::from_line("x,y,z,ra,dec");
        let support = both.coordinate_support(&schema);
        assert!(support.cartesian && support.celestial);

        let partial = HeaderIndex::from_line("x,y,ra,mag");
        let support = partial.coordinate_support(&schema);
        assert!(!support.any());
        assert_eq!(support.describe(), "none");

        let celestial = HeaderIndex::from_line("ra,dec,mag");
        let support = celestial.coordinate_support(&schema);
        assert!(!support.cartesian);
        assert_eq!(support.describe(), "celestial (ra,dec)");
    }

    #[test]
    fn test_custom_schema_names() {
        let schema = ColumnSchema {
            right_ascension: "RA_Hours".to_string(),
            declination: "Dec_Deg".to_string(),
            ..Default::default()
        };
        let index = HeaderIndex::from_line("ra_hours,dec_deg");
        assert!(index.coordinate_support(&schema).celestial);
    }
}
