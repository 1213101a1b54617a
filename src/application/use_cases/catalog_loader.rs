// ============================================================
// STAR CATALOG LOADER USE CASE
// ============================================================
// Orchestrate source fetch, CSV parsing, and placement derivation

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::catalog::{
    derive_position, star_color, star_scale, CatalogWarning, CoordinateSupport, LoaderConfig,
    Placement, StarPlacement, StarRecord,
};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::StarCsvReader;
use crate::infrastructure::sources::CatalogSource;

/// Number of warnings echoed to the log after a pass
const LOGGED_WARNINGS: usize = 5;

/// Result of one load pass.
///
/// `placements[i]` belongs to `records[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogLoad {
    pub records: Vec<StarRecord>,
    pub placements: Vec<Placement>,
    pub warnings: Vec<CatalogWarning>,
    pub skipped_by_cap: usize,

    /// Coordinate systems the header resolved, `None` when there was no header
    pub support: Option<CoordinateSupport>,
    pub data_rows: usize,
    pub processing_time_ms: u64,
}

impl CatalogLoad {
    pub fn placed(&self) -> impl Iterator<Item = &StarPlacement> {
        self.placements.iter().filter_map(Placement::as_placed)
    }

    pub fn placed_count(&self) -> usize {
        self.placed().count()
    }

    pub fn unplaceable_count(&self) -> usize {
        self.placements.iter().filter(|p| !p.is_placed()).count()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Turns catalog text into records and placements
pub struct StarCatalogLoader {
    config: LoaderConfig,
}

impl StarCatalogLoader {
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid loader config: {}", e))
        })?;
        Ok(Self { config })
    }

    /// Fetch from `source` and load. Fails only when the source cannot supply text.
    pub async fn load(&self, source: &dyn CatalogSource) -> Result<CatalogLoad> {
        let content = source.fetch().await.map_err(|e| {
            warn!(source = %source.describe(), error = %e, "Catalog source unavailable");
            match e {
                AppError::SourceUnavailable(_) => e,
                other => AppError::SourceUnavailable(other.to_string()),
            }
        })?;

        info!(source = %source.describe(), bytes = content.len(), "Catalog text acquired");
        Ok(self.load_from_bytes(&content))
    }

    pub fn load_from_bytes(&self, content: &[u8]) -> CatalogLoad {
        let start = Instant::now();

        let parsed = StarCsvReader::new(self.config.columns.clone())
            .with_ra_unit(self.config.ra_unit)
            .with_max_records(self.config.max_records)
            .parse(content);

        let placements = self.place_all(&parsed.records);

        let load = CatalogLoad {
            records: parsed.records,
            placements,
            warnings: parsed.warnings,
            skipped_by_cap: parsed.skipped_by_cap,
            support: parsed.support,
            data_rows: parsed.data_rows,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            records = load.records.len(),
            placed = load.placed_count(),
            unplaceable = load.unplaceable_count(),
            warnings = load.warnings.len(),
            "Catalog processed"
        );
        if !load.warnings.is_empty() {
            let first = load
                .warnings
                .iter()
                .take(LOGGED_WARNINGS)
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            warn!(
                count = load.warnings.len(),
                "Catalog warnings (first {}):\n{}",
                LOGGED_WARNINGS,
                first
            );
        }

        load
    }

    fn place_all(&self, records: &[StarRecord]) -> Vec<Placement> {
        let mut placed_so_far = 0usize;

        records
            .iter()
            .map(|record| match self.place(record, placed_so_far) {
                Some(placement) => {
                    placed_so_far += 1;
                    Placement::Placed(placement)
                }
                None => Placement::Unplaceable { line: record.line },
            })
            .collect()
    }

    /// `ordinal` numbers unnamed stars in placement order
    fn place(&self, record: &StarRecord, ordinal: usize) -> Option<StarPlacement> {
        let placement = &self.config.placement;
        let position = derive_position(record, placement)?;
        let color = star_color(record);

        let display_name = if record.proper_name.is_empty() {
            format!("Star_{}", ordinal)
        } else {
            record.proper_name.clone()
        };

        Some(StarPlacement {
            line: record.line,
            display_name,
            position,
            scale: star_scale(record.magnitude, placement),
            color,
            emission: color * placement.emission_intensity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{PlacementConfig, Rgb, Vec3};
    use crate::infrastructure::sources::InlineSource;
    use async_trait::async_trait;

    const EPS: f32 = 1e-4;

    fn loader(config: LoaderConfig) -> StarCatalogLoader {
        StarCatalogLoader::new(config).unwrap()
    }

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<u8>> {
            Err(AppError::IoError("connection reset".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_ra_dec_example() {
        let load = loader(LoaderConfig::default()).load_from_bytes(b"ra,dec,mag\n12.0,45.0,3.0\n");

        assert_eq!(load.records[0].right_ascension, Some(180.0));
        let placed = load.placements[0].as_placed().unwrap();

        let ra = 180.0f32.to_radians();
        let dec = 45.0f32.to_radians();
        let r = 100.0;
        let expected = Vec3::new(r * dec.cos() * ra.cos(), r * dec.sin(), r * dec.cos() * ra.sin());
        assert!((placed.position.x - expected.x).abs() < EPS);
        assert!((placed.position.y - expected.y).abs() < EPS);
        assert!((placed.position.z - expected.z).abs() < EPS);

        // (6 - 3) * 0.5 clamped to 1.0
        assert_eq!(placed.scale, 1.0);
        assert_eq!(placed.display_name, "Star_0");
    }

    #[test]
    fn test_cartesian_precedence_and_multiplier() {
        let config = LoaderConfig {
            placement: PlacementConfig {
                cartesian_scale_multiplier: 10.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let content = "x,y,z,ra,dec,proper\n1,2,3,12,45,Sirius\n";
        let load = loader(config).load_from_bytes(content.as_bytes());

        let placed = load.placements[0].as_placed().unwrap();
        assert_eq!(placed.position, Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(placed.display_name, "Sirius");
    }

    #[test]
    fn test_unplaceable_records_kept() {
        let content = "ra,dec,x,proper\n1,2,,A\n,,,B\n3,,5,C\n,4,,D\n";
        let load = loader(LoaderConfig::default()).load_from_bytes(content.as_bytes());

        assert_eq!(load.records.len(), 4);
        assert_eq!(load.placements.len(), 4);
        assert_eq!(load.placed_count(), 1);
        assert_eq!(load.unplaceable_count(), 3);
        assert_eq!(load.placements[1], Placement::Unplaceable { line: 3 });
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn test_unnamed_stars_numbered_by_placement() {
        let content = "ra,dec,proper\n1,1,\n,,\n2,2,Deneb\n3,3,\n";
        let load = loader(LoaderConfig::default()).load_from_bytes(content.as_bytes());
        let names: Vec<_> = load.placed().map(|p| p.display_name.as_str()).collect();
        assert_eq!(names, vec!["Star_0", "Deneb", "Star_2"]);
    }

    #[test]
    fn test_color_and_emission() {
        let config = LoaderConfig {
            placement: PlacementConfig {
                emission_intensity: 2.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let content = "ra,dec,ci,spect\n1,1,,M2\n2,2,-0.33,M2\n3,3,,\n";
        let load = loader(config).load_from_bytes(content.as_bytes());
        let placed: Vec<_> = load.placed().collect();

        assert_eq!(placed[0].color, Rgb::new(1.00, 0.67, 0.45));
        assert_eq!(placed[0].emission, Rgb::new(2.00, 1.34, 0.90));
        assert_eq!(placed[1].color, Rgb::new(0.78, 0.84, 1.00));
        assert_eq!(placed[2].color, Rgb::WHITE);
    }

    #[test]
    fn test_record_cap_example() {
        let config = LoaderConfig {
            max_records: 2,
            ..Default::default()
        };
        let content = "ra,dec\n1,1\n2,2\n3,3\n4,4\n5,5\n";
        let load = loader(config).load_from_bytes(content.as_bytes());

        assert_eq!(load.records.len(), 2);
        assert_eq!(load.skipped_by_cap, 3);
        assert_eq!(load.data_rows, 5);
        assert!(load.warning_messages()[0].contains("3 remaining rows skipped"));
    }

    #[test]
    fn test_missing_coordinates_yields_nothing_placeable() {
        let load = loader(LoaderConfig::default()).load_from_bytes(b"name,mag\nfoo,1\nbar,2\n");
        assert_eq!(load.records.len(), 2);
        assert_eq!(load.placed_count(), 0);
        assert_eq!(
            load.support,
            Some(CoordinateSupport {
                cartesian: false,
                celestial: false
            })
        );
        assert!(matches!(
            load.warnings[0],
            CatalogWarning::MissingCoordinateSystem { .. }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LoaderConfig {
            placement: PlacementConfig {
                sphere_radius: -1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            StarCatalogLoader::new(config),
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let source = InlineSource::new("stars", "x,y,z,mag\n0,1,0,-1.46\n");
        let load = loader(LoaderConfig::default()).load(&source).await.unwrap();
        assert_eq!(load.placed_count(), 1);
        assert_eq!(load.records[0].magnitude, -1.46);
        assert_eq!(load.support.map(|s| s.cartesian), Some(true));
    }

    #[tokio::test]
    async fn test_source_failure_is_fatal() {
        let err = loader(LoaderConfig::default())
            .load(&FailingSource)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable(_)));
    }
}
