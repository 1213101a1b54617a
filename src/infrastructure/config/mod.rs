// ============================================================
// CONFIGURATION INFRASTRUCTURE
// ============================================================
// Loader settings layered from defaults, TOML, and environment

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::catalog::LoaderConfig;
use crate::domain::error::{AppError, Result};

pub const ENV_PREFIX: &str = "STARFIELD_";

/// Layered loader configuration: defaults, then TOML, then environment.
///
/// Nested keys use `__` in environment variables, e.g.
/// `STARFIELD_PLACEMENT__SPHERE_RADIUS=250`.
pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(LoaderConfig::default())),
        }
    }

    pub fn with_file(mut self, path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AppError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        self.figment = self.figment.merge(Toml::file(path));
        Ok(self)
    }

    pub fn with_toml_str(mut self, toml: &str) -> Self {
        self.figment = self.figment.merge(Toml::string(toml));
        self
    }

    pub fn with_env(self) -> Self {
        self.with_env_prefix(ENV_PREFIX)
    }

    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.figment = self.figment.merge(Env::prefixed(prefix).split("__"));
        self
    }

    pub fn load(&self) -> Result<LoaderConfig> {
        let config: LoaderConfig = self
            .figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid loader config: {}", e))
        })?;

        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::RaUnit;

    #[test]
    fn test_defaults() {
        let config = ConfigService::new().load().unwrap();
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            max_records = 0
            ra_unit = "degrees"
            source = "data/hygdata.csv"

            [columns]
            magnitude = "Vmag"
            proper_name = "name"

            [placement]
            sphere_radius = 250.0
            min_scale = 0.1
        "#;
        let config = ConfigService::new().with_toml_str(toml).load().unwrap();

        assert_eq!(config.max_records, 0);
        assert_eq!(config.ra_unit, RaUnit::Degrees);
        assert_eq!(config.source.as_deref(), Some("data/hygdata.csv"));
        assert_eq!(config.columns.magnitude, "Vmag");
        assert_eq!(config.columns.right_ascension, "ra");
        assert_eq!(config.placement.sphere_radius, 250.0);
        assert_eq!(config.placement.min_scale, 0.1);
        assert_eq!(config.placement.max_scale, 1.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ConfigService::new()
            .with_toml_str("[placement]\nmin_scale = 2.0\nmax_scale = 1.0\n")
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = ConfigService::new()
            .with_toml_str("max_records = \"lots\"\n")
            .load()
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_env_overrides_toml() {
        let prefix = format!("STARFIELD_TEST_{}_", uuid::Uuid::new_v4().simple());
        std::env::set_var(format!("{}MAX_RECORDS", prefix), "42");
        std::env::set_var(format!("{}PLACEMENT__SPHERE_RADIUS", prefix), "12.5");

        let config = ConfigService::new()
            .with_toml_str("max_records = 7\n")
            .with_env_prefix(&prefix)
            .load()
            .unwrap();

        assert_eq!(config.max_records, 42);
        assert_eq!(config.placement.sphere_radius, 12.5);

        std::env::remove_var(format!("{}MAX_RECORDS", prefix));
        std::env::remove_var(format!("{}PLACEMENT__SPHERE_RADIUS", prefix));
    }

    #[test]
    fn test_example_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/star-catalog.example.toml");
        let config = ConfigService::new().with_file(&path).unwrap().load().unwrap();
        assert_eq!(config.source.as_deref(), Some("data/hygdata.csv"));
        assert_eq!(config.columns, crate::domain::catalog::ColumnSchema::default());
        assert_eq!(config.placement, crate::domain::catalog::PlacementConfig::default());
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join(format!("missing-{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(
            ConfigService::new().with_file(&path),
            Err(AppError::ConfigError(_))
        ));
    }
}
