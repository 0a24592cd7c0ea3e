//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path, or the first standard location
    /// that exists, or defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        validate_schema(&schema)?;
        Ok(Self { schema, path: None })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".srb-tools.toml", "srb-tools.toml", ".config/srb-tools.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path))?;

    let schema: ConfigSchema = toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path))?;

    validate_schema(&schema).context(format!("Invalid config file {}", path))?;
    Ok(schema)
}

/// Reject values no component can work with
fn validate_schema(schema: &ConfigSchema) -> Result<()> {
    if schema.order.max_step == 0 {
        return Err(Error::new(
            crate::ErrorCode::InvalidConfigValue,
            "order.max_step must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.search.max_results, 12);
        assert_eq!(config.schema.search.cache_capacity, 50);
        assert_eq!(config.schema.pricing.unit_price, 200);
        assert_eq!(config.schema.pricing.shipping_fee, 49);
        assert_eq!(config.schema.order.max_step, 3);
        assert_eq!(config.schema.variants.debounce_ms, 300);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [pricing]
            unit_price = 250

            [search]
            max_results = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.schema.pricing.unit_price, 250);
        assert_eq!(config.schema.pricing.shipping_fee, 49);
        assert_eq!(config.schema.search.max_results, 5);
        assert_eq!(config.schema.search.debounce_ms, 150);
        assert_eq!(config.schema.bible.translation, "SRB16");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[order]\norder_prefix = \"TST\"").unwrap();

        let path = file.path().to_str().unwrap();
        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.schema.order.order_prefix, "TST");
        assert_eq!(config.path.as_deref(), Some(path));
    }

    #[test]
    fn test_load_rejects_zero_steps() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[order]\nmax_step = 0").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_from_toml_rejects_zero_steps() {
        let err = Config::from_toml("[order]\nmax_step = 0").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);

        let config = Config::from_toml("[order]\nmax_step = 5").unwrap();
        assert_eq!(config.schema.order.max_step, 5);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some("/definitely/not/here.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::from_toml("[pricing\nunit_price = ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }
}
