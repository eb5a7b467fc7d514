#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEM_TYPE: &str = "*";
pub const DEFAULT_NAMESPACE: &str = r"app\models\metadata\traits";
pub const DEFAULT_TEMPLATE: &str = "trait";
pub const DEFAULT_EXTENSION: &str = "php";

/// Settings for one generation run, assembled by the caller and passed by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model class pattern; `*` matches one or more word characters.
    pub item_type: String,
    pub namespace: String,
    /// Template id handed to the renderer.
    pub template: String,
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            item_type: DEFAULT_ITEM_TYPE.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(item_type: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("item_type", &self.item_type)?;
        validate_non_empty_string("namespace", &self.namespace)?;
        validate_non_empty_string("template", &self.template)?;
        validate_extension("extension", &self.extension)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.item_type, "*");
        assert_eq!(config.namespace, r"app\models\metadata\traits");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blank_values() {
        let config = GeneratorConfig::new("", "app");
        assert!(config.validate().is_err());

        let config = GeneratorConfig {
            extension: ".php".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
