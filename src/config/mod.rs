#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_DATA_PATH: &str = "data.yml";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/README.md.tmpl";
pub const DEFAULT_OUTPUT_PATH: &str = "README.md";

/// Settings for one run, after layering flags over the config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub data_path: String,
    pub template_path: String,
    pub output_path: String,
    pub log_level: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            log_level: None,
        }
    }
}

impl RunConfig {
    pub fn new(
        data_path: impl Into<String>,
        template_path: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            data_path: data_path.into(),
            template_path: template_path.into(),
            output_path: output_path.into(),
            log_level: None,
        }
    }

    /// Explicit values win over the file, the file wins over defaults.
    pub fn layered(
        file: Option<&TomlConfig>,
        data_path: Option<String>,
        template_path: Option<String>,
        output_path: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        let from_file =
            |get: fn(&TomlConfig) -> Option<&str>| file.and_then(get).map(str::to_string);

        Self {
            data_path: data_path
                .or_else(|| from_file(TomlConfig::data_path))
                .unwrap_or(defaults.data_path),
            template_path: template_path
                .or_else(|| from_file(TomlConfig::template_path))
                .unwrap_or(defaults.template_path),
            output_path: output_path
                .or_else(|| from_file(TomlConfig::output_path))
                .unwrap_or(defaults.output_path),
            log_level: from_file(TomlConfig::log_level),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn template_path(&self) -> &str {
        &self.template_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data", &self.data_path)?;
        validate_file_extension("data", &self.data_path, &["yml", "yaml"])?;
        validate_path("template", &self.template_path)?;
        validate_path("output", &self.output_path)?;
        Ok(())
    }
}
