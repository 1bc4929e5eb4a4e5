use crate::core::ConfigProvider;
use crate::domain::model::{Endpoints, FanOut};
use crate::utils::error::{LootboxError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";
pub const DEFAULT_PAGE_NAME: &str = "lootbox.html";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default)]
    pub search: SearchOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub fan_out: FanOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub page_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
            page_name: DEFAULT_PAGE_NAME.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LootboxError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LootboxError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LootboxError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("service.base_url", &self.service.base_url)?;

        validation::validate_endpoint_path("endpoints.game_info", &self.endpoints.game_info)?;
        validation::validate_endpoint_path("endpoints.prices", &self.endpoints.prices)?;
        validation::validate_endpoint_path("endpoints.videos", &self.endpoints.videos)?;
        validation::validate_endpoint_path("endpoints.streams", &self.endpoints.streams)?;

        validation::validate_path("output.directory", &self.output.directory)?;
        validation::validate_file_name("output.page_name", &self.output.page_name)?;

        Ok(())
    }
}

impl ConfigProvider for SearchConfig {
    fn base_url(&self) -> &str {
        &self.service.base_url
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn fan_out(&self) -> FanOut {
        self.search.fan_out
    }

    fn output_dir(&self) -> &str {
        &self.output.directory
    }

    fn page_name(&self) -> &str {
        &self.output.page_name
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
