use crate::config::{page_budget, ScenarioConfig, DEFAULT_API_URL, DEFAULT_GRAPHQL_URL};
use crate::core::rest::DEFAULT_MAX_PAGES;
use crate::core::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub scenarios: ScenarioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_graphql_url")]
    pub graphql_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            graphql_url: default_graphql_url(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// `0` disables the bound.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_graphql_url() -> String {
    DEFAULT_GRAPHQL_URL.to_string()
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn api_url(&self) -> &str {
        &self.endpoints.api_url
    }

    fn graphql_url(&self) -> &str {
        &self.endpoints.graphql_url
    }

    fn max_pages(&self) -> Option<usize> {
        page_budget(self.pagination.max_pages)
    }

    fn timeout(&self) -> Option<Duration> {
        self.endpoints.timeout_seconds.map(Duration::from_secs)
    }

    fn scenarios(&self) -> &ScenarioConfig {
        &self.scenarios
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoints.api_url", &self.endpoints.api_url)?;
        validate_url("endpoints.graphql_url", &self.endpoints.graphql_url)?;
        if let Some(timeout) = self.endpoints.timeout_seconds {
            validate_positive_number("endpoints.timeout_seconds", timeout, 1)?;
        }
        self.scenarios.validate()
    }
}
