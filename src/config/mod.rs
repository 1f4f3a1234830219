#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, ScenarioOverrides, SourceSelection};
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:4000/graphql";

/// Names the three catalog questions are asked about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub albums_artist: String,
    pub genres_artist: String,
    pub playlist: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            albums_artist: "Red Hot Chili Peppers".to_string(),
            genres_artist: "U2".to_string(),
            playlist: "Grunge".to_string(),
        }
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scenarios.albums_artist", &self.albums_artist)?;
        validate_non_empty_string("scenarios.genres_artist", &self.genres_artist)?;
        validate_non_empty_string("scenarios.playlist", &self.playlist)
    }
}

/// `0` disables the page budget.
pub(crate) fn page_budget(max_pages: usize) -> Option<usize> {
    (max_pages > 0).then_some(max_pages)
}
