use crate::config::TomlConfig;
use crate::utils::error::Result;
use clap::{Args, Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelection {
    Rest,
    Graphql,
    Both,
}

impl SourceSelection {
    pub fn includes_rest(self) -> bool {
        matches!(self, SourceSelection::Rest | SourceSelection::Both)
    }

    pub fn includes_graphql(self) -> bool {
        matches!(self, SourceSelection::Graphql | SourceSelection::Both)
    }
}

/// Question parameters given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct ScenarioOverrides {
    #[arg(long, help = "Artist whose albums are listed [default: Red Hot Chili Peppers]")]
    pub albums_artist: Option<String>,

    #[arg(long, help = "Artist whose genres are listed [default: U2]")]
    pub genres_artist: Option<String>,

    #[arg(long, help = "Playlist whose tracks are listed [default: Grunge]")]
    pub playlist: Option<String>,
}

/// Command-line flags. Every flag left out keeps the value from `--config`,
/// or the built-in default when no file is given.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-compare")]
#[command(about = "Answer the same music-catalog questions through REST and GraphQL")]
pub struct CliConfig {
    #[arg(long, help = "REST API base URL [default: http://localhost:8000/api]")]
    pub api_url: Option<String>,

    #[arg(long, help = "GraphQL endpoint [default: http://localhost:4000/graphql]")]
    pub graphql_url: Option<String>,

    #[arg(long, value_enum, default_value = "both")]
    pub source: SourceSelection,

    #[arg(long, help = "Page budget per paginated fetch, 0 for unbounded [default: 1000]")]
    pub max_pages: Option<usize>,

    #[arg(long, help = "Per-request timeout; no timeout when omitted")]
    pub timeout_seconds: Option<u64>,

    #[command(flatten)]
    pub scenarios: ScenarioOverrides,

    #[arg(long, help = "Read endpoints and scenarios from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// The `--config` file, or the defaults, with explicit flags applied on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(api_url) = &self.api_url {
            config.endpoints.api_url = api_url.clone();
            tracing::debug!("api_url overridden to: {}", api_url);
        }
        if let Some(graphql_url) = &self.graphql_url {
            config.endpoints.graphql_url = graphql_url.clone();
            tracing::debug!("graphql_url overridden to: {}", graphql_url);
        }
        if let Some(max_pages) = self.max_pages {
            config.pagination.max_pages = max_pages;
            tracing::debug!("max_pages overridden to: {}", max_pages);
        }
        if let Some(timeout) = self.timeout_seconds {
            config.endpoints.timeout_seconds = Some(timeout);
            tracing::debug!("timeout_seconds overridden to: {}", timeout);
        }

        let scenarios = &mut config.scenarios;
        if let Some(artist) = &self.scenarios.albums_artist {
            scenarios.albums_artist = artist.clone();
        }
        if let Some(artist) = &self.scenarios.genres_artist {
            scenarios.genres_artist = artist.clone();
        }
        if let Some(playlist) = &self.scenarios.playlist {
            scenarios.playlist = playlist.clone();
        }
    }
}
