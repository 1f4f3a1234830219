use crate::domain::model::PlaylistEntry;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

use crate::config::ScenarioConfig;

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn graphql_url(&self) -> &str;
    /// Page budget for one paginated fetch; `None` means unbounded.
    fn max_pages(&self) -> Option<usize>;
    fn timeout(&self) -> Option<Duration>;
    fn scenarios(&self) -> &ScenarioConfig;
}

/// One access path able to answer the three catalog questions.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn label(&self) -> &str;
    async fn albums_by_artist(&self, artist: &str) -> Result<Vec<String>>;
    async fn genres_by_artist(&self, artist: &str) -> Result<Vec<String>>;
    async fn playlist_tracks(&self, playlist: &str) -> Result<Vec<PlaylistEntry>>;
}
