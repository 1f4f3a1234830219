use crate::domain::model::{Page, Record};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const TRACKS: &str = "tracks";
pub const ARTISTS: &str = "artists";
pub const PLAYLISTS: &str = "playlists";
pub const PLAYLIST_TRACK: &str = "playlist_track";
pub const ALBUMS: &str = "albums";

pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Right-hand side of a `_filters=field:value` parameter.
#[derive(Debug, Clone)]
pub enum Filter {
    Eq(Value),
    In(Vec<Value>),
}

impl Filter {
    fn render(&self) -> String {
        match self {
            Filter::Eq(value) => render_scalar(value),
            Filter::In(values) => {
                let items: Vec<String> = values.iter().map(render_scalar).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Query against `/tables/{resource}/rows`.
#[derive(Debug, Clone)]
pub struct RowsQuery {
    resource: &'static str,
    params: Vec<(String, String)>,
}

impl RowsQuery {
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            params: Vec::new(),
        }
    }

    pub fn filter(mut self, field: &str, filter: Filter) -> Self {
        self.params
            .push(("_filters".to_string(), format!("{}:{}", field, filter.render())));
        self
    }

    pub fn search(mut self, term: &str) -> Self {
        self.params.push(("_search".to_string(), term.to_string()));
        self
    }

    pub fn extend(mut self, field: &str) -> Self {
        self.params.push(("_extend".to_string(), field.to_string()));
        self
    }

    pub fn path(&self) -> String {
        format!("/tables/{}/rows", self.resource)
    }
}

/// Client for the tabular REST API rooted at `base_url`.
#[derive(Debug, Clone)]
pub struct RestApi {
    client: Client,
    base_url: String,
    pub(crate) max_pages: Option<usize>,
    timeout: Option<Duration>,
}

impl RestApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            max_pages: Some(DEFAULT_MAX_PAGES),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_url())
            .with_max_pages(config.max_pages())
            .with_timeout(config.timeout())
    }

    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves a server-relative path, such as a `next` cursor, against the base.
    pub fn resolve(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn rows_url(&self, query: &RowsQuery) -> Result<String> {
        let base = self.resolve(&query.path());
        let url = Url::parse_with_params(&base, &query.params).map_err(|e| {
            CatalogError::InvalidConfigValueError {
                field: "api_url".to_string(),
                value: base.clone(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;
        Ok(url.to_string())
    }

    pub async fn fetch_page(&self, url: &str) -> Result<Page> {
        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("GET {}", url);
        let response = request.send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str::<Page>(&body)?)
    }

    /// First page of `query`, without following `next`.
    pub async fn get_rows(&self, query: &RowsQuery) -> Result<Vec<Record>> {
        let url = self.rows_url(query)?;
        Ok(self.fetch_page(&url).await?.data)
    }

    pub async fn artist_info(&self, artist_ids: &[Value]) -> Result<Vec<Record>> {
        let query = RowsQuery::new(ARTISTS).filter("artistid", Filter::In(artist_ids.to_vec()));
        self.get_rows(&query).await
    }

    /// `ArtistId` of the best search match for `name`.
    pub async fn artist_id(&self, name: &str) -> Result<Value> {
        self.first_match(ARTISTS, name, "ArtistId").await
    }

    /// `PlaylistId` of the best search match for `name`.
    pub async fn playlist_id(&self, name: &str) -> Result<Value> {
        self.first_match(PLAYLISTS, name, "PlaylistId").await
    }

    pub async fn albums_by_artist(&self, artist_id: &Value) -> Result<Vec<Record>> {
        let query = RowsQuery::new(ALBUMS).filter("artistid", Filter::Eq(artist_id.clone()));
        self.get_rows(&query).await
    }

    async fn first_match(&self, resource: &'static str, term: &str, id_field: &str) -> Result<Value> {
        let rows = self.get_rows(&RowsQuery::new(resource).search(term)).await?;
        let first = rows.first().ok_or_else(|| CatalogError::NotFound {
            resource: resource.to_string(),
            term: term.to_string(),
        })?;
        if rows.len() > 1 {
            tracing::debug!("{} matches for '{}' in {}, using the first", rows.len(), term, resource);
        }
        first.field(id_field).cloned()
    }
}
