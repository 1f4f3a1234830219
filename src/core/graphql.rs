use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    #[serde(default)]
    message: String,
}

/// Posts literal query documents to a single GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.graphql_url()).with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the `data` member of the response unmodified.
    pub async fn query(&self, document: &str) -> Result<Value> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "query": document }));
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("POST {}", self.endpoint);
        let response = request.send().await?;
        tracing::debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus {
                status: response.status().as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let body: GraphQlResponse = serde_json::from_str(&body)?;
        let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();

        match body.data {
            Some(data) if !data.is_null() => {
                if !messages.is_empty() {
                    tracing::warn!("GraphQL response carried errors: {}", messages.join("; "));
                }
                Ok(data)
            }
            _ if messages.is_empty() => Err(CatalogError::schema("GraphQL response has no data")),
            _ => Err(CatalogError::schema(format!(
                "GraphQL response has no data: {}",
                messages.join("; ")
            ))),
        }
    }
}

/// Walks nested object members, failing on the first absent one.
pub fn select<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    path.iter().try_fold(value, |current, key| {
        current
            .get(key)
            .ok_or_else(|| CatalogError::missing_field(key))
    })
}

/// GraphQL string literal for `s`; JSON string syntax is a valid GraphQL string.
pub fn string_literal(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
