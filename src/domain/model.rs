use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// One row or object returned by an API, shaped however the server shaped it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, Value>,
}

impl Record {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(Record {
                data: obj.into_iter().collect(),
            }),
            other => Err(CatalogError::schema(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Field lookup that fails when the field is absent.
    pub fn field(&self, field: &str) -> Result<&Value> {
        self.data
            .get(field)
            .ok_or_else(|| CatalogError::missing_field(field))
    }
}

/// One page of a REST listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub data: Vec<Record>,
    #[serde(default)]
    pub next: Option<String>,
}

impl Page {
    /// `None` when the server reports no further page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlaylistEntry {
    pub track: String,
    pub album: String,
    pub artist: String,
}

impl fmt::Display for PlaylistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.track, self.artist, self.album)
    }
}

/// The three answers produced by one access path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogReport {
    pub source: String,
    pub albums: Vec<String>,
    pub genres: Vec<String>,
    pub playlist: Vec<PlaylistEntry>,
}
