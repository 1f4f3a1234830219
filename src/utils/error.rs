use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("No {resource} found for '{term}'")]
    NotFound { resource: String, term: String },

    #[error("Record is missing field '{field}'")]
    MissingField { field: String },

    #[error("Unexpected response shape: {message}")]
    SchemaMismatch { message: String },

    #[error("Pagination from {url} exceeded {pages} pages")]
    PaginationLimitExceeded { url: String, pages: usize },

    #[error("Pagination cursor repeated: {url}")]
    PaginationCycle { url: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    pub fn missing_field(field: &str) -> Self {
        CatalogError::MissingField {
            field: field.to_string(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        CatalogError::SchemaMismatch {
            message: message.into(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::ConfigValidationError { .. } | CatalogError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ApiError(_) | CatalogError::HttpStatus { .. } => {
                format!("Could not reach the catalog API: {}", self)
            }
            CatalogError::NotFound { resource, term } => {
                format!("The catalog has no {} matching '{}'", resource, term)
            }
            CatalogError::MissingField { .. }
            | CatalogError::SchemaMismatch { .. }
            | CatalogError::SerializationError(_) => {
                format!("The catalog returned data in an unexpected shape: {}", self)
            }
            CatalogError::PaginationLimitExceeded { .. } | CatalogError::PaginationCycle { .. } => {
                format!("Paging through results did not terminate: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::ApiError(_) => "Check that the REST and GraphQL servers are running",
            CatalogError::HttpStatus { .. } => "Check the configured base URLs and server logs",
            CatalogError::NotFound { .. } => "Check the spelling of the artist or playlist name",
            CatalogError::MissingField { .. }
            | CatalogError::SchemaMismatch { .. }
            | CatalogError::SerializationError(_) => {
                "Check that the servers expose the expected catalog schema"
            }
            CatalogError::PaginationLimitExceeded { .. } => "Raise --max-pages or pass 0 to disable the bound",
            CatalogError::PaginationCycle { .. } => "The REST server returned a repeating next link",
            CatalogError::ConfigValidationError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            CatalogError::IoError(_) => "Run again with --verbose for details",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::ConfigValidationError { .. } | CatalogError::InvalidConfigValueError { .. } => 2,
            CatalogError::ApiError(_) | CatalogError::HttpStatus { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
