pub mod engine;
pub mod graphql;
pub mod graphql_catalog;
pub mod helpers;
pub mod pagination;
pub mod rest;
pub mod rest_catalog;

pub use crate::domain::model::{CatalogReport, Page, PlaylistEntry, Record};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
