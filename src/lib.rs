pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, SourceSelection};
pub use config::{ScenarioConfig, TomlConfig};

pub use core::{
    engine::{compare, ComparisonEngine, Discrepancy},
    graphql::GraphQlClient,
    graphql_catalog::GraphQlCatalog,
    rest::RestApi,
    rest_catalog::RestCatalog,
};
pub use utils::error::{CatalogError, Result};
