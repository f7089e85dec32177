pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::output::{render_cards, render_window, OutputFormat};
pub use crate::config::toml_config::DirectoryConfig;
pub use crate::core::{
    category_window::CategoryWindow,
    directory_filter::{apply_query, DirectoryFilter},
    session::{DirectoryEvent, DirectorySession},
};
pub use crate::domain::model::{Catalog, FilterMode, Practitioner, PractitionerCard, QueryState};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::{DirectoryError, Result};
