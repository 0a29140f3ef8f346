pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, QuickConfig};

pub use adapters::storage::LocalStorage;
pub use config::{template::TemplateConfig, MergeProfile};
pub use crate::core::{engine::MergeEngine, merger::CollectionMerger};
pub use utils::error::{MergeError, Result};
