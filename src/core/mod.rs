pub mod assembler;
pub mod discovery;
pub mod engine;
pub mod loader;
pub mod merger;

pub use crate::domain::model::{Collection, Fragment, MergeStats, MergeSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
