pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::RunConfig;
pub use crate::core::{engine::RenderEngine, pipeline::ReadmePipeline};
pub use crate::domain::model::{Entry, Instance, Link, Row};
pub use crate::utils::error::{Result, TableError};
