pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::run_contact_job;
pub use config::{RunSettings, TomlConfig};
pub use crate::core::{etl::EtlEngine, pipeline::RecordPipeline};
pub use utils::error::{EtlError, Result};
