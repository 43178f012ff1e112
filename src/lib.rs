#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalIo, CliConfig};

pub use crate::core::{engine::ConvertEngine, pipeline::ListPipeline};
pub use crate::utils::error::{ConvertError, Result};
