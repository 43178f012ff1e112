pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::validation::{validate_stream_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "json2list")]
#[command(about = "Converts a JSON document into an HTML list fragment")]
pub struct CliConfig {
    /// Input path, "-" reads standard input
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Output path, "-" writes standard output
    #[arg(short, long, default_value = "-")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase resource usage")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_stream_path("input", &self.input)?;
        validate_stream_path("output", &self.output)?;
        Ok(())
    }
}
