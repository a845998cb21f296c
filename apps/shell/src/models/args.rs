//! # CLI Argument Definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "basalt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect Basalt properties, site configurations and wire codes")]
pub struct Cli {
    /// Site configuration file layered over the defaults; `BASALT__*` variables always apply
    #[arg(long, global = true, value_name = "PATH")]
    pub site: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every compiled-in default
    Defaults {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the effective value of a key
    Get { key: String },
    /// Describe a property or free-form prefix
    Describe { key: String },
    /// Load and sanity-check a site configuration file
    Check { path: PathBuf },
    /// Decode a master state wire code
    #[command(name = "master-state")]
    MasterState {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Decode a security error wire code
    #[command(name = "security-error")]
    SecurityError {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `key = value` lines
    Text,
    /// Array of property objects
    Json,
    /// Documentation table
    Markdown,
}
