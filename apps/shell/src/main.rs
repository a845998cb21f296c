#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod handlers;
pub mod models;

use crate::handlers::{check, defaults, property, wire};
use crate::models::args::{Cli, Commands};

use anyhow::Result;
use basalt::domain::{MasterState, SecurityErrorCode};
use basalt::prelude::SiteConfiguration;
use clap::Parser;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let builder = SiteConfiguration::builder();
    let conf = match cli.site.as_deref() {
        Some(path) => builder.file(path),
        None => builder,
    }
    .build()?;

    let _logger = basalt::logging::init(env!("CARGO_BIN_NAME"), &conf)?;

    match cli.command {
        Commands::Defaults { format } => defaults::list_defaults(format)?,
        Commands::Get { key } => property::get_value(&conf, &key)?,
        Commands::Describe { key } => property::describe(&key)?,
        Commands::Check { path } => check::check_site(&path)?,
        Commands::MasterState { code } => return Ok(wire::decode::<MasterState>(code)),
        Commands::SecurityError { code } => return Ok(wire::decode::<SecurityErrorCode>(code)),
    }

    Ok(ExitCode::SUCCESS)
}
