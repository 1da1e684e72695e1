//! Sample runner entry point (CLI binary).
//!
//! This is a thin wrapper around the `aws_cli_sample` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the run report
//!
//! All page behavior is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use aws_cli_sample::initialization::init_logger_with;
use aws_cli_sample::{run_sample, Opt};

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_sample(&opt) {
        Ok(report) => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("aws_cli_sample error: {:#}", e);
            process::exit(1);
        }
    }
}
