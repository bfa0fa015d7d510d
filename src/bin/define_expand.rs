// Copyright (C) Brian G. Milnes 2025

//! Expand //#DEFINE line macros in place
//!
//! Usage:
//!   define-expand -d src/app,src/util -f '*.js'
//!   define-expand -d:src/app -f:*.js --dry-run
//!
//! Exit status is 1 when no directory is given. Any other failure prints
//! the error and usage and exits 0.
//!
//! Binary: define-expand

use anyhow::Result;
use define_expand::{banner, run_batch, run_tool, ExpandArgs, ExpandError, ToolConfig};
use std::process::ExitCode;

const MISSING_INPUT_STATUS: u8 = 1;

fn show_error(message: &str) {
    println!("{message}\n\n{}", ExpandArgs::usage());
}

fn run(args: &ExpandArgs) -> Result<()> {
    let batch = args.batch_config()?;
    let config = ToolConfig::new("define-expand", &banner()).with_logging(args.log);

    run_tool(config, |logger| {
        let summary = run_batch(&batch, logger)?;
        Ok(summary.to_string())
    })
}

fn main() -> ExitCode {
    let args = match ExpandArgs::parse_from_legacy(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    if args.dirs.is_empty() {
        println!("{}\n", banner());
        show_error(&ExpandError::MissingInput.to_string());
        return ExitCode::from(MISSING_INPUT_STATUS);
    }

    if let Err(e) = run(&args) {
        show_error(&e.to_string());
    }

    ExitCode::SUCCESS
}
