// Copyright (C) Brian G. Milnes 2025

//! Tool runner for the define-expand binary
//!
//! Wraps a run with:
//! - Version banner
//! - Timing measurement
//! - Optional logging to files

pub mod tool_runner {
    use std::time::Instant;
    use std::path::PathBuf;
    use anyhow::Result;
    use crate::logging::logging::ToolLogger;

    pub struct ToolConfig {
        /// Name of the tool (for logging directory)
        pub tool_name: String,
        /// Printed before anything else
        pub banner: String,
        /// Whether to enable file logging
        pub enable_logging: bool,
        /// Root of the logs/ tree
        pub logs_root: PathBuf,
    }

    impl ToolConfig {
        pub fn new(tool_name: &str, banner: &str) -> Self {
            ToolConfig {
                tool_name: tool_name.to_string(),
                banner: banner.to_string(),
                enable_logging: false,
                logs_root: PathBuf::from("logs"),
            }
        }

        pub fn with_logging(mut self, enable: bool) -> Self {
            self.enable_logging = enable;
            self
        }
    }

    /// Run a tool with banner, timing and optional logging.
    ///
    /// The closure returns the one-line summary printed at the end.
    pub fn run_tool<F>(config: ToolConfig, tool_fn: F) -> Result<()>
    where
        F: FnOnce(&mut ToolLogger) -> Result<String>,
    {
        let start = Instant::now();

        println!("{}", config.banner);
        println!();

        let mut logger = if config.enable_logging {
            ToolLogger::new(&config.tool_name, &config.logs_root)
        } else {
            ToolLogger::new_disabled()
        };
        logger.log_silent(&config.banner);

        let summary = tool_fn(&mut logger)?;

        println!();
        println!("{summary}");
        println!("Completed in {}ms", start.elapsed().as_millis());

        if config.enable_logging {
            logger.finalize(&summary);
        }

        Ok(())
    }
}
