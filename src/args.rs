// Copyright (C) Brian G. Milnes 2025

//! Command line arguments for define-expand
//!
//! Both spellings are accepted:
//! ```text
//! define-expand -d src,lib -f '*.js'
//! define-expand -d:src,lib -f:*.js
//! ```

pub mod args {
    use std::ffi::OsString;
    use std::path::PathBuf;
    use clap::{CommandFactory, Parser};
    use crate::driver::driver::BatchConfig;
    use crate::error::error::ExpandError;
    use crate::scanner::scanner::DEFAULT_COMMENT_PREFIX;

    pub const DEFAULT_MASK: &str = "*";

    #[derive(Parser, Debug)]
    #[command(name = "define-expand")]
    #[command(about = "Expand //#DEFINE line macros in place across source trees", long_about = None)]
    #[command(after_help = "Examples:\n  define-expand -d src/app,src/util -f '*.js'\n  define-expand -d:src/app -f:*.js")]
    pub struct ExpandArgs {
        /// Comma separated list of directories to process recursively
        #[arg(short, long, value_delimiter = ',')]
        pub dirs: Vec<PathBuf>,

        /// File name mask
        #[arg(short = 'f', long, default_value = DEFAULT_MASK)]
        pub mask: String,

        /// Prefix marking a comment line (definitions live behind it)
        #[arg(short, long, default_value = DEFAULT_COMMENT_PREFIX)]
        pub comment_prefix: String,

        /// Report what would change without writing files
        #[arg(short = 'n', long)]
        pub dry_run: bool,

        /// Also write the run log under logs/
        #[arg(short, long)]
        pub log: bool,
    }

    impl ExpandArgs {
        /// Parse from an argument iterator, accepting `-d:value` style flags
        pub fn parse_from_legacy<I, T>(args: I) -> Result<Self, clap::Error>
        where
            I: IntoIterator<Item = T>,
            T: Into<OsString>,
        {
            Self::try_parse_from(normalize_legacy_args(args))
        }

        /// Batch settings; fails with `MissingInput` when no directory was given
        pub fn batch_config(&self) -> Result<BatchConfig, ExpandError> {
            if self.dirs.is_empty() {
                return Err(ExpandError::MissingInput);
            }
            Ok(BatchConfig {
                directories: self.dirs.clone(),
                mask: self.mask.clone(),
                comment_prefix: self.comment_prefix.clone(),
                dry_run: self.dry_run,
            })
        }

        pub fn usage() -> String {
            Self::command().render_help().to_string()
        }
    }

    /// Split `-x:value` into `-x value` for single-letter flags
    pub fn normalize_legacy_args<I, T>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut normalized = Vec::new();
        for arg in args.into_iter().map(Into::into) {
            let split = arg.to_str().and_then(|s| {
                let mut chars = s.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some('-'), Some(flag), Some(':')) if flag.is_ascii_alphabetic() => {
                        Some((format!("-{flag}"), s[3..].to_string()))
                    }
                    _ => None,
                }
            });
            match split {
                Some((flag, value)) => {
                    normalized.push(OsString::from(flag));
                    normalized.push(OsString::from(value));
                }
                None => normalized.push(arg),
            }
        }
        normalized
    }

    /// Format a count with thousands separators: 1234567 -> "1,234,567"
    pub fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}
