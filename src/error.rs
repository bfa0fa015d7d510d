// Copyright (C) Brian G. Milnes 2025

//! Error kinds for the macro expander
//!
//! Every failure during symbol-table construction or rewriting is wrapped
//! with the offending line and file, then propagated to the batch driver,
//! which aborts the run.

pub mod error {
    use std::path::PathBuf;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ExpandError {
        #[error("Missing the directories parameter (-d)")]
        MissingInput,

        #[error("The directory '{}' is not valid", .0.display())]
        InvalidDirectory(PathBuf),

        #[error("Invalid file mask '{mask}': {source}")]
        InvalidMask {
            mask: String,
            #[source]
            source: globset::Error,
        },

        #[error("{0}")]
        DefinitionParse(String),

        #[error("Argument list does not match symbol '{symbol}': {actual} supplied, {declared} declared")]
        Arity {
            symbol: String,
            actual: usize,
            declared: usize,
        },

        #[error("The line '{0}' is not a valid symbol invocation")]
        Syntax(String),

        #[error("Critical error: {source} while processing symbol '{definition}' in file '{}'", .file.display())]
        InDefinition {
            definition: String,
            file: PathBuf,
            #[source]
            source: Box<ExpandError>,
        },

        #[error("Critical error: {source} while processing line '{line}' in file '{}'", .file.display())]
        InLine {
            line: String,
            file: PathBuf,
            #[source]
            source: Box<ExpandError>,
        },

        #[error("Failed to access '{}': {source}", .path.display())]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
    }

    impl ExpandError {
        /// Strip the line/file context wrappers and return the underlying kind
        pub fn root(&self) -> &ExpandError {
            match self {
                ExpandError::InDefinition { source, .. } | ExpandError::InLine { source, .. } => {
                    source.root()
                }
                other => other,
            }
        }

        pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
            ExpandError::Io { path: path.into(), source }
        }
    }
}
