// Copyright (C) Brian G. Milnes 2025

//! define-expand - batch expander for comment-embedded line macros
//!
//! A file declares macros in comments:
//! ```text
//! //#DEFINE ASSERT(cond) check(cond,__INDEX__,__FILE__,__LINE__)
//! ```
//! and every standalone `ASSERT(...)` call later in that same file is
//! rewritten in place to `check(...)`, with placeholders filled from the
//! call site and a counter shared across the whole run.

pub mod error;
pub mod placeholder;
pub mod counter;
pub mod symbol;
pub mod symbol_table;
pub mod scanner;
pub mod rewriter;
pub mod args;
pub mod logging;
pub mod tool_runner;
pub mod driver;

// Re-export commonly used items
pub use error::error::ExpandError;
pub use placeholder::placeholder::Placeholder;
pub use counter::counter::RunCounter;
pub use symbol::symbol::SymbolDefinition;
pub use symbol_table::symbol_table::SymbolTable;
pub use scanner::scanner::{find_standalone, is_comment_line, CommentSyntax};
pub use rewriter::rewriter::{expand_invocation, rewrite_line, ExpansionContext, Invocation};
pub use args::args::{format_number, ExpandArgs};
pub use logging::logging::ToolLogger;
pub use tool_runner::tool_runner::{run_tool, ToolConfig};
pub use driver::driver::{collect_files, expand_source, run_batch, BatchConfig, BatchSummary, Expansion};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Banner printed at the start of every run
pub fn banner() -> String {
    format!("define-expand v. {VERSION}\nA simple line-macro preprocessor for pretty much any file")
}
