// Copyright (C) Brian G. Milnes 2025

//! Batch driver: enumerate files, expand each, write back changed ones
//!
//! Files are collected up front and processed one at a time in sorted
//! order with a single `RunCounter`. The first error aborts the run;
//! files written before it stay written.

pub mod driver {
    use std::fmt;
    use std::fs;
    use std::path::{Path, PathBuf};
    use globset::{Glob, GlobMatcher};
    use walkdir::WalkDir;
    use crate::args::args::format_number;
    use crate::counter::counter::RunCounter;
    use crate::error::error::ExpandError;
    use crate::logging::logging::ToolLogger;
    use crate::rewriter::rewriter::{rewrite_line, ExpansionContext};
    use crate::scanner::scanner::{find_standalone, CommentSyntax};
    use crate::symbol_table::symbol_table::SymbolTable;

    /// Print a progress line every 1% once a batch reaches this size
    pub const PROGRESS_THRESHOLD: usize = 1000;

    #[derive(Debug, Clone)]
    pub struct BatchConfig {
        pub directories: Vec<PathBuf>,
        pub mask: String,
        pub comment_prefix: String,
        pub dry_run: bool,
    }

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct BatchSummary {
        pub files_scanned: usize,
        pub files_rewritten: usize,
        pub lines_rewritten: usize,
        pub counter_final: u64,
    }

    impl fmt::Display for BatchSummary {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "Summary: {} files checked, {} files rewritten, {} lines rewritten, next index {}",
                format_number(self.files_scanned),
                format_number(self.files_rewritten),
                format_number(self.lines_rewritten),
                self.counter_final
            )
        }
    }

    /// Result of expanding one file's text
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Expansion {
        pub text: String,
        pub lines_rewritten: usize,
        pub symbols: Vec<String>,
    }

    impl Expansion {
        pub fn is_modified(&self) -> bool {
            self.lines_rewritten > 0
        }
    }

    /// Validate every directory, then list matching files recursively.
    ///
    /// The mask is a glob matched against the file name only.
    pub fn collect_files(config: &BatchConfig) -> Result<Vec<PathBuf>, ExpandError> {
        if config.directories.is_empty() {
            return Err(ExpandError::MissingInput);
        }
        for dir in &config.directories {
            if !dir.is_dir() {
                return Err(ExpandError::InvalidDirectory(dir.clone()));
            }
        }

        let matcher = compile_mask(&config.mask)?;
        let mut files = Vec::new();

        for dir in &config.directories {
            for entry in WalkDir::new(dir).sort_by_file_name() {
                let entry = entry.map_err(|e| {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                    ExpandError::io(path, e.into())
                })?;
                if entry.file_type().is_file() && matcher.is_match(entry.file_name()) {
                    files.push(entry.into_path());
                }
            }
        }

        Ok(files)
    }

    fn compile_mask(mask: &str) -> Result<GlobMatcher, ExpandError> {
        Glob::new(mask)
            .map(|glob| glob.compile_matcher())
            .map_err(|source| ExpandError::InvalidMask {
                mask: mask.to_string(),
                source,
            })
    }

    /// Expand every invocation in `source`, the text of the file at `path`.
    ///
    /// Symbols come only from `source` itself. Each symbol is applied in
    /// definition order, so a later symbol sees the rewrites of earlier ones
    /// on the same line. Line terminators, the trailing newline and
    /// indentation are preserved.
    pub fn expand_source(
        source: &str,
        path: &Path,
        syntax: &CommentSyntax,
        counter: &mut RunCounter,
        logger: &mut ToolLogger,
    ) -> Result<Expansion, ExpandError> {
        let mut lines: Vec<String> = source.lines().map(str::to_string).collect();
        let table = SymbolTable::build(lines.as_slice(), path, syntax)?;

        let symbols: Vec<String> = table.iter().map(|(name, _)| name.to_string()).collect();
        for name in &symbols {
            logger.log(&format!("Adding symbol '{name}'"));
        }

        let mut lines_rewritten = 0;
        for (i, line) in lines.iter_mut().enumerate() {
            let context = ExpansionContext {
                line_number: i + 1,
                file_path: path,
            };
            let mut changed = false;

            for (name, definition) in table.iter() {
                if let Some(at) = find_standalone(line, name, syntax) {
                    *line = rewrite_line(line, at, name, definition, &context, counter)?;
                    changed = true;
                }
            }
            if changed {
                lines_rewritten += 1;
            }
        }

        let newline = if source.contains("\r\n") { "\r\n" } else { "\n" };
        let mut text = lines.join(newline);
        if source.ends_with('\n') {
            text.push_str(newline);
        }

        Ok(Expansion {
            text,
            lines_rewritten,
            symbols,
        })
    }

    /// Run the whole batch described by `config`
    pub fn run_batch(config: &BatchConfig, logger: &mut ToolLogger) -> Result<BatchSummary, ExpandError> {
        let files = collect_files(config)?;
        let syntax = CommentSyntax::new(&config.comment_prefix);
        let mut counter = RunCounter::new();
        let mut summary = BatchSummary {
            files_scanned: files.len(),
            ..BatchSummary::default()
        };

        logger.log(&format!("Processing {} files", format_number(files.len())));
        let show_progress = files.len() >= PROGRESS_THRESHOLD;
        let mut last_percentage = 0;

        for (idx, file) in files.iter().enumerate() {
            if show_progress {
                let percentage = idx * 100 / files.len() + 1;
                if percentage != last_percentage {
                    last_percentage = percentage;
                    logger.log(&format!("{percentage}% done"));
                }
            }

            let bytes = fs::read(file).map_err(|e| ExpandError::io(file, e))?;
            let source = match String::from_utf8(bytes) {
                Ok(source) => source,
                Err(_) => {
                    logger.warn(&format!("Skipping non UTF-8 file '{}'", file.display()));
                    continue;
                }
            };

            let expansion = expand_source(&source, file, &syntax, &mut counter, logger)?;
            if !expansion.is_modified() {
                continue;
            }

            if !config.dry_run {
                fs::write(file, &expansion.text).map_err(|e| ExpandError::io(file, e))?;
            }
            let file_name = file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            logger.log(&format!("Processed '{file_name}'"));
            logger.log_silent(&format!("{}: {} lines rewritten", file.display(), expansion.lines_rewritten));

            summary.files_rewritten += 1;
            summary.lines_rewritten += expansion.lines_rewritten;
        }

        summary.counter_final = counter.current();
        Ok(summary)
    }
}
