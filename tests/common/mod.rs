// Copyright (C) Brian G. Milnes 2025

//! Common test utilities for integration tests

#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `files` (relative path, contents) under `root`, creating directories
pub fn write_tree(root: &Path, files: &[(&str, &str)]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)
            .context(format!("Failed to write fixture: {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(format!("Failed to read: {}", path.display()))
}
