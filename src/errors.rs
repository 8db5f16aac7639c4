// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotifMarkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Invalid motif {motif:?}: {source}")]
    Pattern {
        motif: String,
        source: regex::Error,
    },

    #[error("{motifs} motifs supplied, but the palette only has {colors} colors (add colors to the config palette)")]
    TooManyMotifs { motifs: usize, colors: usize },

    #[error("Invalid palette color {0:?}")]
    Color(String),

    #[error("Error reading config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Nothing to draw: canvas has zero height (no sequence records)")]
    EmptyCanvas,

    #[error("Render error: {0}")]
    Render(String),
}

impl MotifMarkError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MotifMarkError::Open {
            path: path.into(),
            source,
        }
    }
}
