use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("font file {path} not found")]
    NotFound { path: PathBuf },

    #[error("failed to read font {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("nothing to lay out: the story is empty")]
    EmptyStory,

    #[error("PDF renderer rejected the document: {reason}")]
    Render { reason: String },

    #[error(transparent)]
    Font(#[from] FontError),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid colour '{input}', expected #RRGGBB or #RGB")]
pub struct ColorParseError {
    pub input: String,
}
