// Error types for the distribution pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for a build run
///
/// Every stage error is fatal. Individual error types are exposed through
/// `From` conversions so stages can return their own error with `?`.
#[derive(Debug, Error)]
pub enum DistError {
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Source read error: {0}")]
    SourceRead(#[from] SourceReadError),

    #[error("Minification failed: {0}")]
    Minify(#[from] MinifyError),

    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

impl DistError {
    /// Short, stable tag for the failing stage
    pub fn kind(&self) -> &'static str {
        match self {
            DistError::Metadata(_) => "metadata",
            DistError::SourceRead(_) => "source",
            DistError::Minify(_) => "minify",
            DistError::Write(_) => "write",
        }
    }
}

/// Errors while reading the version from project metadata
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{path}' has no version field")]
    MissingVersion { path: PathBuf },
}

/// Errors while loading the canonical source module
#[derive(Debug, Error)]
pub enum SourceReadError {
    #[error("source file '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("cannot read source file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors reported by the minification engine
#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("Syntax errors in {artifact}:\n{diagnostics}")]
    Syntax {
        artifact: String,
        diagnostics: String,
    },

    #[error("Minifier task failed: {0}")]
    Engine(String),
}

/// Errors while writing artifacts to disk
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
