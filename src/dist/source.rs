// Canonical source module loading

use crate::dist::error::SourceReadError;
use std::io::ErrorKind;
use std::path::Path;

/// The library's source text, shared read-only by both variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    raw_text: String,
}

impl SourceModule {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.raw_text
    }

    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }
}

/// Read the canonical source module at `path`
///
/// The text is opaque: no syntax check happens here.
pub fn load_source(path: &Path) -> Result<SourceModule, SourceReadError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source module");
            Ok(SourceModule::new(text))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(SourceReadError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(SourceReadError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
