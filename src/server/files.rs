//! Static resource access
//!
//! Existence checks, content reads and extension-based MIME type
//! derivation for the static resource server.

use std::path::Path;
use thiserror::Error;

/// Failure while resolving or reading a static resource
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Check whether a file exists at the given path
pub async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Read the full content of a file, failing with `NotFound` when absent
pub async fn read_content(path: &Path) -> Result<Vec<u8>, FileError> {
    if !exists(path).await {
        return Err(FileError::NotFound(path.display().to_string()));
    }

    Ok(tokio::fs::read(path).await?)
}

/// Derive the MIME type purely from the file extension.
///
/// Anything without a known extension is served as HTML.
pub fn mime_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => "application/json",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        _ => "text/html",
    }
}
