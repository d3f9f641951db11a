//! Static resource server
//!
//! Serves files from a configured document root: `/` maps to `/index.html`,
//! content types are derived from the file extension, and every failure
//! (missing file, read error, path escape) is answered with the JSON error
//! envelope `{"status":"error","reason":<message>}` and a server-error
//! status code. No failure crashes the serving process.

mod files;

pub use files::{exists, mime_type, read_content, FileError};

use crate::config::FormConfig;
use anyhow::{anyhow, Result};
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::json;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Build the router serving static resources from the given document root
pub fn build_router(root: PathBuf) -> Router {
    Router::new()
        .fallback(serve_resource)
        .with_state(Arc::new(root))
}

/// Bind the configured address and serve until shutdown
pub async fn run(config: &FormConfig) -> Result<()> {
    let addr = config.listen_addr();
    let root = config.document_root();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Failed to bind {}: {}", addr, e))?;

    tracing::info!("Server listening on {addr}, serving {}", root.display());

    axum::serve(listener, build_router(root))
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn serve_resource(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let mut pathname = uri.path();
    if pathname == "/" {
        pathname = "/index.html";
    }

    let path = match resolve(&root, pathname) {
        Ok(path) => path,
        Err(reason) => {
            tracing::warn!(path = pathname, "rejected request path");
            return error_envelope(reason);
        }
    };

    match read_content(&path).await {
        Ok(content) => {
            let content_type = format!("{}; charset=utf-8", mime_type(&path));
            tracing::debug!(path = pathname, content_type, "serving resource");
            ([(header::CONTENT_TYPE, content_type)], content).into_response()
        }
        Err(err) => {
            tracing::warn!(path = pathname, error = %err, "failed to serve resource");
            error_envelope(err.to_string())
        }
    }
}

/// Resolve a request pathname against the document root.
///
/// Only plain path segments are accepted; anything that could escape the
/// root (parent segments, absolute components) is rejected.
fn resolve(root: &Path, pathname: &str) -> Result<PathBuf, String> {
    let relative = pathname.trim_start_matches('/');
    let mut resolved = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return Err(format!("Invalid path: {pathname}")),
        }
    }

    Ok(resolved)
}

fn error_envelope(reason: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "reason": reason })),
    )
        .into_response()
}
