//! Shared fixtures for end-to-end flows

#![allow(dead_code)]

use axum::{extract::State, routing::post, Json, Router};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Scripted submission endpoint: answers each request with the next
/// prepared response and records every received body.
#[derive(Default)]
pub struct ScriptedEndpoint {
    responses: Mutex<VecDeque<serde_json::Value>>,
    requests: Mutex<Vec<HashMap<String, String>>>,
}

impl ScriptedEndpoint {
    pub fn new(responses: Vec<serde_json::Value>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Bodies received so far, in arrival order
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn scripted_submit(
    State(endpoint): State<Arc<ScriptedEndpoint>>,
    Json(body): Json<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    endpoint.requests.lock().unwrap().push(body);
    let next = endpoint
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| serde_json::json!({"status": "success"}));
    Json(next)
}

/// Serve a scripted endpoint on an ephemeral port; returns the submit URL
pub async fn spawn_endpoint(endpoint: Arc<ScriptedEndpoint>) -> String {
    let router = Router::new()
        .route("/submit", post(scripted_submit))
        .with_state(endpoint);
    let addr = spawn_router(router).await;
    format!("http://{addr}/submit")
}

/// Serve any router on an ephemeral port
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fixture");
    });
    addr
}
