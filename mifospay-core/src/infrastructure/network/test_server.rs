//! Canned-response HTTP backend for exercising `ApiClient` in tests

use crate::domain::repositories::SessionStore;
use crate::infrastructure::platform::{InMemoryStorage, StoredSession};
use crate::shared::config::CoreConfig;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub(crate) fn in_memory_session() -> Arc<dyn SessionStore> {
    Arc::new(StoredSession::new(InMemoryStorage::new()))
}

#[derive(Debug, Clone)]
pub(crate) struct Route {
    method: &'static str,
    path: &'static str,
    status: u16,
    body: String,
}

impl Route {
    /// Match on method and path; the query string is ignored
    pub(crate) fn json(method: &'static str, path: &'static str, status: u16, body: &str) -> Self {
        Self {
            method,
            path,
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

struct BackendState {
    routes: Vec<Route>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub(crate) struct MockBackend {
    addr: SocketAddr,
    state: Arc<BackendState>,
}

impl MockBackend {
    pub(crate) async fn start(routes: Vec<Route>) -> Self {
        let state = Arc::new(BackendState {
            routes,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(canned).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub(crate) fn config(&self) -> CoreConfig {
        CoreConfig {
            base_url: format!("http://{}/api/v1/", self.addr),
            request_timeout_secs: 5,
            ..CoreConfig::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("requests lock").clone()
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.method).collect()
    }
}

async fn canned(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let route = state
        .routes
        .iter()
        .find(|r| r.method == method.as_str() && r.path == uri.path());
    let (status, reply) = match route {
        Some(route) => (route.status, route.body.clone()),
        None => (404, r#"{"defaultUserMessage": "No route"}"#.to_string()),
    };

    state.requests.lock().expect("requests lock").push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply).into_response()
}
