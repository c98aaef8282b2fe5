#![allow(dead_code)]

use std::collections::HashMap;
use std::process::{Command, Output};
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Helper to run lostfound commands against an isolated config directory
pub struct LostFoundTest {
    pub temp_dir: TempDir,
    api_url: Option<String>,
}

impl LostFoundTest {
    pub fn new() -> Self {
        LostFoundTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            api_url: None,
        }
    }

    /// Point the binary at a (fake) backend
    pub fn with_api(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    /// Pretend a previous `auth login` stored these tokens
    pub fn with_session(self, access_token: &str) -> Self {
        let content = format!("access_token: {access_token}\nrefresh_token: refresh-{access_token}\n");
        std::fs::write(self.session_path(), content).expect("Failed to write session file");
        self
    }

    pub fn session_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("session.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_lostfound"));
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("LOSTFOUND_HOME", self.temp_dir.path())
            .env_remove("LOSTFOUND_LOG")
            .env_remove("LOSTFOUND_PASSWORD")
            .env("NO_COLOR", "1");
        match &self.api_url {
            Some(url) => cmd.env("LOSTFOUND_API_URL", url),
            None => cmd.env_remove("LOSTFOUND_API_URL"),
        };
        cmd.output().expect("Failed to execute lostfound command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

/// A request as seen by the fake backend
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
struct BackendState {
    routes: Arc<HashMap<(Method, String), (StatusCode, Value)>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Canned-response HTTP backend on a random local port
pub struct FakeBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct FakeBackendBuilder {
    routes: HashMap<(Method, String), (StatusCode, Value)>,
}

impl FakeBackend {
    pub fn builder() -> FakeBackendBuilder {
        FakeBackendBuilder {
            routes: HashMap::new(),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("backend received no requests")
    }
}

impl FakeBackendBuilder {
    pub fn route(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.routes.insert((method, path.to_string()), (status, body));
        self
    }

    pub async fn start(self) -> FakeBackend {
        let state = BackendState {
            routes: Arc::new(self.routes),
            requests: Arc::default(),
        };
        let requests = state.requests.clone();

        let app = Router::new().fallback(respond).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend failed");
        });

        FakeBackend {
            url: format!("http://{addr}"),
            requests,
        }
    }
}

async fn respond(
    State(state): State<BackendState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query = uri
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default();
    state.requests.lock().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query,
        body: serde_json::from_slice(&body).ok(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    });

    match state.routes.get(&(method, uri.path().to_string())) {
        Some((status, body)) => (*status, axum::Json(body.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({"message": "no such route"})),
        )
            .into_response(),
    }
}

pub fn item_json(id: u64, name: &str, found_date: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": "WALLET",
        "description": "",
        "foundDate": found_date,
        "location": "Gangnam Station",
    })
}

/// `count` items with descending ids and ascending dates
pub fn page_json(count: u64, total: u64) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            item_json(
                100 - i,
                &format!("item {i}"),
                &format!("2024-01-{:02}", (i % 28) + 1),
            )
        })
        .collect();
    json!({ "items": items, "totalCount": total })
}

/// Same payload wrapped in the `{success, data}` envelope
pub fn enveloped(data: Value) -> Value {
    json!({ "success": true, "data": data })
}
