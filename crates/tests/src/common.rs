use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use client::{HttpLoginBackend, LoginBackend};
use serde_json::{json, Value};
use shared_types::{ClientConfig, LoginCredentials, LoginError, LoginResponse, PortalId, PortalSession};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// One request as seen by a mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub portal: String,
    pub content_type: Option<String>,
    pub body: Value,
}

pub type RequestLog = Arc<Mutex<Vec<RecordedRequest>>>;

/// A mock backend listening on an ephemeral local port.
pub struct MockServer {
    pub base_url: String,
    pub requests: RequestLog,
}

impl MockServer {
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            backend_url: Some(self.base_url.clone()),
            ..ClientConfig::default()
        }
    }

    pub fn backend(&self) -> HttpLoginBackend {
        HttpLoginBackend::new(&self.config())
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Demo credential check: username `{portal}`, password `{portal}123`.
async fn demo_login(
    State(log): State<RequestLog>,
    Path(portal): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    log.lock().unwrap().push(RecordedRequest {
        portal: portal.clone(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    if PortalId::from_key(&portal).is_none() {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not Found"})));
    }

    let expected_password = format!("{portal}123");
    if body["username"] == portal.as_str() && body["password"] == expected_password.as_str() {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": format!("{portal} login successful"),
                "role": portal,
            })),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        )
    }
}

/// Backend that accepts the demo credentials for every portal.
pub async fn spawn_demo_backend() -> MockServer {
    let requests = RequestLog::default();
    let router = Router::new()
        .route("/api/login/{portal}", post(demo_login))
        .with_state(requests.clone());
    MockServer {
        base_url: serve(router).await,
        requests,
    }
}

/// Backend that answers every login with a fixed status and raw body.
pub async fn spawn_fixed_backend(status: StatusCode, body: &'static str) -> MockServer {
    let router = Router::new().route(
        "/api/login/{portal}",
        post(move || async move { (status, body) }),
    );
    MockServer {
        base_url: serve(router).await,
        requests: RequestLog::default(),
    }
}

/// A URL where nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn session_in_login(portal: PortalId) -> Rc<RefCell<PortalSession>> {
    let session = Rc::new(RefCell::new(PortalSession::new()));
    assert!(session.borrow_mut().select_portal(portal));
    session
}

pub fn fill(session: &Rc<RefCell<PortalSession>>, username: &str, password: &str) {
    let mut s = session.borrow_mut();
    s.set_username(username);
    s.set_password(password);
}

pub fn accepted() -> Result<LoginResponse, LoginError> {
    Ok(LoginResponse {
        success: true,
        message: None,
        role: None,
    })
}

/// In-memory backend returning a fixed outcome and counting calls.
pub struct ScriptedBackend {
    outcome: Result<LoginResponse, LoginError>,
    pub calls: RefCell<Vec<(PortalId, LoginCredentials)>>,
}

impl ScriptedBackend {
    pub fn new(outcome: Result<LoginResponse, LoginError>) -> Self {
        Self {
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl LoginBackend for ScriptedBackend {
    async fn login(
        &self,
        portal: PortalId,
        credentials: &LoginCredentials,
    ) -> Result<LoginResponse, LoginError> {
        self.calls.borrow_mut().push((portal, credentials.clone()));
        self.outcome.clone()
    }
}

/// Backend that holds every request until released, so tests can inspect
/// the session while a login is in flight.
pub struct GatedBackend {
    outcome: Result<LoginResponse, LoginError>,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedBackend {
    pub fn new(outcome: Result<LoginResponse, LoginError>) -> Self {
        Self {
            outcome,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }
}

impl LoginBackend for GatedBackend {
    async fn login(
        &self,
        _portal: PortalId,
        _credentials: &LoginCredentials,
    ) -> Result<LoginResponse, LoginError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.outcome.clone()
    }
}
