//! Test harness for endpoint tests.
//!
//! Spins up a stub Etsy API on a random local port and drives the real
//! router (with the real `EtsyClient`) through `tower::ServiceExt::oneshot`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use etsy_client::EtsyClient;
use grader_core::kernel::{EtsyAdapter, MockSecrets, ServerDeps};
use grader_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

/// Canned answer for one stub endpoint
#[derive(Debug, Clone)]
pub struct StubReply {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl StubReply {
    pub fn json(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    /// Non-success answer with a plain-text body
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

impl IntoResponse for StubReply {
    fn into_response(self) -> Response {
        (self.status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

/// A request the stub received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
}

struct StubState {
    shops: StubReply,
    listings: StubReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubState {
    fn record(&self, uri: &Uri, headers: &HeaderMap, query: HashMap<String, String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: uri.path().to_string(),
            query,
            api_key: headers
                .get("x-api-key")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
        });
    }
}

async fn shops_reply(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> StubReply {
    state.record(&uri, &headers, query);
    state.shops.clone()
}

async fn listings_reply(
    State(state): State<Arc<StubState>>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> StubReply {
    state.record(&uri, &headers, query);
    state.listings.clone()
}

/// Stub Etsy API serving fixed replies
pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

impl StubUpstream {
    pub async fn spawn(shops: StubReply, listings: StubReply) -> Self {
        let state = Arc::new(StubState {
            shops,
            listings,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/shops", get(shops_reply))
            .route("/shops/:shop_id/listings/active", get(listings_reply))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub upstream");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub upstream crashed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Get all requests in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// The application router wired to an upstream base URL
pub struct TestApp {
    router: Router,
    secrets: Arc<MockSecrets>,
    api_key_var: String,
}

impl TestApp {
    /// App looking its API key up under `api_key_var`, initially unset.
    pub fn new(upstream_base_url: &str, api_key_var: &str) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let client = EtsyClient::with_base_url(upstream_base_url);
        let secrets = Arc::new(MockSecrets::new());
        let deps = ServerDeps::new(
            Arc::new(EtsyAdapter::new(client)),
            secrets.clone(),
            api_key_var,
        );
        Self {
            router: build_app(deps),
            secrets,
            api_key_var: api_key_var.to_string(),
        }
    }

    /// Store the API key the app reads on its next request
    pub fn set_api_key(&self, key: &str) {
        self.secrets.set(&self.api_key_var, key);
    }

    pub async fn get_raw(&self, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, headers, body.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = self.get_raw(uri).await;
        let json = serde_json::from_slice(&body).expect("JSON body");
        (status, json)
    }
}
