//! Local HTTP stub for client tests: canned JSON per route, every request recorded.

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, &'static str>>,
    log: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubServer {
    pub base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    /// `routes` maps `"GET /path"` to the JSON body served for it; anything else is a 404
    pub async fn start(routes: &[(&str, &'static str)]) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            routes: Arc::new(
                routes
                    .iter()
                    .map(|(route, body)| (route.to_string(), *body))
                    .collect(),
            ),
            log: log.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            log,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    /// The single recorded request for a path; panics when there is not exactly one
    pub fn request_to(&self, path: &str) -> Recorded {
        let matching: Vec<Recorded> = self
            .requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect();
        assert_eq!(matching.len(), 1, "requests to {}: {:?}", path, matching);
        matching.into_iter().next().unwrap()
    }
}

async fn respond(State(state): State<StubState>, request: Request) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request
        .uri()
        .query()
        .map(|q| {
            reqwest::Url::parse(&format!("http://stub/?{}", q))
                .unwrap()
                .query_pairs()
                .into_owned()
                .collect()
        })
        .unwrap_or_default();
    let headers = request.headers().clone();
    let body = to_bytes(request.into_body(), usize::MAX).await.unwrap().to_vec();

    let route = format!("{} {}", method, path);
    state.log.lock().unwrap().push(Recorded {
        method,
        path,
        query,
        headers,
        body,
    });

    match state.routes.get(&route) {
        Some(json) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            Body::from(*json),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
