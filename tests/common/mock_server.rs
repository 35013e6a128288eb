use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration as StdDuration;
use tiny_http::{Header, Response, Server};

#[derive(Debug, Clone)]
pub struct MockHttpResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl MockHttpResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: Some(body.to_string()),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl CapturedRequest {
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is json")
    }
}

/// Serves `expected` requests, answering each by `"METHOD /path"` lookup.
/// Unmatched routes get a 404 with an `error` body.
pub fn spawn_route_server(
    routes: Vec<(&str, MockHttpResponse)>,
    expected: usize,
) -> (String, Receiver<CapturedRequest>, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").expect("mock server");
    let base_url = format!("http://{}", server.server_addr());
    let routes: HashMap<String, MockHttpResponse> = routes
        .into_iter()
        .map(|(route, response)| (route.to_string(), response))
        .collect();
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        for _ in 0..expected {
            let mut request = match server.recv_timeout(StdDuration::from_secs(8)) {
                Ok(Some(request)) => request,
                Ok(None) => break,
                Err(_) => break,
            };

            let parsed =
                Url::parse(&format!("http://localhost{}", request.url())).expect("request url");
            let header = |name: &'static str| {
                request
                    .headers()
                    .iter()
                    .find(|header| header.field.equiv(name))
                    .map(|header| header.value.as_str().to_string())
            };
            let authorization = header("Authorization");
            let content_type = header("Content-Type");
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);

            let captured = CapturedRequest {
                method: request.method().to_string().to_uppercase(),
                path: parsed.path().to_string(),
                params: parsed
                    .query_pairs()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
                authorization,
                content_type,
                body,
            };
            let route = format!("{} {}", captured.method, captured.path);
            let _ = tx.send(captured);

            let response_spec = routes.get(&route).cloned().unwrap_or_else(|| {
                MockHttpResponse::json(404, serde_json::json!({ "error": "route not mocked" }))
            });
            let mut response = match response_spec.body {
                Some(body) => {
                    let mut response = Response::from_string(body);
                    response.add_header(
                        Header::from_bytes("Content-Type", "application/json")
                            .expect("content-type header"),
                    );
                    response
                }
                None => Response::from_string(String::new()),
            };
            response = response.with_status_code(response_spec.status);
            let _ = request.respond(response);
        }
    });

    (base_url, rx, handle)
}

pub fn join_with_timeout(handle: thread::JoinHandle<()>, timeout: StdDuration) {
    let start = std::time::Instant::now();
    while !handle.is_finished() {
        assert!(
            start.elapsed() < timeout,
            "mock server join timed out after {:?}",
            timeout
        );
        thread::sleep(StdDuration::from_millis(10));
    }
    handle.join().expect("mock server thread panicked");
}

pub fn drain(rx: &Receiver<CapturedRequest>) -> Vec<CapturedRequest> {
    rx.try_iter().collect()
}
