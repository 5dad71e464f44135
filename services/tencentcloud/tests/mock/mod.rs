use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, Uri};
use qcloud_core::{Error, HttpSend, Observe, Result};
use qcloud_tencentcloud::Params;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("body must be json")
    }
}

/// HttpSend that records every request and replies with a canned response.
#[derive(Debug, Clone)]
pub struct MockHttpSend {
    reply: Reply,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

#[derive(Debug, Clone)]
enum Reply {
    Response(StatusCode, &'static str),
    Transport(&'static str),
}

impl MockHttpSend {
    pub fn respond(status: StatusCode, body: &'static str) -> Self {
        Self {
            reply: Reply::Response(status, body),
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn fail(message: &'static str) -> Self {
        Self {
            reply: Reply::Transport(message),
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            Reply::Response(status, body) => Ok(http::Response::builder()
                .status(*status)
                .header("content-type", "application/json")
                .body(Bytes::from(*body))?),
            Reply::Transport(message) => Err(Error::transport(*message)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Request {
        service: String,
        action: String,
        params: Params,
        profile: String,
    },
    Response {
        action: String,
        status: u16,
        body: Params,
    },
    Error {
        action: String,
        message: String,
    },
}

/// Observe that records every event it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl Observe for RecordingObserver {
    fn on_request(&self, service: &str, action: &str, params: &Params, profile: &str) {
        self.events.lock().unwrap().push(Event::Request {
            service: service.to_string(),
            action: action.to_string(),
            params: params.clone(),
            profile: profile.to_string(),
        });
    }

    fn on_response(
        &self,
        _service: &str,
        action: &str,
        body: &Params,
        status: StatusCode,
        _profile: &str,
    ) {
        self.events.lock().unwrap().push(Event::Response {
            action: action.to_string(),
            status: status.as_u16(),
            body: body.clone(),
        });
    }

    fn on_error(&self, _service: &str, action: &str, err: &Error, _profile: &str) {
        self.events.lock().unwrap().push(Event::Error {
            action: action.to_string(),
            message: err.to_string(),
        });
    }
}

/// Observe that panics on every event.
#[derive(Debug, Clone, Copy)]
pub struct PanickingObserver;

impl Observe for PanickingObserver {
    fn on_request(&self, _: &str, _: &str, _: &Params, _: &str) {
        panic!("observer failure on request");
    }

    fn on_response(&self, _: &str, _: &str, _: &Params, _: StatusCode, _: &str) {
        panic!("observer failure on response");
    }

    fn on_error(&self, _: &str, _: &str, _: &Error, _: &str) {
        panic!("observer failure on error");
    }
}
