use std::sync::{Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use log::{LevelFilter, Log, Metadata};
use serde_json::{json, Value};

use crate::api::error::TransportError;
use crate::api::profile::{AuthStyle, EndpointProfile};
use crate::api::{ClientConfig, OutboundRequest, RawResponse, Record, Transport};

pub const USERNAME: &str = "acme-bot";
pub const PASSWORD: &str = "s3cr3t-Pa55word!";
pub const ZONE: &str = "example.com";

pub fn test_config(profile: EndpointProfile) -> ClientConfig {
    ClientConfig::new(USERNAME, PASSWORD, ZONE)
        .with_profile(profile)
        .with_base_url("https://stub.invalid/api/regru2")
}

// Captures every log line emitted while the test binary runs.

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        LINES
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
}

pub fn captured_logs() -> String {
    LINES.lock().unwrap().join("\n")
}

/// In-memory zone that speaks the same command set as the real API.
pub struct StubZone {
    profile: EndpointProfile,
    records: Mutex<Vec<Record>>,
    requests: Mutex<Vec<OutboundRequest>>,
}

impl StubZone {
    pub fn new(profile: EndpointProfile) -> Self {
        Self {
            profile,
            records: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<OutboundRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn authorized(&self, request: &OutboundRequest, body: &Value) -> bool {
        match self.profile.auth {
            AuthStyle::Header => request
                .basic_auth
                .as_ref()
                .is_some_and(|auth| auth.username == USERNAME && auth.password == PASSWORD),
            AuthStyle::Body => {
                body["username"] == USERNAME && body["password"] == PASSWORD
            }
        }
    }

    fn handle(&self, request: &OutboundRequest) -> Value {
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        if !self.authorized(request, &body) {
            return json!({"result": "error", "error_code": "NO_AUTH", "error_text": "No authorization mechanism selected"});
        }
        if body[self.profile.zone_field] != ZONE {
            return json!({"result": "error", "error_code": "DOMAIN_NOT_FOUND", "error_text": "Domain not found"});
        }

        let field = |name: &str| body[name].as_str().unwrap_or_default().to_string();
        let mut records = self.records.lock().unwrap();

        if request.url.ends_with(self.profile.list_command) {
            let answer = records.clone();
            json!({"result": "success", "answer": answer})
        } else if request.url.ends_with(self.profile.add_command) {
            records.push(Record::txt(
                field(self.profile.name_field),
                field(self.profile.add_value_field),
            ));
            json!({"result": "success"})
        } else if request.url.ends_with(self.profile.remove_command) {
            let target = Record::txt(
                field(self.profile.name_field),
                field(self.profile.remove_value_field),
            );
            let before = records.len();
            records.retain(|record| *record != target);
            if records.len() == before {
                json!({"result": "error", "error_code": "RECORD_NOT_FOUND", "error_text": "Record not found"})
            } else {
                json!({"result": "success"})
            }
        } else {
            json!({"result": "error", "error_code": "UNKNOWN_COMMAND", "error_text": "Unknown command"})
        }
    }
}

#[async_trait]
impl Transport for StubZone {
    async fn post(&self, request: OutboundRequest) -> Result<RawResponse, TransportError> {
        let answer = self.handle(&request);
        self.requests.lock().unwrap().push(request);
        Ok(RawResponse {
            status: 200,
            body: answer.to_string().into_bytes(),
        })
    }
}

/// Always answers with the same status and body.
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

#[async_trait]
impl Transport for Canned {
    async fn post(&self, _request: OutboundRequest) -> Result<RawResponse, TransportError> {
        Ok(RawResponse {
            status: self.status,
            body: self.body.clone().into_bytes(),
        })
    }
}

/// Never answers.
pub struct Silent;

#[async_trait]
impl Transport for Silent {
    async fn post(&self, _request: OutboundRequest) -> Result<RawResponse, TransportError> {
        std::future::pending::<()>().await;
        Err(TransportError::Timeout(Duration::ZERO))
    }
}
