use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::profile::EndpointProfile;
use super::redact;

pub const DEFAULT_BASE_URL: &str = "https://api.reg.ru/api/regru2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const TXT: &str = "TXT";

fn default_record_type() -> String {
    TXT.to_string()
}

/// A resource record as the zone API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordEntry")]
pub struct Record {
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub record_type: String,
}

/// Wire shape of a list entry. Field names vary between API flavours and some
/// responses carry more than one spelling, so the first one present wins.
#[derive(Deserialize)]
struct RecordEntry {
    name: Option<String>,
    subname: Option<String>,
    subdomain: Option<String>,
    value: Option<String>,
    content: Option<String>,
    text: Option<String>,
    txt: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    rectype: Option<String>,
    record_type: Option<String>,
}

impl TryFrom<RecordEntry> for Record {
    type Error = String;

    fn try_from(entry: RecordEntry) -> Result<Self, Self::Error> {
        let name = entry
            .name
            .or(entry.subname)
            .or(entry.subdomain)
            .ok_or("missing field `name`")?;
        let value = entry
            .value
            .or(entry.content)
            .or(entry.text)
            .or(entry.txt)
            .ok_or("missing field `value`")?;
        let record_type = entry
            .kind
            .or(entry.rectype)
            .or(entry.record_type)
            .unwrap_or_else(default_record_type);

        Ok(Self {
            name,
            value,
            record_type,
        })
    }
}

impl Record {
    pub fn txt(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            record_type: default_record_type(),
        }
    }
}

/// Connection settings for one zone. Fixed once the client is built.
#[derive(Clone)]
pub struct ClientConfig {
    pub username: String,
    pub password: String,
    pub zone: String,
    pub profile: EndpointProfile,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            zone: zone.into(),
            profile: EndpointProfile::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_profile(mut self, profile: EndpointProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn secrets(&self) -> [&str; 2] {
        [self.password.as_str(), self.username.as_str()]
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &redact::mask())
            .field("password", &redact::mask())
            .field("zone", &self.zone)
            .field("profile", &self.profile)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// JSON body of a single call. Built, serialized and dropped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Payload(Map<String, Value>);

const CREDENTIAL_FIELDS: [&str; 2] = ["username", "password"];

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn to_body(&self) -> Vec<u8> {
        Value::Object(self.0.clone()).to_string().into_bytes()
    }

    /// The payload as it may be logged: credential fields masked.
    pub fn redacted(&self) -> String {
        let mut masked = self.0.clone();
        for field in CREDENTIAL_FIELDS {
            if let Some(value) = masked.get_mut(field) {
                *value = Value::String(redact::mask().to_string());
            }
        }
        Value::Object(masked).to_string()
    }
}
