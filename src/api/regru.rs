use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, trace};

use super::client::DnsZoneApi;
use super::error::{ClientError, TransportError};
use super::models::{ClientConfig, Payload, Record, TXT};
use super::profile::{AuthStyle, Operation};
use super::redact;
use super::response::ApiResponse;
use super::transport::{BasicAuth, HttpTransport, OutboundRequest, Transport};

/// Client for the reg.ru `regru2` zone API, bound to a single zone.
pub struct RegruClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

#[async_trait]
impl DnsZoneApi for RegruClient {
    async fn list_records(&self) -> Result<Vec<Record>, ClientError> {
        info!("Listing records for zone {}", self.config.zone);

        let records = self
            .call(Operation::ListRecords, Payload::new())
            .await?
            .into_records()?;

        debug!("Zone {} has {} record(s)", self.config.zone, records.len());
        Ok(records)
    }

    async fn create_txt_record(&self, name: &str, value: &str) -> Result<(), ClientError> {
        info!("Adding TXT record {} to zone {}", name, self.config.zone);

        let payload = self.record_payload(Operation::AddTxt, name, value);
        self.call(Operation::AddTxt, payload).await?;
        Ok(())
    }

    async fn delete_txt_record(&self, name: &str, value: &str) -> Result<(), ClientError> {
        info!("Removing TXT record {} from zone {}", name, self.config.zone);

        let payload = self.record_payload(Operation::RemoveTxt, name, value);
        self.call(Operation::RemoveTxt, payload).await?;
        Ok(())
    }
}

impl RegruClient {
    /// Client with the default profile, endpoint and timeout. Does no I/O.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self::from_config(ClientConfig::new(username, password, zone))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn record_payload(&self, operation: Operation, name: &str, value: &str) -> Payload {
        let profile = &self.config.profile;
        let mut payload = Payload::new();
        payload.insert(profile.name_field, name);
        payload.insert(profile.value_field(operation), value);
        if operation == Operation::RemoveTxt {
            if let Some(type_field) = profile.remove_type_field {
                payload.insert(type_field, TXT);
            }
        }
        payload
    }

    /// Adds the zone, format markers and (for in-body auth) credentials, then
    /// builds the request for `operation`.
    pub fn build_request(&self, operation: Operation, mut payload: Payload) -> OutboundRequest {
        let config = &self.config;
        let profile = &config.profile;

        payload.insert(profile.zone_field, config.zone.as_str());
        payload.insert("input_format", "json");
        payload.insert("output_format", "json");

        let basic_auth = match profile.auth {
            AuthStyle::Header => Some(BasicAuth {
                username: config.username.clone(),
                password: config.password.clone(),
            }),
            AuthStyle::Body => {
                payload.insert("username", config.username.as_str());
                payload.insert("password", config.password.as_str());
                None
            }
        };

        let url = format!("{}/{}", config.base_url, profile.command(operation));
        debug!(
            "POST {} payload={}",
            url,
            redact::scrub(&payload.redacted(), &config.secrets())
        );

        OutboundRequest {
            url,
            body: payload.to_body(),
            basic_auth,
            timeout: config.timeout,
        }
    }

    async fn call(
        &self,
        operation: Operation,
        payload: Payload,
    ) -> Result<ApiResponse, ClientError> {
        let command = self.config.profile.command(operation);
        let secrets = self.config.secrets();
        let request = self.build_request(operation, payload);

        let timeout = self.config.timeout;
        let response = match tokio::time::timeout(timeout, self.transport.post(request)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(timeout)),
        }
        .map_err(|source| ClientError::Transport { command, source })?;

        trace!(
            "Response from {} (HTTP {}): {}",
            command,
            response.status,
            redact::scrub(&String::from_utf8_lossy(&response.body), &secrets)
        );

        if !response.is_success() {
            return Err(ClientError::Transport {
                command,
                source: TransportError::Status {
                    status: response.status,
                    snippet: redact::snippet(&response.body, &secrets),
                },
            });
        }

        ApiResponse::interpret(command, &response.body, &secrets)
    }
}
