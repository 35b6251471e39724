pub mod client;
pub mod error;
pub mod models;
pub mod profile;
pub mod redact;
pub mod regru;
pub mod response;
pub mod transport;

pub use client::DnsZoneApi;
pub use error::{ClientError, ErrorKind, TransportError};
pub use models::{ClientConfig, Payload, Record};
pub use profile::{AuthStyle, EndpointProfile, Operation, ProfileKind};
pub use regru::RegruClient;
pub use transport::{BasicAuth, HttpTransport, OutboundRequest, RawResponse, Transport};
