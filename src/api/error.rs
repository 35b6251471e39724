use std::time::Duration;

use thiserror::Error;

/// Failures that happen before a response body can be looked at.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected HTTP status {status}: {snippet}")]
    Status { status: u16, snippet: String },

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

/// Coarse classification of a [`ClientError`], for callers that only need to
/// branch on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Api,
    Contract,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection failure, timeout or non-2xx status.
    #[error("transport error calling {command}: {source}")]
    Transport {
        command: &'static str,
        #[source]
        source: TransportError,
    },

    /// The body was not a JSON object.
    #[error("failed to decode response from {command} ({len} bytes, starts with {snippet:?}): {source}")]
    Decode {
        command: &'static str,
        len: usize,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with something other than `result: "success"`.
    #[error("API error from {command}: {text}")]
    Api {
        command: &'static str,
        code: Option<String>,
        text: String,
    },

    /// The response did not have the shape a successful call promises.
    #[error("unexpected response shape from {command}: {reason}")]
    Contract {
        command: &'static str,
        reason: String,
    },
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport { .. } => ErrorKind::Transport,
            ClientError::Decode { .. } => ErrorKind::Decode,
            ClientError::Api { .. } => ErrorKind::Api,
            ClientError::Contract { .. } => ErrorKind::Contract,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ClientError::Transport {
                source: TransportError::Timeout(_),
                ..
            }
        )
    }
}
