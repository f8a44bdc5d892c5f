use thiserror::Error;

use crate::models::Protocol;

/// Why a single subscription line could not be turned into a node.
///
/// Every variant is recoverable: the line is skipped and reported.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URI: {0}")]
    Url(#[from] url::ParseError),

    #[error("{protocol} link is missing {field}")]
    MissingField {
        protocol: Protocol,
        field: &'static str,
    },

    #[error("{protocol} link has an invalid port: {value}")]
    InvalidPort { protocol: Protocol, value: String },

    #[error("Malformed {protocol} link: {reason}")]
    Malformed {
        protocol: Protocol,
        reason: &'static str,
    },
}

impl DecodeError {
    pub(crate) fn missing(protocol: Protocol, field: &'static str) -> Self {
        DecodeError::MissingField { protocol, field }
    }

    pub(crate) fn malformed(protocol: Protocol, reason: &'static str) -> Self {
        DecodeError::Malformed { protocol, reason }
    }
}
