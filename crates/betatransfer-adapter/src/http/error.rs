/*
[INPUT]:  Error sources (transport, JSON decoding, schema checks, caller input)
[OUTPUT]: Structured error types grouped into transport/protocol/usage kinds
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Betatransfer adapter
#[derive(Error, Debug)]
pub enum BetatransferError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway answered with a non-2xx status
    #[error("Gateway returned HTTP {code}: {message}")]
    Status { code: u16, message: String },

    /// Response body is not JSON
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Well-formed JSON that violates the expected schema
    #[error("Protocol error in {operation}: {message}")]
    Protocol {
        operation: &'static str,
        message: String,
    },

    /// Caller input rejected before any request was made
    #[error("Invalid input: {0}")]
    Usage(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of [`BetatransferError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Protocol,
    Usage,
    Config,
}

impl BetatransferError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BetatransferError::Http(_)
            | BetatransferError::Status { .. }
            | BetatransferError::InvalidJson(_) => ErrorKind::Transport,
            BetatransferError::Protocol { .. } => ErrorKind::Protocol,
            BetatransferError::Usage(_) => ErrorKind::Usage,
            BetatransferError::UrlParse(_) | BetatransferError::Config(_) => ErrorKind::Config,
        }
    }

    /// Network failure, non-2xx status, or non-JSON body
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Response decoded but did not match the expected schema
    pub fn is_protocol(&self) -> bool {
        self.kind() == ErrorKind::Protocol
    }

    pub fn is_usage(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }

    /// Create a status error from a response code and body
    pub fn status_error(status: StatusCode, message: impl Into<String>) -> Self {
        BetatransferError::Status {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn protocol(operation: &'static str, message: impl Into<String>) -> Self {
        BetatransferError::Protocol {
            operation,
            message: message.into(),
        }
    }
}

/// Result type alias for Betatransfer operations
pub type Result<T> = std::result::Result<T, BetatransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let status = BetatransferError::status_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(status.is_transport());
        assert!(!status.is_protocol());

        let protocol = BetatransferError::protocol("account_info", "missing field `account`");
        assert!(protocol.is_protocol());
        assert_eq!(protocol.kind(), ErrorKind::Protocol);

        let usage = BetatransferError::Usage("bad status".to_string());
        assert!(usage.is_usage());
        assert!(!usage.is_transport());

        let invalid_json = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(BetatransferError::InvalidJson(invalid_json).is_transport());
    }

    #[test]
    fn test_status_error_creation() {
        let err = BetatransferError::status_error(StatusCode::UNAUTHORIZED, "bad sign");
        match err {
            BetatransferError::Status { code, ref message } => {
                assert_eq!(code, 401);
                assert_eq!(message, "bad sign");
            }
            _ => panic!("Expected Status error variant"),
        }
        assert_eq!(err.to_string(), "Gateway returned HTTP 401: bad sign");
    }

    #[test]
    fn test_protocol_error_display() {
        let err = BetatransferError::protocol("history", "item 3: invalid decimal");
        assert_eq!(err.to_string(), "Protocol error in history: item 3: invalid decimal");
    }

    #[test]
    fn test_url_parse_is_config() {
        let err: BetatransferError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
