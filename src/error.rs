//! Error types for dbsql-bridge.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for dbsql-bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Configuration errors (missing warehouse id, invalid host URL, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors while talking to the warehouse (connectivity, auth,
    /// malformed responses, polling exhaustion).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Statement-level errors reported by the warehouse service.
    #[error("Statement error: {0}")]
    Statement(String),

    /// Protocol errors on the MCP boundary (malformed requests, bad params).
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a transport error with the given message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Creates a statement error with the given message.
    pub fn statement(msg: impl Into<String>) -> Self {
        Self::Statement(msg.into())
    }

    /// Creates a protocol error with the given message.
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Transport(_) => "Transport Error",
            Self::Statement(_) => "Statement Error",
            Self::Protocol(_) => "Protocol Error",
            Self::Internal(_) => "Internal Error",
        }
    }

    /// Returns the bare message without the category prefix.
    ///
    /// Tool boundaries fold errors into plain text and add their own framing,
    /// so the prefixed `Display` form would double up.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(m)
            | Self::Transport(m)
            | Self::Statement(m)
            | Self::Protocol(m)
            | Self::Internal(m) => m,
        }
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// Result type alias using BridgeError.
pub type Result<T> = std::result::Result<T, BridgeError>;
