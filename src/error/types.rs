//! Error types
//!
//! A refused or unreachable instrument is the only fault the client treats as
//! fatal at construction time. A query that times out is not an error at all;
//! it surfaces as an empty reply.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Convenience alias for results using the client error type.
pub type ScpiResult<T> = std::result::Result<T, ScpiError>;

#[derive(Debug, Error)]
pub enum ScpiError {
    /// The TCP connection could not be established.
    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The TCP connection was not established within the configured timeout.
    #[error("Timed out after {timeout:?} connecting to {addr}")]
    ConnectTimeout { addr: String, timeout: Duration },

    /// The instrument closed the session before a reply arrived.
    #[error("Connection closed by instrument at {0}")]
    ConnectionClosed(String),

    /// The client was used after `close()`.
    #[error("Client is not connected")]
    NotConnected,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ScpiError {
    /// Whether the error happened while opening the connection.
    pub fn is_connection_fault(&self) -> bool {
        matches!(
            self,
            ScpiError::Connect { .. } | ScpiError::ConnectTimeout { .. }
        )
    }
}
