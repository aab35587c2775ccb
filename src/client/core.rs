//! SCPI client core
//!
//! `ScpiClient` and its send/query/execute operations.

use log::{debug, error, info, warn};
use tokio::time;

use crate::client::connection::{Connection, LineRead};
use crate::config::ClientConfig;
use crate::error::{ScpiError, ScpiResult};
use crate::protocol::{CommandKind, classify, display_text, frame_command};

/// A SCPI client bound to one instrument connection.
///
/// Commands run strictly one after another: each call writes its line and,
/// for queries, waits for the reply before returning. The connection is
/// released by [`ScpiClient::close`] or, failing that, when the client is
/// dropped.
pub struct ScpiClient {
    config: ClientConfig,
    connection: Option<Connection>,
}

impl ScpiClient {
    /// Connects to the instrument described by `config`.
    ///
    /// Fails if the socket is refused, unreachable or not established within
    /// the configured timeout. There is no retry.
    pub async fn connect(config: &ClientConfig) -> ScpiResult<Self> {
        config.validate()?;

        let connection = Connection::open(&config.socket_addr(), config.timeout()).await?;

        Ok(Self {
            config: config.clone(),
            connection: Some(connection),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Sends a command that expects no reply, then waits the settle delay.
    pub async fn send(&mut self, command: &str) -> ScpiResult<()> {
        self.write_command(command).await?;

        let settle = self.config.settle_delay();
        if !settle.is_zero() {
            time::sleep(settle).await;
        }

        Ok(())
    }

    /// Sends a command and waits for one reply line.
    ///
    /// Returns the reply including its terminator. An empty string means the
    /// instrument did not answer within the timeout; the configured cooldown
    /// has already elapsed when this returns.
    pub async fn query(&mut self, command: &str) -> ScpiResult<String> {
        self.write_command(command).await?;

        let timeout = self.config.timeout();
        let read = self.connection_mut()?.read_line(timeout).await?;

        match read {
            LineRead::Line(bytes) => {
                let reply = String::from_utf8_lossy(&bytes).into_owned();
                info!("<< Rcv  : {}", display_text(&reply));
                Ok(reply)
            }
            LineRead::TimedOut => {
                warn!(
                    "<< Timeout : no reply to '{}' within {:?}",
                    display_text(command),
                    timeout
                );
                if let Some(cooldown) = self.config.timeout_cooldown() {
                    debug!("Cooling down for {:?} after timeout", cooldown);
                    time::sleep(cooldown).await;
                }
                Ok(String::new())
            }
            LineRead::Closed => {
                let peer = self.connection_mut()?.peer().to_string();
                warn!("<< Closed : instrument at {} ended the session", peer);
                self.connection = None;
                Err(ScpiError::ConnectionClosed(peer))
            }
        }
    }

    /// Runs a command, dispatching on whether its text contains `?`.
    ///
    /// Returns `None` for plain commands and the reply (possibly empty) for
    /// queries. Prefer [`ScpiClient::send`] or [`ScpiClient::query`] when the
    /// command kind is known.
    pub async fn execute(&mut self, command: &str) -> ScpiResult<Option<String>> {
        match classify(command) {
            CommandKind::Write => {
                self.send(command).await?;
                Ok(None)
            }
            CommandKind::Query => self.query(command).await.map(Some),
        }
    }

    /// Closes the connection. Calling it again is a no-op.
    pub async fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.shutdown().await;
        }
    }

    async fn write_command(&mut self, command: &str) -> ScpiResult<()> {
        let frame = frame_command(command);
        let connection = self.connection_mut()?;

        info!(">> Send : {}", display_text(command));
        let written = connection.write_frame(&frame).await;

        if let Err(ScpiError::Io(e)) = &written {
            error!("Write to {} failed: {}", connection.peer(), e);
            self.connection = None;
        }

        written
    }

    fn connection_mut(&mut self) -> ScpiResult<&mut Connection> {
        self.connection.as_mut().ok_or(ScpiError::NotConnected)
    }
}

impl Drop for ScpiClient {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            debug!("Releasing connection to {} on drop", connection.peer());
        }
    }
}
