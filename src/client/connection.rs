//! Module `connection`
//!
//! The TCP stream to the instrument, split into a buffered read half for
//! reply lines and a write half for command lines.

use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::{self, Duration};

use crate::error::{ScpiError, ScpiResult};
use crate::protocol::LINE_TERMINATOR;

/// Outcome of waiting for one reply line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineRead {
    /// Bytes read up to and including the terminator, or whatever arrived
    /// before the timeout or end of stream cut the line short.
    Line(Vec<u8>),
    /// Nothing arrived before the timeout.
    TimedOut,
    /// The peer closed the stream without sending anything.
    Closed,
}

/// An established connection to `peer`.
pub struct Connection {
    peer: String,
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl Connection {
    /// Opens a TCP connection to `addr`, giving up after `timeout`.
    pub async fn open(addr: &str, timeout: Duration) -> ScpiResult<Self> {
        debug!("Connecting to {} (timeout {:?})", addr, timeout);

        let stream = match time::timeout(timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(ScpiError::Connect {
                    addr: addr.to_string(),
                    source,
                });
            }
            Err(_) => {
                return Err(ScpiError::ConnectTimeout {
                    addr: addr.to_string(),
                    timeout,
                });
            }
        };

        stream.set_nodelay(true)?;

        info!("Connected to instrument at {}", addr);

        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            peer: addr.to_string(),
            reader: BufReader::new(read_half),
            writer: write_half,
        })
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Writes a complete frame and flushes it.
    pub async fn write_frame(&mut self, frame: &[u8]) -> ScpiResult<()> {
        self.writer.write_all(frame).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Reads until the line terminator, bounded by `timeout`.
    pub async fn read_line(&mut self, timeout: Duration) -> ScpiResult<LineRead> {
        let mut line = Vec::new();

        // read_until appends consumed bytes to `line` before yielding, so a
        // partial line survives the timeout cancelling the read.
        let read = time::timeout(timeout, self.reader.read_until(LINE_TERMINATOR, &mut line)).await;

        match read {
            Ok(Ok(0)) if line.is_empty() => Ok(LineRead::Closed),
            Ok(Ok(_)) => Ok(LineRead::Line(line)),
            Ok(Err(e)) => Err(ScpiError::Io(e)),
            Err(_) if line.is_empty() => Ok(LineRead::TimedOut),
            Err(_) => Ok(LineRead::Line(line)),
        }
    }

    /// Half-closes the write side so the instrument sees a clean FIN.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.writer.shutdown().await {
            debug!("Shutdown of connection to {} failed: {}", self.peer, e);
        }
        info!("Connection to {} closed", self.peer);
    }
}
