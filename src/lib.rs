//! DAS1800 SCPI client
//!
//! Drives a Sefram DAS1800 data-acquisition system over SCPI text lines on a
//! raw TCP socket (port 5025, or 23 for telnet framing).

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod sequence;
pub mod utils;

pub use crate::client::ScpiClient;
pub use crate::config::{AppConfig, ClientConfig, DemoConfig};
pub use crate::error::{ScpiError, ScpiResult};
