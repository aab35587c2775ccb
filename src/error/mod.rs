//! Error handling
//!
//! Defines the error type shared by the client, the configuration loader
//! and the demo sequence runner.

pub mod handlers;
pub mod types;

pub use types::*;
