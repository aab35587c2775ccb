//! SCPI client
//!
//! Owns the single TCP connection to the instrument and runs one command at a
//! time over it.

pub mod connection;
pub mod core;

pub use connection::Connection;
pub use core::ScpiClient;
