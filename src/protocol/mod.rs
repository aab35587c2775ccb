//! SCPI line protocol
//!
//! Handles framing of command lines for the wire, display cleanup for logs,
//! and the query/write classification used by `execute`.

pub mod commands;
pub mod framing;

pub use commands::{CommandKind, classify};
pub use framing::{LINE_TERMINATOR, display_text, frame_command};
