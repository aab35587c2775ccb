//! Module `commands`
//!
//! Classifies SCPI command text. The client never parses commands beyond this.

/// Marker that turns a SCPI command into a query.
pub const QUERY_MARKER: char = '?';

/// How a command line is expected to behave on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Fire-and-forget: no reply line is expected.
    Write,
    /// Exactly one reply line is expected.
    Query,
}

/// Classifies a raw command by the presence of the query marker.
///
/// Only `ScpiClient::execute` relies on this; `send` and `query` are explicit.
pub fn classify(command: &str) -> CommandKind {
    if command.contains(QUERY_MARKER) {
        CommandKind::Query
    } else {
        CommandKind::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_queries() {
        assert_eq!(classify("*IDN?"), CommandKind::Query);
        assert_eq!(classify("*IDN ?"), CommandKind::Query);
        assert_eq!(classify(":FILE:NAME ?"), CommandKind::Query);
        assert_eq!(classify("RDC?"), CommandKind::Query);
    }

    #[test]
    fn test_classify_writes() {
        assert_eq!(classify("*REM"), CommandKind::Write);
        assert_eq!(classify("REC ON"), CommandKind::Write);
        assert_eq!(classify("STORE /internalDisk/my_config.acq_cfg"), CommandKind::Write);
        assert_eq!(classify(""), CommandKind::Write);
    }
}
