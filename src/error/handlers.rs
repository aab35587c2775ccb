//! Error handlers
//!
//! Reporting helpers used by the demo binary.

use log::error;

use crate::error::types::ScpiError;

/// Log an error that ended a run.
pub fn handle_error(err: &ScpiError) {
    if err.is_connection_fault() {
        error!("Instrument unreachable: {}", err);
    } else {
        error!("SCPI session failed: {}", err);
    }
}

/// Process exit code for an error that ended a run.
pub fn error_to_exit_code(err: &ScpiError) -> u8 {
    match err {
        ScpiError::Connect { .. } | ScpiError::ConnectTimeout { .. } => 2,
        ScpiError::Config(_) => 3,
        ScpiError::ConnectionClosed(_) | ScpiError::NotConnected | ScpiError::Io(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;

    #[test]
    fn test_connection_faults_map_to_exit_code_two() {
        let refused = ScpiError::Connect {
            addr: "127.0.0.1:5025".to_string(),
            source: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        let timed_out = ScpiError::ConnectTimeout {
            addr: "127.0.0.1:5025".to_string(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(error_to_exit_code(&refused), 2);
        assert_eq!(error_to_exit_code(&timed_out), 2);
        assert!(refused.is_connection_fault());
    }

    #[test]
    fn test_session_errors_are_not_connection_faults() {
        let err = ScpiError::ConnectionClosed("127.0.0.1:5025".to_string());
        assert!(!err.is_connection_fault());
        assert_eq!(error_to_exit_code(&err), 1);
        assert_eq!(error_to_exit_code(&ScpiError::NotConnected), 1);
    }
}
