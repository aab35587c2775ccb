//! Line framing
//!
//! Every command leaves the client as ASCII text followed by exactly one
//! line feed. Replies are read up to and including the next line feed.

/// Terminator appended to every command and expected at the end of every reply.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Builds the wire bytes for a command.
///
/// Trailing CR/LF supplied by the caller are dropped so the line always ends
/// with a single `\n`. Everything else is sent verbatim.
pub fn frame_command(command: &str) -> Vec<u8> {
    let body = command.trim_end_matches(['\r', '\n']);
    let mut frame = Vec::with_capacity(body.len() + 1);
    frame.extend_from_slice(body.as_bytes());
    frame.push(LINE_TERMINATOR);
    frame
}

/// Strips line terminators so a command or reply prints on one log line.
pub fn display_text(text: &str) -> String {
    text.replace(['\n', '\r'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_appends_single_newline() {
        assert_eq!(frame_command("*REM"), b"*REM\n".to_vec());
        assert_eq!(frame_command("REC ON"), b"REC ON\n".to_vec());
        assert_eq!(frame_command(""), b"\n".to_vec());
    }

    #[test]
    fn test_frame_collapses_caller_terminators() {
        assert_eq!(frame_command("*IDN?\n"), b"*IDN?\n".to_vec());
        assert_eq!(frame_command("*IDN?\r\n"), b"*IDN?\n".to_vec());
        assert_eq!(frame_command("*IDN?\n\n"), b"*IDN?\n".to_vec());
    }

    #[test]
    fn test_frame_keeps_leading_and_inner_text() {
        assert_eq!(
            frame_command("  :FILE:NAME My_record_file"),
            b"  :FILE:NAME My_record_file\n".to_vec()
        );
    }

    #[test]
    fn test_display_strips_terminators() {
        assert_eq!(display_text("SEFRAM,DAS1800,0,2.0.2\r\n"), "SEFRAM,DAS1800,0,2.0.2");
        assert_eq!(display_text("*REM\n"), "*REM");
        assert_eq!(display_text("a\rb\nc"), "abc");
    }
}
