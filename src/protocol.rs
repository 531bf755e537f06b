//! Wire protocol: press events out, LED commands in.
//!
//! Newline-delimited ASCII with no framing beyond the terminator. The
//! device emits one event; the host issues two commands. Anything else on
//! the wire is dropped silently.

/// Event bytes written once per accepted button press.
pub const PRESS_EVENT: &[u8] = b"PRESS\n";

/// A recognized host command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `ON`: drive the LED high.
    On,
    /// `OFF`: drive the LED low.
    Off,
}

impl Command {
    /// Decode one received line (without its newline terminator).
    ///
    /// The line is decoded as UTF-8 and trimmed of surrounding whitespace
    /// before an exact, case-sensitive match, so `ON\r` from CRLF hosts
    /// still parses. Decode failures and unrecognized text yield `None`.
    pub fn from_line(line: &[u8]) -> Option<Command> {
        match core::str::from_utf8(line).ok()?.trim() {
            "ON" => Some(Command::On),
            "OFF" => Some(Command::Off),
            _ => None,
        }
    }

    /// LED level this command requests.
    #[inline]
    pub fn led_on(self) -> bool {
        matches!(self, Command::On)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_commands() {
        assert_eq!(Command::from_line(b"ON"), Some(Command::On));
        assert_eq!(Command::from_line(b"OFF"), Some(Command::Off));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(Command::from_line(b"ON\r"), Some(Command::On));
        assert_eq!(Command::from_line(b"  OFF  "), Some(Command::Off));
        assert_eq!(Command::from_line(b"\tON"), Some(Command::On));
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        assert_eq!(Command::from_line(b"on"), None);
        assert_eq!(Command::from_line(b"On"), None);
        assert_eq!(Command::from_line(b"ONN"), None);
        assert_eq!(Command::from_line(b"ON OFF"), None);
    }

    #[test]
    fn test_malformed_input_dropped() {
        assert_eq!(Command::from_line(b""), None);
        assert_eq!(Command::from_line(b"hello"), None);
        assert_eq!(Command::from_line(b"ON\x00"), None);
        assert_eq!(Command::from_line(&[0xff, 0xfe]), None);
    }

    #[test]
    fn test_led_levels() {
        assert!(Command::On.led_on());
        assert!(!Command::Off.led_on());
    }
}
