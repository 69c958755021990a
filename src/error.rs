//! Error types for `NameFind`

use arrayvec::ArrayString;
use thiserror::Error;

/// Maximum length of error messages
pub const MAX_ERROR_LENGTH: usize = 256;

/// Custom result type for `NameFind` operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for `NameFind`
///
/// # Design
/// - All errors are stack-allocated
/// - String buffers are stack-allocated with a fixed `MAX_ERROR_LENGTH`
/// - Per-entry traversal problems never become errors; only conditions
///   that stop a search from starting (or an open from happening) do
#[derive(Debug, Error)]
pub enum Error {
    /// Search root does not exist, is not a directory, or cannot be read
    #[error("Error: {0}")]
    InvalidRoot(Box<ArrayString<MAX_ERROR_LENGTH>>),

    /// The host failed to open a file with its default application
    #[error("Error: {0}")]
    Open(Box<ArrayString<MAX_ERROR_LENGTH>>),

    /// Shell-level input was rejected before a search was issued
    #[error("Error: {0}")]
    Input(Box<ArrayString<MAX_ERROR_LENGTH>>),
}

impl Error {
    /// Create a new invalid-root error
    pub fn invalid_root(msg: &str) -> Self {
        Self::InvalidRoot(Self::buffer(msg))
    }

    /// Create a new open error
    pub fn open(msg: &str) -> Self {
        Self::Open(Self::buffer(msg))
    }

    /// Create a new input error
    pub fn input(msg: &str) -> Self {
        Self::Input(Self::buffer(msg))
    }

    /// Fill a fixed-size message buffer, truncating if too long
    fn buffer(msg: &str) -> Box<ArrayString<MAX_ERROR_LENGTH>> {
        let mut buf = ArrayString::new();
        let mut end = msg.len().min(MAX_ERROR_LENGTH);
        while !msg.is_char_boundary(end) {
            end -= 1;
        }
        let _ = buf.try_push_str(&msg[..end]);
        Box::new(buf)
    }

    /// Get a user-friendly error message with action items
    #[must_use]
    pub fn user_message(&self) -> ArrayString<MAX_ERROR_LENGTH> {
        let mut msg = ArrayString::new();
        match self {
            Self::InvalidRoot(cause) => {
                let _ = msg.try_push_str("Error: ");
                let _ = msg.try_push_str(cause);
                let _ = msg.try_push_str("\nTip: Check that the directory exists and is readable");
            },
            Self::Open(cause) => {
                let _ = msg.try_push_str("Error: ");
                let _ = msg.try_push_str(cause);
                let _ = msg.try_push_str("\nTip: The file may have moved since the search ran");
            },
            Self::Input(cause) => {
                let _ = msg.try_push_str("Error: ");
                let _ = msg.try_push_str(cause);
            },
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_truncation() {
        let long = "x".repeat(MAX_ERROR_LENGTH * 2);
        let err = Error::invalid_root(&long);
        match err {
            Error::InvalidRoot(buf) => assert_eq!(buf.len(), MAX_ERROR_LENGTH),
            other => panic!("Expected InvalidRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_user_message_carries_cause() {
        let err = Error::open("No such file: /tmp/gone.txt");
        let msg = err.user_message();
        assert!(msg.contains("No such file: /tmp/gone.txt"));
        assert!(msg.contains("Tip:"));
    }
}
