use std::fmt;

/// Errors raised by a key-value store or while encoding a layout for it.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (permission denied, disk full, etc.)
    Io(std::io::Error),
    /// The layout could not be serialised.
    Encode(String),
    /// The key cannot be mapped onto the backing medium.
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Encode(msg) => write!(f, "Encoding error: {msg}"),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: '{key}'"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Encode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_io() {
        let err = StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("read-only"), "got: {msg}");
    }

    #[test]
    fn test_display_invalid_key() {
        let msg = StorageError::InvalidKey("../etc".into()).to_string();
        assert!(msg.contains("../etc"), "got: {msg}");
    }

    #[test]
    fn test_from_io_keeps_source() {
        let err: StorageError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, StorageError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
