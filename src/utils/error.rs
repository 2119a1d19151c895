//! Error types for the browser shell

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for shell operations
#[derive(Debug, Error)]
pub enum ShellError {
    /// The bookmark file exists but does not hold a list of bookmarks
    #[error("malformed bookmark file {}: {source}", .path.display())]
    MalformedBookmarks {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Bookmarks could not be serialized
    #[error("failed to encode bookmarks: {0}")]
    Encode(#[from] serde_json::Error),
    /// I/O errors while reading or writing the bookmark file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The embedded engine rejected a request or could not be created
    #[error("engine error: {0}")]
    Engine(String),
}

/// Convenience Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_the_file() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ShellError::MalformedBookmarks {
            path: PathBuf::from("bookmarks.json"),
            source,
        };
        assert!(err.to_string().starts_with("malformed bookmark file bookmarks.json"));
    }

    #[test]
    fn test_io_conversion() {
        let err: ShellError = std::io::Error::other("disk full").into();
        assert!(matches!(err, ShellError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }
}
