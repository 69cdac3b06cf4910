//! Input abstraction for analysis
//!
//! A unified wrapper over the places annotated text can come from: an
//! in-memory string, a file, raw bytes, or a reader such as stdin.

use crate::api::error::{CoreError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Source of the text to analyze.
pub enum Input {
    /// Direct text string
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to process as UTF-8 text
    Bytes(Vec<u8>),
    /// Reader stream (stdin, sockets, …)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path.
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader.
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Resolve the input to a text string.
    pub fn to_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| CoreError::IoError(format!("failed to read file {path:?}: {e}"))),
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| CoreError::EncodingError(format!("invalid UTF-8: {e}"))),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|e| CoreError::IoError(format!("failed to read from stream: {e}")))?;
                String::from_utf8(buffer)
                    .map_err(|e| CoreError::EncodingError(format!("invalid UTF-8 from stream: {e}")))
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_passes_through() {
        let input = Input::from_text("Hola mundo.");
        assert_eq!(input.to_text().unwrap(), "Hola mundo.");
    }

    #[test]
    fn bytes_validate_utf8() {
        let ok = Input::from_bytes("válido".as_bytes().to_vec());
        assert_eq!(ok.to_text().unwrap(), "válido");

        let bad = Input::from_bytes(vec![0xff, 0xfe]);
        assert!(bad.to_text().is_err());
    }

    #[test]
    fn reader_is_drained() {
        let input = Input::from_reader(std::io::Cursor::new(b"from a stream".to_vec()));
        assert_eq!(input.to_text().unwrap(), "from a stream");
    }

    #[test]
    fn missing_file_is_io_error() {
        let input = Input::from_file("/nonexistent/animo-input.txt");
        assert!(matches!(input.to_text(), Err(CoreError::IoError(_))));
    }
}
