// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Http(String),
    Decode(String),
    Config(String),
    Document(String),
    Export(ExportError),
}

/// Specific error types for export failures.
///
/// Export errors are surfaced synchronously to whatever triggered the
/// export so the UI can show feedback; they are never swallowed.
#[derive(Debug, Clone)]
pub enum ExportError {
    /// The surface has not completed at least one successful draw.
    NotRendered,
    /// Pixel data could not be encoded into the requested format.
    Encode(String),
    /// The encoded artifact could not be written to disk.
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NotRendered => {
                write!(f, "Nothing rendered yet; the image has not been drawn")
            }
            ExportError::Encode(msg) => write!(f, "Encoding failed: {}", msg),
            ExportError::Io(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
            Error::Export(e) => write!(f, "Export Error: {}", e),
        }
    }
}

impl From<ExportError> for Error {
    fn from(err: ExportError) -> Self {
        Error::Export(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Document(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
