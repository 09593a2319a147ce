//! All error types for the resxcodec crate.
//!
//! These are returned from all fallible operations (reading, writing, designer
//! generation, container parsing, etc.).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("container not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new not-found error for a container path
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Error::NotFound(path.into())
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
