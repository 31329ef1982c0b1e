//! Error types for the abntfmt library.

use std::io;
use thiserror::Error;

/// Result type alias for abntfmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, formatting, or saving documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a DOCX (OPC/ZIP) container.
    #[error("Unknown file format: not a valid DOCX container")]
    UnknownFormat,

    /// The OPC package structure is corrupted or unreadable.
    #[error("Package error: {0}")]
    Package(String),

    /// A required package part is missing (e.g. `word/document.xml`).
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// Error parsing a WordprocessingML part.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// A part is not valid UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A style id the registry must redefine is absent from the style sheet.
    #[error("Style not found in document: {0}")]
    StyleNotFound(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::InvalidArchive(_) => Error::UnknownFormat,
            _ => Error::Package(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::StyleNotFound("Heading1".to_string());
        assert_eq!(err.to_string(), "Style not found in document: Heading1");

        let err = Error::MissingPart("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing package part: word/document.xml");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::InvalidArchive("bad header").into();
        assert!(matches!(err, Error::UnknownFormat));
    }
}
