//! DOCX container detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Verify that a file starts with the DOCX (ZIP) container magic.
///
/// This only checks the container header; the package reader verifies
/// that the archive actually holds `word/document.xml`.
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `Ok(())` if the file starts with a ZIP local file header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_docx_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    detect_docx_from_bytes(&header)
}

/// Verify that bytes start with the DOCX (ZIP) container magic.
pub fn detect_docx_from_bytes(data: &[u8]) -> Result<()> {
    if data.len() < ZIP_MAGIC.len() || !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }
    Ok(())
}

/// Check if a file looks like a DOCX container.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_docx_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_docx_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_container() {
        let data = b"PK\x03\x04\x14\x00\x00\x00";
        assert!(detect_docx_from_bytes(data).is_ok());
    }

    #[test]
    fn test_detect_invalid_format() {
        let data = b"%PDF-1.7\n";
        let result = detect_docx_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let data = b"PK";
        let result = detect_docx_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_docx_bytes() {
        assert!(is_docx_bytes(b"PK\x03\x04rest-of-archive"));
        assert!(!is_docx_bytes(b"Not a container"));
        assert!(!is_docx_bytes(b""));
    }
}
