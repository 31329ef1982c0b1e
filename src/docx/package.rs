//! OPC package container handling.
//!
//! A DOCX file is an OPC package: a ZIP archive of named parts. The package
//! keeps every part it read, in order, so parts the model does not interpret
//! (fonts, settings, themes, media) round-trip byte-identical.

use crate::detect;
use crate::error::{Error, Result};
use std::io::{Cursor, Read, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Part name of the main document.
pub(crate) const DOCUMENT_PART: &str = "word/document.xml";

/// Part name of the style sheet.
pub(crate) const STYLES_PART: &str = "word/styles.xml";

/// Part name of the core properties.
pub(crate) const CORE_PROPS_PART: &str = "docProps/core.xml";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

/// A single named part of an OPC package.
#[derive(Debug, Clone)]
pub struct Part {
    /// Part name (ZIP entry path, e.g. `word/document.xml`)
    pub name: String,

    /// Raw part bytes
    pub data: Vec<u8>,
}

/// An OPC package: the ordered parts of a DOCX container.
#[derive(Debug, Clone, Default)]
pub struct Package {
    parts: Vec<Part>,
}

impl Package {
    /// Read a package from DOCX bytes.
    ///
    /// Fails with [`Error::UnknownFormat`] when the data is not a ZIP
    /// container and [`Error::MissingPart`] when the archive does not hold
    /// a main document part.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect::detect_docx_from_bytes(data)?;

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut parts = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let mut content = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut content)?;
            parts.push(Part {
                name: file.name().to_string(),
                data: content,
            });
        }

        let package = Self { parts };
        if package.part(DOCUMENT_PART).is_none() {
            return Err(Error::MissingPart(DOCUMENT_PART.to_string()));
        }
        Ok(package)
    }

    /// A minimal package scaffold for documents built in memory:
    /// content types and relationships only.
    pub fn minimal() -> Self {
        Self {
            parts: vec![
                Part {
                    name: "[Content_Types].xml".to_string(),
                    data: CONTENT_TYPES_XML.as_bytes().to_vec(),
                },
                Part {
                    name: "_rels/.rels".to_string(),
                    data: ROOT_RELS_XML.as_bytes().to_vec(),
                },
                Part {
                    name: "word/_rels/document.xml.rels".to_string(),
                    data: DOCUMENT_RELS_XML.as_bytes().to_vec(),
                },
            ],
        }
    }

    /// Look up a part by name.
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Replace a part's bytes, appending the part if it does not exist.
    pub fn set_part(&mut self, name: &str, data: Vec<u8>) {
        match self.parts.iter_mut().find(|p| p.name == name) {
            Some(part) => part.data = data,
            None => self.parts.push(Part {
                name: name.to_string(),
                data,
            }),
        }
    }

    /// Iterate over part names in archive order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check if the package holds no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Serialize the package to DOCX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        for part in &self.parts {
            writer.start_file(part.name.as_str(), options)?;
            writer.write_all(&part.data)?;
        }
        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
