//! Document-level types.

use super::paragraph::Paragraph;
use super::section::SectionLayout;
use super::style::StyleSheet;
use crate::docx::Package;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A word-processing document: an ordered body of blocks, a style sheet
/// and the page-layout sections.
///
/// A `Document` is owned exclusively by one transformation call and moved
/// by value through the pipeline stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document core properties (title, author, dates)
    pub metadata: Metadata,

    /// Body content in document order
    pub body: Vec<Block>,

    /// Named styles keyed by style id
    pub styles: StyleSheet,

    /// Page-layout sections closing the document body
    pub sections: Vec<SectionLayout>,

    /// Source package retained for round-trip serialization
    #[serde(skip)]
    pub(crate) package: Package,
}

impl Document {
    /// Create a new empty document with the default style sheet and a
    /// single default section.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            body: Vec::new(),
            styles: StyleSheet::with_defaults(),
            sections: vec![SectionLayout::default()],
            package: Package::default(),
        }
    }

    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parse a DOCX document from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        crate::docx::read_document(data)
    }

    /// Parse a DOCX document from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Serialize the document and write it to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = self.to_bytes()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Serialize the document to DOCX bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        crate::docx::write_document(self)
    }

    /// Append a paragraph to the document body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Iterate over body paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Raw(_) => None,
        })
    }

    /// Iterate over body paragraphs for mutation.
    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.body.iter_mut().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Raw(_) => None,
        })
    }

    /// Number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Iterate over every page-layout section, including those attached
    /// to mid-document section breaks.
    pub fn sections_mut(&mut self) -> impl Iterator<Item = &mut SectionLayout> {
        let breaks = self.body.iter_mut().filter_map(|block| match block {
            Block::Paragraph(p) => p.section_break.as_mut(),
            Block::Raw(_) => None,
        });
        breaks.chain(self.sections.iter_mut())
    }

    /// Check if the document body is empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A block-level element of the document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph
    Paragraph(Paragraph),

    /// Body XML the model does not interpret (tables, bookmarks),
    /// carried verbatim and never touched by the formatter
    Raw(String),
}

/// Document core properties, read from `docProps/core.xml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Last modifying author
    pub last_modified_by: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}
