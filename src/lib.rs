//! # abntfmt
//!
//! Deterministic ABNT formatter for academic DOCX manuscripts.
//!
//! This library loads a word-processing document, rewrites its global
//! styles and page margins, classifies every paragraph into a manuscript
//! section (abstract, textual body, references) and applies the
//! section-specific typographic rules of the Brazilian ABNT standard:
//! heading hierarchy, justified body text with first-line indent,
//! indented single-spaced long quotations and a left-aligned references
//! list.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> abntfmt::Result<()> {
//!     // Formats thesis.docx and writes
//!     // thesis_FORMATADO_PROFISSIONAL.docx next to it.
//!     let output = abntfmt::format_file("thesis.docx")?;
//!     println!("saved to {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Single-pass engine**: one deterministic scan over the paragraphs
//! - **Section classification**: driven by textual markers
//! - **Global style rewriting**: `Normal`, `Heading1`, `Heading2`
//! - **Round-trip preservation**: content the formatter does not touch
//!   (tables, images, settings) is carried through byte-identical

pub mod detect;
pub mod docx;
pub mod error;
pub mod format;
pub mod model;

// Re-export commonly used types
pub use detect::{is_docx, is_docx_bytes};
pub use error::{Error, Result};
pub use format::{format_document, output_path_for, SectionState, OUTPUT_SUFFIX};
pub use model::{
    Alignment, Block, Document, FontProps, Margins, Metadata, Paragraph, ParagraphFormat, Run,
    SectionLayout, StyleDefinition, StyleSheet,
};

use std::io::Read;
use std::path::{Path, PathBuf};

/// Format a DOCX file and save the result next to it.
///
/// Runs the whole pipeline: load, format, save to the derived output path
/// (`<stem>_FORMATADO_PROFISSIONAL.<ext>`). Returns the output path.
///
/// # Example
///
/// ```no_run
/// let output = abntfmt::format_file("thesis.docx").unwrap();
/// assert!(output.ends_with("thesis_FORMATADO_PROFISSIONAL.docx"));
/// ```
pub fn format_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    Formatter::new().format(path)
}

/// Format a DOCX document held in memory and return the formatted bytes.
///
/// For callers that handle upload and download themselves and never touch
/// the filesystem.
pub fn format_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let doc = Document::from_bytes(data)?;
    let doc = format_document(doc)?;
    doc.to_bytes()
}

/// Format a DOCX document from a reader and return the formatted bytes.
pub fn format_reader<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    format_bytes(&data)
}

/// Builder for formatting documents with output-placement overrides.
///
/// # Example
///
/// ```no_run
/// use abntfmt::Formatter;
///
/// let output = Formatter::new()
///     .with_output_dir("./out")
///     .format("thesis.docx")?;
/// # Ok::<(), abntfmt::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    suffix: String,
    output_dir: Option<PathBuf>,
}

impl Formatter {
    /// Create a formatter with the default output placement.
    pub fn new() -> Self {
        Self {
            suffix: OUTPUT_SUFFIX.to_string(),
            output_dir: None,
        }
    }

    /// Override the suffix inserted before the output extension.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Write the output into `dir` instead of next to the input.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// The output path this formatter derives for an input path.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = match input.extension() {
            Some(ext) => format!("{stem}{}.{}", self.suffix, ext.to_string_lossy()),
            None => format!("{stem}{}", self.suffix),
        };
        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => input.with_file_name(file_name),
        }
    }

    /// Run the pipeline on a file: load, format, save.
    ///
    /// The output file is only written after the whole in-memory
    /// transformation succeeded; a failed run leaves no partial output.
    pub fn format<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = path.as_ref();
        log::info!("formatting {}", path.display());

        let doc = Document::open(path)?;
        let doc = format_document(doc)?;

        let output = self.output_path(path);
        doc.save(&output)?;
        log::info!("saved {}", output.display());
        Ok(output)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
