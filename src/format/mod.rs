//! The formatting engine.
//!
//! One deterministic forward pass: the registry rewrites page layout and
//! the base styles, then every body paragraph is classified and formatted
//! by the first matching section rule. Persistence derives the output path
//! from the input path.

mod classifier;
mod heading;
mod quotation;
mod registry;
mod rules;

pub use classifier::SectionState;
pub use heading::{parse_heading, Heading};
pub use quotation::{is_long_quotation, strip_marker};

use crate::error::Result;
use crate::model::Document;
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of the derived output path.
pub const OUTPUT_SUFFIX: &str = "_FORMATADO_PROFISSIONAL";

/// Format a document to the ABNT standard.
///
/// Takes the document by value and returns it transformed; on error the
/// partially formatted value is dropped and nothing is persisted.
pub fn format_document(mut doc: Document) -> Result<Document> {
    registry::apply(&mut doc)?;

    let mut state = SectionState::new();
    let mut formatted = 0usize;
    for paragraph in doc.paragraphs_mut() {
        state = state.advance(&paragraph.text());
        rules::apply_first_match(paragraph, &state);
        formatted += 1;
    }

    log::debug!("formatted {formatted} paragraphs");
    Ok(doc)
}

/// Derive the output path for an input path by inserting
/// [`OUTPUT_SUFFIX`] before the extension.
///
/// ```
/// use abntfmt::output_path_for;
/// use std::path::Path;
///
/// let output = output_path_for(Path::new("thesis.docx"));
/// assert_eq!(output, Path::new("thesis_FORMATADO_PROFISSIONAL.docx"));
/// ```
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}{OUTPUT_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{OUTPUT_SUFFIX}"),
    };
    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Margins, Paragraph, HEADING_1, HEADING_2, NORMAL};

    fn sample_document() -> Document {
        let mut doc = Document::new();
        for text in [
            "Título",
            "ABSTRACT",
            "This is the abstract.",
            "1 INTRODUÇÃO",
            "Body text here.",
            "2.1 Sub Section",
            "[CITAÇÃO] quoted text",
            "REFERÊNCIAS",
            "Author, A. Title. Year.",
        ] {
            doc.add_paragraph(Paragraph::with_text(text));
        }
        doc
    }

    #[test]
    fn test_full_pipeline() {
        let doc = format_document(sample_document()).unwrap();
        let paragraphs: Vec<_> = doc.paragraphs().collect();

        // Title page: untouched.
        assert!(paragraphs[0].alignment.is_none());

        // Abstract marker: centered bold Normal.
        assert_eq!(paragraphs[1].style, NORMAL);
        assert_eq!(paragraphs[1].alignment, Some(Alignment::Center));
        assert_eq!(paragraphs[1].runs[0].font.bold, Some(true));

        // Abstract body: justified, 1.5 spacing.
        assert_eq!(paragraphs[2].alignment, Some(Alignment::Justify));
        assert_eq!(paragraphs[2].format.line_spacing, Some(1.5));

        // Introduction heading: primary level.
        assert_eq!(paragraphs[3].style, HEADING_1);

        // Body text: justified with first-line indent.
        assert_eq!(paragraphs[4].alignment, Some(Alignment::Justify));
        assert!((paragraphs[4].format.first_line_indent.unwrap() - 35.43307).abs() < 0.01);

        // Subsection heading: secondary level.
        assert_eq!(paragraphs[5].style, HEADING_2);

        // Long quotation: marker stripped, indented, 10 pt.
        assert_eq!(paragraphs[6].text(), "quoted text");
        assert_eq!(paragraphs[6].runs[0].font.size, Some(10.0));
        assert!((paragraphs[6].format.left_indent.unwrap() - 113.3858).abs() < 0.01);

        // References marker: centered bold.
        assert_eq!(paragraphs[7].alignment, Some(Alignment::Center));
        assert_eq!(paragraphs[7].runs[0].font.bold, Some(true));

        // Bibliography entry: left-aligned, 12 pt after.
        assert_eq!(paragraphs[8].alignment, Some(Alignment::Left));
        assert_eq!(paragraphs[8].format.space_after, Some(12.0));
    }

    #[test]
    fn test_margins_and_styles_idempotent() {
        let once = format_document(sample_document()).unwrap();
        let twice = format_document(once.clone()).unwrap();

        assert_eq!(once.sections[0].margins, Margins::abnt());
        assert_eq!(twice.sections[0].margins, once.sections[0].margins);
        for id in [NORMAL, HEADING_1, HEADING_2] {
            let a = once.styles.get(id).unwrap();
            let b = twice.styles.get(id).unwrap();
            assert_eq!(a.font.size, b.font.size);
            assert_eq!(a.font.bold, b.font.bold);
            assert_eq!(a.format.space_before, b.format.space_before);
        }
    }

    #[test]
    fn test_missing_introduction_leaves_body_unformatted() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("2 METODOLOGIA"));
        doc.add_paragraph(Paragraph::with_text("Texto sem marcador de corpo."));

        let doc = format_document(doc).unwrap();
        for p in doc.paragraphs() {
            assert!(p.alignment.is_none());
            assert!(!p.format.is_set());
            assert_eq!(p.style, NORMAL);
        }
    }

    #[test]
    fn test_style_not_found_fails_fast() {
        let mut doc = Document::new();
        doc.styles = crate::model::StyleSheet::new();
        doc.add_paragraph(Paragraph::with_text("1 INTRODUÇÃO"));

        assert!(format_document(doc).is_err());
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("thesis.docx")),
            PathBuf::from("thesis_FORMATADO_PROFISSIONAL.docx")
        );
        assert_eq!(
            output_path_for(Path::new("/tmp/dir/meu_trabalho.docx")),
            PathBuf::from("/tmp/dir/meu_trabalho_FORMATADO_PROFISSIONAL.docx")
        );
        assert_eq!(
            output_path_for(Path::new("noext")),
            PathBuf::from("noext_FORMATADO_PROFISSIONAL")
        );
    }
}
