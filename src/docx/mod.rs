//! DOCX (OPC + WordprocessingML) reading and writing.
//!
//! The package layer keeps every container part it read; the reader and
//! writer translate `word/document.xml` and `word/styles.xml` to and from
//! the model, preserving uninterpreted XML verbatim so documents
//! round-trip without losing content the formatter does not touch.

mod package;
mod reader;
mod writer;

pub use package::{Package, Part};

pub(crate) use reader::read_document;
pub(crate) use writer::write_document;

#[cfg(test)]
mod tests {
    use crate::model::{Alignment, Document, Paragraph};

    #[test]
    fn test_document_round_trip() {
        let mut doc = Document::new();
        let mut p = Paragraph::with_text("Round trip");
        p.alignment = Some(Alignment::Justify);
        p.format.line_spacing = Some(1.5);
        p.format.first_line_indent = Some(35.45);
        doc.add_paragraph(p);

        let bytes = doc.to_bytes().unwrap();
        let reread = Document::from_bytes(&bytes).unwrap();

        assert_eq!(reread.paragraph_count(), 1);
        let p = reread.paragraphs().next().unwrap();
        assert_eq!(p.text(), "Round trip");
        assert_eq!(p.alignment, Some(Alignment::Justify));
        assert_eq!(p.format.line_spacing, Some(1.5));
        assert!((p.format.first_line_indent.unwrap() - 35.45).abs() < 0.05);
    }

    #[test]
    fn test_styles_round_trip() {
        let mut doc = Document::new();
        {
            let normal = doc.styles.get_mut("Normal").unwrap();
            normal.font.name = Some("Arial".to_string());
            normal.font.size = Some(12.0);
            normal.font.color = Some("000000".to_string());
        }

        let bytes = doc.to_bytes().unwrap();
        let reread = Document::from_bytes(&bytes).unwrap();

        let normal = reread.styles.get("Normal").unwrap();
        assert_eq!(normal.font.name.as_deref(), Some("Arial"));
        assert_eq!(normal.font.size, Some(12.0));
        assert_eq!(normal.font.color.as_deref(), Some("000000"));
    }
}
