//! Round-trip tests: content the formatter does not interpret must survive
//! a load/format/save cycle untouched.

use abntfmt::{format_bytes, Block, Document, Paragraph, Run};

fn manuscript_with_extras() -> Document {
    let mut doc = Document::new();
    doc.add_paragraph(Paragraph::with_text("Título"));
    doc.add_paragraph(Paragraph::with_text("1 INTRODUÇÃO"));
    doc.add_paragraph(Paragraph::with_text("Texto do corpo."));
    doc.body.push(Block::Raw(
        "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>tabela</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"
            .to_string(),
    ));
    doc.add_paragraph(Paragraph::with_text("Mais texto."));
    doc
}

#[test]
fn test_tables_pass_through_untouched() {
    let bytes = manuscript_with_extras().to_bytes().unwrap();
    let formatted = format_bytes(&bytes).unwrap();

    let doc = Document::from_bytes(&formatted).unwrap();
    let raw_blocks: Vec<_> = doc
        .body
        .iter()
        .filter_map(|b| match b {
            Block::Raw(raw) => Some(raw.as_str()),
            Block::Paragraph(_) => None,
        })
        .collect();

    assert_eq!(raw_blocks.len(), 1);
    assert!(raw_blocks[0].contains("<w:tbl>"));
    assert!(raw_blocks[0].contains("tabela"));
}

#[test]
fn test_multiple_runs_preserved_when_untouched() {
    let mut doc = Document::new();
    let mut p = Paragraph::with_text("Título com ");
    p.add_run(Run::bold("destaque"));
    doc.add_paragraph(p);

    let bytes = doc.to_bytes().unwrap();
    let formatted = format_bytes(&bytes).unwrap();
    let reread = Document::from_bytes(&formatted).unwrap();

    // Preamble paragraphs keep their run structure.
    let p = reread.paragraphs().next().unwrap();
    assert_eq!(p.runs.len(), 2);
    assert_eq!(p.runs[1].font.bold, Some(true));
    assert_eq!(p.text(), "Título com destaque");
}

#[test]
fn test_unknown_styles_survive() {
    let mut doc = Document::new();
    doc.styles
        .push(abntfmt::StyleDefinition::new("MinhaCitacao"));

    let bytes = doc.to_bytes().unwrap();
    let formatted = format_bytes(&bytes).unwrap();
    let reread = Document::from_bytes(&formatted).unwrap();

    assert!(reread.styles.get("MinhaCitacao").is_some());
    assert_eq!(reread.styles.len(), 4);
}

#[test]
fn test_package_parts_preserved() {
    let doc = manuscript_with_extras();
    let bytes = doc.to_bytes().unwrap();
    let formatted = format_bytes(&bytes).unwrap();

    let reread = Document::from_bytes(&formatted).unwrap();
    assert_eq!(reread.paragraph_count(), 4);
}

#[test]
fn test_format_bytes_output_is_a_valid_document() {
    let bytes = manuscript_with_extras().to_bytes().unwrap();
    let formatted = format_bytes(&bytes).unwrap();

    assert!(abntfmt::is_docx_bytes(&formatted));
    let doc = Document::from_bytes(&formatted).unwrap();
    assert_eq!(doc.styles.get("Normal").unwrap().font.size, Some(12.0));
}
