//! WordprocessingML part serialization.
//!
//! Regenerates `word/document.xml` and `word/styles.xml` from the model,
//! splicing preserved raw XML back in place, and repacks the OPC container
//! leaving every other part untouched.

use crate::error::{Error, Result};
use crate::model::units::{pt_to_half_points, pt_to_twips, spacing_to_line_units};
use crate::model::{
    Block, Document, FontProps, Paragraph, ParagraphFormat, Run, SectionLayout, StyleSheet,
};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::package::{Package, DOCUMENT_PART, STYLES_PART};

/// Namespace declarations for the document root. The preserved raw blocks
/// may reference any of these, so they are declared up front.
const DOCUMENT_NAMESPACES: &[(&str, &str)] = &[
    (
        "xmlns:w",
        "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    ),
    (
        "xmlns:r",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    ),
    (
        "xmlns:wp",
        "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing",
    ),
    (
        "xmlns:a",
        "http://schemas.openxmlformats.org/drawingml/2006/main",
    ),
    (
        "xmlns:pic",
        "http://schemas.openxmlformats.org/drawingml/2006/picture",
    ),
    (
        "xmlns:mc",
        "http://schemas.openxmlformats.org/markup-compatibility/2006",
    ),
];

const STYLES_NAMESPACES: &[(&str, &str)] = &[
    (
        "xmlns:w",
        "http://schemas.openxmlformats.org/wordprocessingml/2006/main",
    ),
    (
        "xmlns:r",
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships",
    ),
];

/// Serialize a document to DOCX bytes.
pub(crate) fn write_document(doc: &Document) -> Result<Vec<u8>> {
    let document_xml = build_document_xml(doc)?;
    let styles_xml = build_styles_xml(&doc.styles)?;

    let mut package = if doc.package.is_empty() {
        Package::minimal()
    } else {
        doc.package.clone()
    };
    package.set_part(DOCUMENT_PART, document_xml.into_bytes());
    package.set_part(STYLES_PART, styles_xml.into_bytes());

    log::debug!("serialized document: {} package parts", package.len());
    package.to_bytes()
}

/// Build `word/document.xml`.
fn build_document_xml(doc: &Document) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("w:document");
    for (key, value) in DOCUMENT_NAMESPACES {
        root.push_attribute((*key, *value));
    }
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for block in &doc.body {
        match block {
            Block::Paragraph(p) => write_paragraph(&mut writer, p)?,
            Block::Raw(raw) => write_raw(&mut writer, raw)?,
        }
    }
    for section in &doc.sections {
        write_section(&mut writer, section)?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    into_string(writer)
}

/// Build `word/styles.xml`.
fn build_styles_xml(styles: &StyleSheet) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("w:styles");
    for (key, value) in STYLES_NAMESPACES {
        root.push_attribute((*key, *value));
    }
    writer.write_event(Event::Start(root))?;
    write_raw(&mut writer, &styles.defaults)?;

    for style in styles.iter() {
        let mut start = BytesStart::new("w:style");
        start.push_attribute(("w:type", style.style_type.as_docx()));
        if style.default_style {
            start.push_attribute(("w:default", "1"));
        }
        start.push_attribute(("w:styleId", style.id.as_str()));
        writer.write_event(Event::Start(start))?;

        if let Some(name) = &style.name {
            write_empty(&mut writer, "w:name", &[("w:val", name.as_str())])?;
        }
        if let Some(based_on) = &style.based_on {
            write_empty(&mut writer, "w:basedOn", &[("w:val", based_on.as_str())])?;
        }
        write_raw(&mut writer, &style.extra)?;

        if style.format.is_set() || !style.format_extra.is_empty() {
            writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
            write_spacing(&mut writer, &style.format)?;
            write_indent(&mut writer, &style.format)?;
            write_raw(&mut writer, &style.format_extra)?;
            writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        }
        write_font_props(&mut writer, &style.font, &style.font_extra)?;

        writer.write_event(Event::End(BytesEnd::new("w:style")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:styles")))?;
    into_string(writer)
}

/// Write one paragraph.
fn write_paragraph(writer: &mut Writer<Vec<u8>>, paragraph: &Paragraph) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;

    let has_props = paragraph.style != crate::model::NORMAL
        || paragraph.alignment.is_some()
        || paragraph.format.is_set()
        || !paragraph.extra_props.is_empty()
        || paragraph.section_break.is_some();
    if has_props {
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        if paragraph.style != crate::model::NORMAL {
            write_empty(writer, "w:pStyle", &[("w:val", paragraph.style.as_str())])?;
        }
        write_spacing(writer, &paragraph.format)?;
        write_indent(writer, &paragraph.format)?;
        if let Some(alignment) = paragraph.alignment {
            write_empty(writer, "w:jc", &[("w:val", alignment.as_docx())])?;
        }
        write_raw(writer, &paragraph.extra_props)?;
        if let Some(section) = &paragraph.section_break {
            write_section(writer, section)?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }

    for run in &paragraph.runs {
        write_run(writer, run)?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

/// Write one run. Runs carrying only preserved content (hyperlinks,
/// bookmarks) are spliced back without a `w:r` wrapper.
fn write_run(writer: &mut Writer<Vec<u8>>, run: &Run) -> Result<()> {
    if run.text.is_empty() && !run.font.is_set() && run.extra_props.is_empty() {
        return write_raw(writer, &run.extra_content);
    }

    writer.write_event(Event::Start(BytesStart::new("w:r")))?;
    write_font_props(writer, &run.font, &run.extra_props)?;

    if !run.text.is_empty() {
        let mut t = BytesStart::new("w:t");
        if run.text != run.text.trim() {
            t.push_attribute(("xml:space", "preserve"));
        }
        writer.write_event(Event::Start(t))?;
        writer.write_event(Event::Text(BytesText::new(&run.text)))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    }
    write_raw(writer, &run.extra_content)?;

    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    Ok(())
}

/// Write a `w:rPr` element when any font attribute or preserved child exists.
fn write_font_props(writer: &mut Writer<Vec<u8>>, font: &FontProps, extra: &str) -> Result<()> {
    if !font.is_set() && extra.is_empty() {
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    if let Some(name) = &font.name {
        write_empty(
            writer,
            "w:rFonts",
            &[("w:ascii", name.as_str()), ("w:hAnsi", name.as_str())],
        )?;
    }
    write_on_off(writer, "w:b", font.bold)?;
    write_on_off(writer, "w:caps", font.all_caps)?;
    if let Some(color) = &font.color {
        write_empty(writer, "w:color", &[("w:val", color.as_str())])?;
    }
    if let Some(size) = font.size {
        let value = pt_to_half_points(size).to_string();
        write_empty(writer, "w:sz", &[("w:val", value.as_str())])?;
    }
    write_raw(writer, extra)?;
    writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    Ok(())
}

/// Write a `w:spacing` element when any spacing field is set.
fn write_spacing(writer: &mut Writer<Vec<u8>>, format: &ParagraphFormat) -> Result<()> {
    if format.space_before.is_none()
        && format.space_after.is_none()
        && format.line_spacing.is_none()
    {
        return Ok(());
    }

    let mut spacing = BytesStart::new("w:spacing");
    if let Some(before) = format.space_before {
        spacing.push_attribute(("w:before", pt_to_twips(before).to_string().as_str()));
    }
    if let Some(after) = format.space_after {
        spacing.push_attribute(("w:after", pt_to_twips(after).to_string().as_str()));
    }
    if let Some(line) = format.line_spacing {
        spacing.push_attribute(("w:line", spacing_to_line_units(line).to_string().as_str()));
        spacing.push_attribute(("w:lineRule", "auto"));
    }
    writer.write_event(Event::Empty(spacing))?;
    Ok(())
}

/// Write a `w:ind` element when any indent field is set.
fn write_indent(writer: &mut Writer<Vec<u8>>, format: &ParagraphFormat) -> Result<()> {
    if format.left_indent.is_none() && format.first_line_indent.is_none() {
        return Ok(());
    }

    let mut indent = BytesStart::new("w:ind");
    if let Some(left) = format.left_indent {
        indent.push_attribute(("w:left", pt_to_twips(left).to_string().as_str()));
    }
    if let Some(first) = format.first_line_indent {
        if first < 0.0 {
            indent.push_attribute(("w:hanging", pt_to_twips(-first).to_string().as_str()));
        } else {
            indent.push_attribute(("w:firstLine", pt_to_twips(first).to_string().as_str()));
        }
    }
    writer.write_event(Event::Empty(indent))?;
    Ok(())
}

/// Write a `w:sectPr` element.
fn write_section(writer: &mut Writer<Vec<u8>>, section: &SectionLayout) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
    write_raw(writer, &section.extra)?;

    let width = pt_to_twips(section.page_width).to_string();
    let height = pt_to_twips(section.page_height).to_string();
    write_empty(
        writer,
        "w:pgSz",
        &[("w:w", width.as_str()), ("w:h", height.as_str())],
    )?;

    let margins = &section.margins;
    let top = pt_to_twips(margins.top).to_string();
    let right = pt_to_twips(margins.right).to_string();
    let bottom = pt_to_twips(margins.bottom).to_string();
    let left = pt_to_twips(margins.left).to_string();
    let header = pt_to_twips(section.header_distance).to_string();
    let footer = pt_to_twips(section.footer_distance).to_string();
    let gutter = pt_to_twips(section.gutter).to_string();
    write_empty(
        writer,
        "w:pgMar",
        &[
            ("w:top", top.as_str()),
            ("w:right", right.as_str()),
            ("w:bottom", bottom.as_str()),
            ("w:left", left.as_str()),
            ("w:header", header.as_str()),
            ("w:footer", footer.as_str()),
            ("w:gutter", gutter.as_str()),
        ],
    )?;

    writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
    Ok(())
}

/// Write an on/off toggle element (`None` omits it entirely).
fn write_on_off(writer: &mut Writer<Vec<u8>>, name: &str, value: Option<bool>) -> Result<()> {
    match value {
        Some(true) => write_empty(writer, name, &[])?,
        Some(false) => write_empty(writer, name, &[("w:val", "0")])?,
        None => {}
    }
    Ok(())
}

/// Write an empty element with attributes.
fn write_empty(writer: &mut Writer<Vec<u8>>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for (key, value) in attrs {
        elem.push_attribute((*key, *value));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Splice preserved raw XML into the output verbatim.
fn write_raw(writer: &mut Writer<Vec<u8>>, raw: &str) -> Result<()> {
    if !raw.is_empty() {
        writer.write_event(Event::Text(BytesText::from_escaped(raw)))?;
    }
    Ok(())
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner()).map_err(|e| Error::Encoding(e.to_string()))
}
