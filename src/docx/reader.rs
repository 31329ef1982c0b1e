//! WordprocessingML part parsing.
//!
//! Parses `word/document.xml` into body blocks, `word/styles.xml` into the
//! style sheet and `docProps/core.xml` into metadata. Elements the model
//! does not interpret are captured as raw XML slices and re-emitted
//! verbatim by the writer.

use crate::error::{Error, Result};
use crate::model::units::{half_points_to_pt, line_units_to_spacing, twips_to_pt};
use crate::model::{
    Alignment, Block, Document, FontProps, Metadata, Paragraph, ParagraphFormat, Run,
    SectionLayout, StyleDefinition, StyleSheet, StyleType,
};
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::package::{Package, CORE_PROPS_PART, DOCUMENT_PART, STYLES_PART};

/// Parse a complete document from DOCX bytes.
pub(crate) fn read_document(data: &[u8]) -> Result<Document> {
    let package = Package::from_bytes(data)?;

    let document_xml = part_text(&package, DOCUMENT_PART)?
        .ok_or_else(|| Error::MissingPart(DOCUMENT_PART.to_string()))?;
    let (body, sections) = parse_body(document_xml)?;

    let styles = match part_text(&package, STYLES_PART)? {
        Some(xml) => parse_styles(xml)?,
        None => StyleSheet::new(),
    };

    let metadata = match part_text(&package, CORE_PROPS_PART)? {
        Some(xml) => parse_core_props(xml)?,
        None => Metadata::default(),
    };

    log::debug!(
        "loaded document: {} blocks, {} styles, {} sections",
        body.len(),
        styles.len(),
        sections.len()
    );

    Ok(Document {
        metadata,
        body,
        styles,
        sections,
        package,
    })
}

/// Get a package part as UTF-8 text, stripping any BOM.
fn part_text<'a>(package: &'a Package, name: &str) -> Result<Option<&'a str>> {
    match package.part(name) {
        Some(part) => {
            let text = std::str::from_utf8(&part.data)
                .map_err(|e| Error::Encoding(format!("{name}: {e}")))?;
            Ok(Some(text.trim_start_matches('\u{feff}')))
        }
        None => Ok(None),
    }
}

/// Parse `word/document.xml` into body blocks and closing sections.
fn parse_body(xml: &str) -> Result<(Vec<Block>, Vec<SectionLayout>)> {
    let mut reader = Reader::from_str(xml);
    let mut body = Vec::new();
    let mut sections = Vec::new();
    let mut in_body = false;

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"body" => in_body = true,
                b"p" if in_body => {
                    body.push(Block::Paragraph(parse_paragraph(&mut reader, xml)?));
                }
                b"sectPr" if in_body => {
                    sections.push(parse_section(&mut reader, xml)?);
                }
                _ if in_body => {
                    body.push(Block::Raw(capture_raw(&mut reader, xml, &e, start)?));
                }
                _ => {}
            },
            Event::Empty(e) if in_body => match e.local_name().as_ref() {
                b"sectPr" => sections.push(SectionLayout::default()),
                _ => body.push(Block::Raw(xml[start..reader.buffer_position()].to_string())),
            },
            Event::End(e) if e.local_name().as_ref() == b"body" => in_body = false,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((body, sections))
}

/// Consume an element the model does not interpret and return its raw XML,
/// start and end tags included.
fn capture_raw(
    reader: &mut Reader<&[u8]>,
    xml: &str,
    start_tag: &BytesStart,
    start: usize,
) -> Result<String> {
    let end = start_tag.to_end().into_owned();
    reader.read_to_end(end.name())?;
    Ok(xml[start..reader.buffer_position()].to_string())
}

/// Parse a `w:p` element (the start tag has already been consumed).
fn parse_paragraph(reader: &mut Reader<&[u8]>, xml: &str) -> Result<Paragraph> {
    let mut paragraph = Paragraph::new();

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"pPr" => parse_paragraph_props(reader, xml, &mut paragraph)?,
                b"r" => {
                    let run = parse_run(reader, xml)?;
                    paragraph.add_run(run);
                }
                _ => {
                    // Inline content the model does not interpret
                    // (hyperlinks, bookmarks, field codes): carried as a
                    // content-only run so document order is preserved.
                    let raw = capture_raw(reader, xml, &e, start)?;
                    paragraph.add_run(Run {
                        extra_content: raw,
                        ..Default::default()
                    });
                }
            },
            Event::Empty(e) if e.local_name().as_ref() != b"pPr" => {
                let raw = xml[start..reader.buffer_position()].to_string();
                paragraph.add_run(Run {
                    extra_content: raw,
                    ..Default::default()
                });
            }
            Event::End(e) if e.local_name().as_ref() == b"p" => break,
            Event::Eof => return Err(Error::XmlParse("unterminated paragraph".to_string())),
            _ => {}
        }
    }

    Ok(paragraph)
}

/// Parse a `w:pPr` element into the paragraph's style, alignment and format.
fn parse_paragraph_props(
    reader: &mut Reader<&[u8]>,
    xml: &str,
    paragraph: &mut Paragraph,
) -> Result<()> {
    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sectPr" => paragraph.section_break = Some(parse_section(reader, xml)?),
                b"spacing" => {
                    parse_spacing(&e, &mut paragraph.format)?;
                    reader.read_to_end(e.to_end().into_owned().name())?;
                }
                b"ind" => {
                    parse_indent(&e, &mut paragraph.format)?;
                    reader.read_to_end(e.to_end().into_owned().name())?;
                }
                _ => paragraph
                    .extra_props
                    .push_str(&capture_raw(reader, xml, &e, start)?),
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"pStyle" => {
                    if let Some(value) = attr(&e, "val")? {
                        paragraph.style = value;
                    }
                }
                b"jc" => {
                    if let Some(value) = attr(&e, "val")? {
                        paragraph.alignment = Alignment::from_docx(&value);
                    }
                }
                b"spacing" => parse_spacing(&e, &mut paragraph.format)?,
                b"ind" => parse_indent(&e, &mut paragraph.format)?,
                b"sectPr" => paragraph.section_break = Some(SectionLayout::default()),
                _ => paragraph
                    .extra_props
                    .push_str(&xml[start..reader.buffer_position()]),
            },
            Event::End(e) if e.local_name().as_ref() == b"pPr" => break,
            Event::Eof => {
                return Err(Error::XmlParse("unterminated paragraph properties".to_string()))
            }
            _ => {}
        }
    }

    Ok(())
}

/// Parse a `w:r` element (the start tag has already been consumed).
fn parse_run(reader: &mut Reader<&[u8]>, xml: &str) -> Result<Run> {
    let mut run = Run::default();

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"rPr" => parse_font_props(reader, xml, &mut run.font, &mut run.extra_props)?,
                b"t" => {
                    let text = reader.read_text(e.to_end().into_owned().name())?;
                    run.text.push_str(&text);
                }
                _ => {
                    run.extra_content
                        .push_str(&capture_raw(reader, xml, &e, start)?);
                }
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"t" => {}
                _ => run
                    .extra_content
                    .push_str(&xml[start..reader.buffer_position()]),
            },
            Event::End(e) if e.local_name().as_ref() == b"r" => break,
            Event::Eof => return Err(Error::XmlParse("unterminated run".to_string())),
            _ => {}
        }
    }

    Ok(run)
}

/// Parse a `w:rPr` element into font attributes.
fn parse_font_props(
    reader: &mut Reader<&[u8]>,
    xml: &str,
    font: &mut FontProps,
    extra: &mut String,
) -> Result<()> {
    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => {
                if font_prop(&e, font)? {
                    reader.read_to_end(e.to_end().into_owned().name())?;
                } else {
                    extra.push_str(&capture_raw(reader, xml, &e, start)?);
                }
            }
            Event::Empty(e) => {
                if !font_prop(&e, font)? {
                    extra.push_str(&xml[start..reader.buffer_position()]);
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"rPr" => break,
            Event::Eof => return Err(Error::XmlParse("unterminated run properties".to_string())),
            _ => {}
        }
    }

    Ok(())
}

/// Read one known `w:rPr` child into the font attributes. Returns `false`
/// for elements the model does not interpret.
fn font_prop(e: &BytesStart, font: &mut FontProps) -> Result<bool> {
    match e.local_name().as_ref() {
        b"rFonts" => font.name = attr(e, "ascii")?.or(attr(e, "hAnsi")?),
        b"sz" => font.size = parse_number(attr(e, "val")?).map(half_points_to_pt),
        b"b" => font.bold = Some(parse_on_off(attr(e, "val")?)),
        b"caps" => font.all_caps = Some(parse_on_off(attr(e, "val")?)),
        b"color" => font.color = attr(e, "val")?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Read `w:spacing` attributes into a paragraph format.
fn parse_spacing(e: &BytesStart, format: &mut ParagraphFormat) -> Result<()> {
    if let Some(before) = parse_number(attr(e, "before")?) {
        format.space_before = Some(twips_to_pt(before));
    }
    if let Some(after) = parse_number(attr(e, "after")?) {
        format.space_after = Some(twips_to_pt(after));
    }
    if let Some(line) = parse_number(attr(e, "line")?) {
        format.line_spacing = Some(line_units_to_spacing(line));
    }
    Ok(())
}

/// Read `w:ind` attributes into a paragraph format.
fn parse_indent(e: &BytesStart, format: &mut ParagraphFormat) -> Result<()> {
    let left = match parse_number(attr(e, "left")?) {
        Some(value) => Some(value),
        None => parse_number(attr(e, "start")?),
    };
    if let Some(left) = left {
        format.left_indent = Some(twips_to_pt(left));
    }
    if let Some(first) = parse_number(attr(e, "firstLine")?) {
        format.first_line_indent = Some(twips_to_pt(first));
    } else if let Some(hanging) = parse_number(attr(e, "hanging")?) {
        format.first_line_indent = Some(-twips_to_pt(hanging));
    }
    Ok(())
}

/// Parse a `w:sectPr` element (the start tag has already been consumed).
fn parse_section(reader: &mut Reader<&[u8]>, xml: &str) -> Result<SectionLayout> {
    let mut layout = SectionLayout::default();

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => {
                if section_prop(&e, &mut layout)? {
                    reader.read_to_end(e.to_end().into_owned().name())?;
                } else {
                    layout.extra.push_str(&capture_raw(reader, xml, &e, start)?);
                }
            }
            Event::Empty(e) => {
                if !section_prop(&e, &mut layout)? {
                    layout.extra.push_str(&xml[start..reader.buffer_position()]);
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"sectPr" => break,
            Event::Eof => return Err(Error::XmlParse("unterminated section".to_string())),
            _ => {}
        }
    }

    Ok(layout)
}

/// Read one known `w:sectPr` child into the layout. Returns `false` for
/// elements the model does not interpret.
fn section_prop(e: &BytesStart, layout: &mut SectionLayout) -> Result<bool> {
    match e.local_name().as_ref() {
        b"pgSz" => {
            if let Some(width) = parse_number(attr(e, "w")?) {
                layout.page_width = twips_to_pt(width);
            }
            if let Some(height) = parse_number(attr(e, "h")?) {
                layout.page_height = twips_to_pt(height);
            }
        }
        b"pgMar" => {
            if let Some(top) = parse_number(attr(e, "top")?) {
                layout.margins.top = twips_to_pt(top);
            }
            if let Some(bottom) = parse_number(attr(e, "bottom")?) {
                layout.margins.bottom = twips_to_pt(bottom);
            }
            if let Some(left) = parse_number(attr(e, "left")?) {
                layout.margins.left = twips_to_pt(left);
            }
            if let Some(right) = parse_number(attr(e, "right")?) {
                layout.margins.right = twips_to_pt(right);
            }
            if let Some(header) = parse_number(attr(e, "header")?) {
                layout.header_distance = twips_to_pt(header);
            }
            if let Some(footer) = parse_number(attr(e, "footer")?) {
                layout.footer_distance = twips_to_pt(footer);
            }
            if let Some(gutter) = parse_number(attr(e, "gutter")?) {
                layout.gutter = twips_to_pt(gutter);
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parse `word/styles.xml` into the style sheet.
fn parse_styles(xml: &str) -> Result<StyleSheet> {
    let mut reader = Reader::from_str(xml);
    let mut sheet = StyleSheet::new();

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"styles" => {}
                b"style" => {
                    let style = parse_style(&mut reader, xml, &e)?;
                    sheet.push(style);
                }
                _ => {
                    let raw = capture_raw(&mut reader, xml, &e, start)?;
                    sheet.defaults.push_str(&raw);
                }
            },
            Event::Empty(e) if e.local_name().as_ref() != b"styles" => {
                sheet
                    .defaults
                    .push_str(&xml[start..reader.buffer_position()]);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(sheet)
}

/// Parse one `w:style` element.
fn parse_style(reader: &mut Reader<&[u8]>, xml: &str, start_tag: &BytesStart) -> Result<StyleDefinition> {
    let id = attr(start_tag, "styleId")?.unwrap_or_default();
    let mut style = StyleDefinition::new(id);
    style.name = None;
    if let Some(style_type) = attr(start_tag, "type")? {
        style.style_type = StyleType::from_docx(&style_type);
    }
    style.default_style = attr(start_tag, "default")?
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"rPr" => parse_font_props(reader, xml, &mut style.font, &mut style.font_extra)?,
                b"pPr" => parse_style_format(reader, xml, &mut style)?,
                _ => style.extra.push_str(&capture_raw(reader, xml, &e, start)?),
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"name" => style.name = attr(&e, "val")?,
                b"basedOn" => style.based_on = attr(&e, "val")?,
                _ => style.extra.push_str(&xml[start..reader.buffer_position()]),
            },
            Event::End(e) if e.local_name().as_ref() == b"style" => break,
            Event::Eof => return Err(Error::XmlParse("unterminated style".to_string())),
            _ => {}
        }
    }

    Ok(style)
}

/// Parse a style's `w:pPr` template.
fn parse_style_format(
    reader: &mut Reader<&[u8]>,
    xml: &str,
    style: &mut StyleDefinition,
) -> Result<()> {
    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => {
                if format_prop(&e, &mut style.format)? {
                    reader.read_to_end(e.to_end().into_owned().name())?;
                } else {
                    style
                        .format_extra
                        .push_str(&capture_raw(reader, xml, &e, start)?);
                }
            }
            Event::Empty(e) => {
                if !format_prop(&e, &mut style.format)? {
                    style
                        .format_extra
                        .push_str(&xml[start..reader.buffer_position()]);
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"pPr" => break,
            Event::Eof => return Err(Error::XmlParse("unterminated style properties".to_string())),
            _ => {}
        }
    }

    Ok(())
}

/// Read one known paragraph-format child (`w:spacing`, `w:ind`). Returns
/// `false` for elements the model does not interpret.
fn format_prop(e: &BytesStart, format: &mut ParagraphFormat) -> Result<bool> {
    match e.local_name().as_ref() {
        b"spacing" => parse_spacing(e, format)?,
        b"ind" => parse_indent(e, format)?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Parse `docProps/core.xml` into metadata.
fn parse_core_props(xml: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(xml);
    let mut metadata = Metadata::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"coreProperties" {
                    continue;
                }
                let text = reader.read_text(e.to_end().into_owned().name())?.into_owned();
                let value = (!text.trim().is_empty()).then(|| text.trim().to_string());
                match name.as_slice() {
                    b"title" => metadata.title = value,
                    b"creator" => metadata.author = value,
                    b"subject" => metadata.subject = value,
                    b"keywords" => metadata.keywords = value,
                    b"lastModifiedBy" => metadata.last_modified_by = value,
                    b"created" => metadata.created = value.as_deref().and_then(parse_date),
                    b"modified" => metadata.modified = value.as_deref().and_then(parse_date),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(metadata)
}

/// Parse a W3CDTF timestamp.
fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Find an attribute by local name and return its unescaped value.
fn attr(e: &BytesStart, name: &str) -> Result<Option<String>> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(|err| Error::XmlParse(err.to_string()))?;
        if attribute.key.local_name().as_ref() == name.as_bytes() {
            let value = attribute
                .unescape_value()
                .map_err(|err| Error::XmlParse(err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Parse a numeric attribute value.
fn parse_number(value: Option<String>) -> Option<i32> {
    value.and_then(|v| v.parse().ok())
}

/// Interpret an OOXML on/off attribute value; a missing value means "on".
fn parse_on_off(value: Option<String>) -> bool {
    match value.as_deref() {
        None => true,
        Some("0") | Some("false") | Some("off") | Some("none") => false,
        Some(_) => true,
    }
}
