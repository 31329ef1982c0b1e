//! Global page layout and style redefinition.
//!
//! Runs exactly once per transformation, before any paragraph is visited:
//! the per-paragraph rules assign styles by id and rely on these
//! definitions already being in place.

use crate::error::{Error, Result};
use crate::model::{Document, Margins, StyleDefinition, HEADING_1, HEADING_2, NORMAL};

const BODY_FONT: &str = "Arial";
const BODY_SIZE: f32 = 12.0;
const BLACK: &str = "000000";

/// Apply the ABNT page margins and redefine the `Normal`, `Heading1` and
/// `Heading2` styles.
///
/// Fails with [`Error::StyleNotFound`] when any of the three ids is absent
/// from the document's style sheet; nothing else is mutated in that case
/// before the error surfaces.
pub(crate) fn apply(doc: &mut Document) -> Result<()> {
    for id in [NORMAL, HEADING_1, HEADING_2] {
        if !doc.styles.contains(id) {
            return Err(Error::StyleNotFound(id.to_string()));
        }
    }

    for section in doc.sections_mut() {
        section.margins = Margins::abnt();
    }

    let normal = style_mut(doc, NORMAL)?;
    normal.font.name = Some(BODY_FONT.to_string());
    normal.font.size = Some(BODY_SIZE);
    normal.font.color = Some(BLACK.to_string());

    let h1 = style_mut(doc, HEADING_1)?;
    redefine_heading(h1, true, 18.0);

    let h2 = style_mut(doc, HEADING_2)?;
    redefine_heading(h2, false, 12.0);

    log::debug!("applied page margins and redefined base styles");
    Ok(())
}

fn style_mut<'a>(doc: &'a mut Document, id: &str) -> Result<&'a mut StyleDefinition> {
    doc.styles
        .get_mut(id)
        .ok_or_else(|| Error::StyleNotFound(id.to_string()))
}

/// Set the shared heading attributes: Arial 12 pt bold black, 1.5 line
/// spacing, 6 pt space after. Primary headings are uppercased and carry
/// more space before.
fn redefine_heading(style: &mut StyleDefinition, all_caps: bool, space_before: f32) {
    style.font.name = Some(BODY_FONT.to_string());
    style.font.size = Some(BODY_SIZE);
    style.font.bold = Some(true);
    style.font.all_caps = Some(all_caps);
    style.font.color = Some(BLACK.to_string());
    style.format.space_before = Some(space_before);
    style.format.space_after = Some(6.0);
    style.format.line_spacing = Some(1.5);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    #[test]
    fn test_margins_applied_to_every_section() {
        let mut doc = Document::new();
        let mut p = Paragraph::with_text("break");
        p.section_break = Some(Default::default());
        doc.add_paragraph(p);

        apply(&mut doc).unwrap();

        assert_eq!(doc.sections[0].margins, Margins::abnt());
        let Some(section) = doc.paragraphs().next().unwrap().section_break.as_ref() else {
            panic!("section break lost");
        };
        assert_eq!(section.margins, Margins::abnt());
    }

    #[test]
    fn test_style_redefinition() {
        let mut doc = Document::new();
        apply(&mut doc).unwrap();

        let normal = doc.styles.get(NORMAL).unwrap();
        assert_eq!(normal.font.name.as_deref(), Some("Arial"));
        assert_eq!(normal.font.size, Some(12.0));
        assert_eq!(normal.font.color.as_deref(), Some("000000"));
        assert!(normal.font.bold.is_none());

        let h1 = doc.styles.get(HEADING_1).unwrap();
        assert_eq!(h1.font.bold, Some(true));
        assert_eq!(h1.font.all_caps, Some(true));
        assert_eq!(h1.format.space_before, Some(18.0));
        assert_eq!(h1.format.space_after, Some(6.0));
        assert_eq!(h1.format.line_spacing, Some(1.5));

        let h2 = doc.styles.get(HEADING_2).unwrap();
        assert_eq!(h2.font.all_caps, Some(false));
        assert_eq!(h2.format.space_before, Some(12.0));
    }

    #[test]
    fn test_missing_style_aborts_before_mutation() {
        let mut doc = Document::new();
        doc.styles = crate::model::StyleSheet::new();
        doc.styles.push(StyleDefinition::new(NORMAL));

        let original_margins = doc.sections[0].margins;
        let result = apply(&mut doc);

        assert!(matches!(result, Err(Error::StyleNotFound(id)) if id == HEADING_1));
        assert_eq!(doc.sections[0].margins, original_margins);
    }

    #[test]
    fn test_idempotent() {
        let mut doc = Document::new();
        apply(&mut doc).unwrap();
        let first = doc.clone();
        apply(&mut doc).unwrap();

        assert_eq!(
            doc.styles.get(NORMAL).unwrap().font.size,
            first.styles.get(NORMAL).unwrap().font.size
        );
        assert_eq!(doc.sections[0].margins, first.sections[0].margins);
    }
}
