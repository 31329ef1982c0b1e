//! Section-specific formatting rules.
//!
//! The rules form an ordered table evaluated top to bottom for each
//! paragraph; the first rule whose guard matches claims the paragraph and
//! no later rule runs. The order encodes the section priority: abstract
//! rules shadow body rules, body rules shadow references rules. A
//! paragraph claimed by no rule (preamble, blank lines) is left untouched.

use crate::model::units::cm;
use crate::model::{Alignment, Paragraph, Run, HEADING_1, HEADING_2, NORMAL};

use super::classifier::{SectionState, ABSTRACT_MARKER, REFERENCES_MARKER};
use super::heading::parse_heading;
use super::quotation::{is_long_quotation, strip_marker};

/// A formatting rule: mutates the paragraph and returns `true` when its
/// guard matched, `false` to pass the paragraph on.
type Rule = fn(&mut Paragraph, &SectionState) -> bool;

/// The rule table, in priority order.
const RULES: &[(&str, Rule)] = &[
    ("abstract-heading", abstract_heading),
    ("abstract-text", abstract_text),
    ("section-heading", section_heading),
    ("long-quotation", long_quotation),
    ("body-text", body_text),
    ("references-heading", references_heading),
    ("references-entry", references_entry),
];

/// Apply the first matching rule to a paragraph.
pub(crate) fn apply_first_match(paragraph: &mut Paragraph, state: &SectionState) {
    for (name, rule) in RULES {
        if rule(paragraph, state) {
            log::trace!("rule {name} claimed paragraph");
            return;
        }
    }
}

/// The "ABSTRACT" marker line itself: centered, bold, `Normal` style.
fn abstract_heading(paragraph: &mut Paragraph, state: &SectionState) -> bool {
    if !state.in_abstract {
        return false;
    }
    let text = paragraph.text();
    if text.trim().to_uppercase() != ABSTRACT_MARKER {
        return false;
    }
    paragraph.style = NORMAL.to_string();
    paragraph.alignment = Some(Alignment::Center);
    render_bold(paragraph, text);
    true
}

/// Abstract body text: justified, 1.5 line spacing, nothing else changed.
fn abstract_text(paragraph: &mut Paragraph, state: &SectionState) -> bool {
    if !state.in_abstract || paragraph.is_empty() {
        return false;
    }
    paragraph.format.line_spacing = Some(1.5);
    paragraph.alignment = Some(Alignment::Justify);
    true
}

/// Numbered heading in the body: assign the heading style for its level.
/// The style carries all the formatting; the text is normalized to its
/// trimmed form.
fn section_heading(paragraph: &mut Paragraph, state: &SectionState) -> bool {
    if !state.in_body {
        return false;
    }
    let trimmed = paragraph.text().trim().to_string();
    let Some(heading) = parse_heading(&trimmed) else {
        return false;
    };
    paragraph.set_text(trimmed);
    paragraph.style = if heading.is_primary() {
        HEADING_1.to_string()
    } else {
        HEADING_2.to_string()
    };
    true
}

/// Long quotation in the body: marker stripped, 4 cm indent, single
/// spacing, 10 pt.
fn long_quotation(paragraph: &mut Paragraph, state: &SectionState) -> bool {
    if !state.in_body {
        return false;
    }
    let text = paragraph.text();
    let trimmed = text.trim();
    if !is_long_quotation(trimmed) {
        return false;
    }
    paragraph.set_text(strip_marker(trimmed));
    paragraph.alignment = Some(Alignment::Justify);
    for run in &mut paragraph.runs {
        run.font.size = Some(10.0);
    }
    paragraph.format.left_indent = Some(cm(4.0));
    paragraph.format.first_line_indent = Some(0.0);
    paragraph.format.line_spacing = Some(1.0);
    paragraph.format.space_before = Some(6.0);
    paragraph.format.space_after = Some(6.0);
    true
}

/// Plain body text: `Normal`, justified, 1.5 spacing, 1.25 cm first-line
/// indent.
fn body_text(paragraph: &mut Paragraph, state: &SectionState) -> bool {
    if !state.in_body || paragraph.is_empty() {
        return false;
    }
    paragraph.style = NORMAL.to_string();
    paragraph.alignment = Some(Alignment::Justify);
    paragraph.format.line_spacing = Some(1.5);
    paragraph.format.first_line_indent = Some(cm(1.25));
    paragraph.format.space_before = Some(0.0);
    paragraph.format.space_after = Some(6.0);
    true
}

/// The "REFERÊNCIAS" marker line itself: centered, bold, `Normal` style.
fn references_heading(paragraph: &mut Paragraph, state: &SectionState) -> bool {
    if !state.in_references {
        return false;
    }
    let text = paragraph.text();
    if text.trim().to_uppercase() != REFERENCES_MARKER {
        return false;
    }
    paragraph.style = NORMAL.to_string();
    paragraph.alignment = Some(Alignment::Center);
    render_bold(paragraph, text);
    true
}

/// A bibliography entry: left-aligned, single-spaced, 12 pt space after
/// to separate successive entries without blank paragraphs.
fn references_entry(paragraph: &mut Paragraph, state: &SectionState) -> bool {
    if !state.in_references || paragraph.is_empty() {
        return false;
    }
    paragraph.alignment = Some(Alignment::Left);
    paragraph.format.first_line_indent = Some(0.0);
    paragraph.format.line_spacing = Some(1.0);
    paragraph.format.space_before = Some(0.0);
    paragraph.format.space_after = Some(12.0);
    true
}

/// Replace the paragraph content with its own text as a single bold run.
fn render_bold(paragraph: &mut Paragraph, text: String) {
    paragraph.runs.clear();
    paragraph.add_run(Run::bold(text));
}
