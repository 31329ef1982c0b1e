//! Paragraph and run-level types.

use super::section::SectionLayout;
use super::style;
use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Style id referenced by this paragraph (`Normal` when unset)
    pub style: String,

    /// Paragraph alignment; `None` inherits from the style
    pub alignment: Option<Alignment>,

    /// Direct paragraph formatting
    pub format: ParagraphFormat,

    /// Text runs in the paragraph
    pub runs: Vec<Run>,

    /// Section properties when this paragraph ends a page-layout section
    pub section_break: Option<SectionLayout>,

    /// Unrecognized `w:pPr` children, preserved verbatim for round-tripping
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) extra_props: String,
}

impl Paragraph {
    /// Create a new empty paragraph referencing the `Normal` style.
    pub fn new() -> Self {
        Self {
            style: style::NORMAL.to_string(),
            alignment: None,
            format: ParagraphFormat::default(),
            runs: Vec::new(),
            section_break: None,
            extra_props: String::new(),
        }
    }

    /// Create a paragraph with a single plain-text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(Run::new(text));
        p
    }

    /// Add a run to the paragraph.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Get the paragraph text, concatenated from its runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Replace all runs with a single unformatted run holding `text`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.runs.clear();
        self.runs.push(Run::new(text));
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of text with consistent font attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Font attributes
    pub font: FontProps,

    /// Unrecognized `w:rPr` children, preserved verbatim
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) extra_props: String,

    /// Non-text run content (breaks, tabs, drawings), preserved verbatim
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) extra_content: String,
}

impl Run {
    /// Create a new text run with no direct formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontProps {
                bold: Some(true),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Check if this run carries no text or preserved content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.extra_content.is_empty()
    }
}

/// Font attributes shared by runs and style definitions.
///
/// Every attribute is tri-state: `None` inherits, `Some(value)` overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontProps {
    /// Font name (e.g. "Arial")
    pub name: Option<String>,

    /// Font size in points
    pub size: Option<f32>,

    /// Bold
    pub bold: Option<bool>,

    /// Render text in capital letters (heading transform)
    pub all_caps: Option<bool>,

    /// Text color as hex `RRGGBB` (no leading `#`)
    pub color: Option<String>,
}

impl FontProps {
    /// Check if any attribute is set.
    pub fn is_set(&self) -> bool {
        self.name.is_some()
            || self.size.is_some()
            || self.bold.is_some()
            || self.all_caps.is_some()
            || self.color.is_some()
    }
}

/// Direct paragraph formatting.
///
/// Lengths are points; `line_spacing` is a multiplier (1.0 = single).
/// `None` fields inherit from the paragraph's style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParagraphFormat {
    /// Line spacing multiplier
    pub line_spacing: Option<f32>,

    /// Space before the paragraph in points
    pub space_before: Option<f32>,

    /// Space after the paragraph in points
    pub space_after: Option<f32>,

    /// First-line indent in points
    pub first_line_indent: Option<f32>,

    /// Left indent in points
    pub left_indent: Option<f32>,
}

impl ParagraphFormat {
    /// Check if any field is set.
    pub fn is_set(&self) -> bool {
        self.line_spacing.is_some()
            || self.space_before.is_some()
            || self.space_after.is_some()
            || self.first_line_indent.is_some()
            || self.left_indent.is_some()
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Parse a `w:jc` value. Unknown values map to `None` (inherit).
    pub(crate) fn from_docx(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" | "end" => Some(Alignment::Right),
            "both" | "justify" | "distribute" => Some(Alignment::Justify),
            _ => None,
        }
    }

    /// The `w:jc` value for this alignment.
    pub(crate) fn as_docx(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}
