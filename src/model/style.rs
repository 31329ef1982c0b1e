//! Named styles and the document style sheet.

use super::paragraph::{FontProps, ParagraphFormat};
use serde::{Deserialize, Serialize};

/// Style id of the body-text style.
pub const NORMAL: &str = "Normal";

/// Style id of the primary-section heading style.
pub const HEADING_1: &str = "Heading1";

/// Style id of the secondary-section heading style.
pub const HEADING_2: &str = "Heading2";

/// A named style definition shared by every paragraph referencing its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// Style id referenced by paragraphs (`w:styleId`)
    pub id: String,

    /// Style type
    pub style_type: StyleType,

    /// Display name (`w:name`)
    pub name: Option<String>,

    /// Id of the style this one is based on
    pub based_on: Option<String>,

    /// Font attribute template
    pub font: FontProps,

    /// Paragraph-format template
    pub format: ParagraphFormat,

    /// Whether this is the default style of its type (`w:default`)
    #[serde(default)]
    pub(crate) default_style: bool,

    /// Unrecognized `w:style` children, preserved verbatim
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) extra: String,

    /// Unrecognized `w:rPr` children, preserved verbatim
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) font_extra: String,

    /// Unrecognized `w:pPr` children, preserved verbatim
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) format_extra: String,
}

impl StyleDefinition {
    /// Create a new paragraph style with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: Some(id.clone()),
            id,
            style_type: StyleType::Paragraph,
            based_on: None,
            font: FontProps::default(),
            format: ParagraphFormat::default(),
            default_style: false,
            extra: String::new(),
            font_extra: String::new(),
            format_extra: String::new(),
        }
    }
}

/// The kind of entity a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleType {
    /// Paragraph style
    #[default]
    Paragraph,
    /// Character (run) style
    Character,
    /// Table style
    Table,
    /// Numbering style
    Numbering,
}

impl StyleType {
    pub(crate) fn from_docx(value: &str) -> Self {
        match value {
            "character" => StyleType::Character,
            "table" => StyleType::Table,
            "numbering" => StyleType::Numbering,
            _ => StyleType::Paragraph,
        }
    }

    pub(crate) fn as_docx(&self) -> &'static str {
        match self {
            StyleType::Paragraph => "paragraph",
            StyleType::Character => "character",
            StyleType::Table => "table",
            StyleType::Numbering => "numbering",
        }
    }
}

/// The document style sheet: style definitions keyed by id, in file order.
///
/// Redefining an entry is global: every paragraph referencing the id
/// observes the change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: Vec<StyleDefinition>,

    /// Raw `w:docDefaults`/`w:latentStyles` passthrough from `styles.xml`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) defaults: String,
}

impl StyleSheet {
    /// Create an empty style sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style sheet holding the `Normal`, `Heading1` and `Heading2`
    /// definitions every word-processing template carries.
    pub fn with_defaults() -> Self {
        let mut sheet = Self::new();
        let mut normal = StyleDefinition::new(NORMAL);
        normal.default_style = true;
        sheet.push(normal);

        let mut h1 = StyleDefinition::new(HEADING_1);
        h1.name = Some("heading 1".to_string());
        h1.based_on = Some(NORMAL.to_string());
        sheet.push(h1);

        let mut h2 = StyleDefinition::new(HEADING_2);
        h2.name = Some("heading 2".to_string());
        h2.based_on = Some(NORMAL.to_string());
        sheet.push(h2);

        sheet
    }

    /// Look up a style by id.
    pub fn get(&self, id: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Look up a style by id for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut StyleDefinition> {
        self.styles.iter_mut().find(|s| s.id == id)
    }

    /// Check if a style id is defined.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Append a style definition.
    pub fn push(&mut self, style: StyleDefinition) {
        self.styles.push(style);
    }

    /// Iterate over style definitions in file order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    /// Number of style definitions.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the sheet has no definitions.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
