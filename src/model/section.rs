//! Page-layout sections and margins.
//!
//! A layout section is a page-level region carrying page size and margins,
//! distinct from the abstract/body/references classification applied to
//! paragraphs.

use super::units::cm;
use serde::{Deserialize, Serialize};

/// Page layout for one section of the document.
///
/// Lengths are points. Defaults match an A4 page with one-inch margins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionLayout {
    /// Page width
    pub page_width: f32,

    /// Page height
    pub page_height: f32,

    /// Page margins
    pub margins: Margins,

    /// Distance from the page edge to the header
    pub header_distance: f32,

    /// Distance from the page edge to the footer
    pub footer_distance: f32,

    /// Gutter width
    pub gutter: f32,

    /// Unrecognized `w:sectPr` children, preserved verbatim
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) extra: String,
}

impl SectionLayout {
    /// Create a section layout with default page geometry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            // A4: 11906 x 16838 twips
            page_width: 595.3,
            page_height: 841.9,
            margins: Margins::default(),
            header_distance: 35.4,
            footer_distance: 35.4,
            gutter: 0.0,
            extra: String::new(),
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,

    /// Bottom margin
    pub bottom: f32,

    /// Left margin
    pub left: f32,

    /// Right margin
    pub right: f32,
}

impl Margins {
    /// The ABNT page margins: 3 cm top/left, 2 cm bottom/right.
    pub fn abnt() -> Self {
        Self {
            top: cm(3.0),
            bottom: cm(2.0),
            left: cm(3.0),
            right: cm(2.0),
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        // One inch on every side
        Self {
            top: 72.0,
            bottom: 72.0,
            left: 72.0,
            right: 72.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abnt_margins() {
        let margins = Margins::abnt();
        assert!((margins.top - cm(3.0)).abs() < 1e-6);
        assert!((margins.bottom - cm(2.0)).abs() < 1e-6);
        assert!((margins.left - cm(3.0)).abs() < 1e-6);
        assert!((margins.right - cm(2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_default_layout() {
        let layout = SectionLayout::new();
        assert!(layout.page_height > layout.page_width);
        assert_eq!(layout.margins, Margins::default());
    }
}
