//! Document model types for word-processing content.
//!
//! This module defines the paragraph/run/style representation that bridges
//! DOCX parsing and the formatting engine. Lengths are points throughout;
//! `units` converts to and from the DOCX wire units.

mod document;
mod paragraph;
mod section;
mod style;
pub mod units;

pub use document::{Block, Document, Metadata};
pub use paragraph::{Alignment, FontProps, Paragraph, ParagraphFormat, Run};
pub use section::{Margins, SectionLayout};
pub use style::{StyleDefinition, StyleSheet, StyleType, HEADING_1, HEADING_2, NORMAL};
