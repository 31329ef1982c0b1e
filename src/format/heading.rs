//! Numbered section heading detection.

use regex::Regex;
use std::sync::LazyLock;

/// Leading numeric section prefix followed by whitespace, e.g. "2.1 Methods".
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d[.\d]*)\s").unwrap());

/// A numbered section heading detected in a body paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The numeric prefix (e.g. "2.1")
    pub number: String,

    /// Nesting level: the number of dot separators plus one
    pub level: u8,
}

impl Heading {
    /// Check if this is a primary (top-level) section heading.
    pub fn is_primary(&self) -> bool {
        self.level == 1
    }
}

/// Match a trimmed paragraph text against the numbered-heading pattern.
pub fn parse_heading(text: &str) -> Option<Heading> {
    let captures = HEADING_PATTERN.captures(text)?;
    let number = captures[1].to_string();
    let level = (number.matches('.').count() + 1).min(u8::MAX as usize) as u8;
    Some(Heading { number, level })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_heading() {
        let heading = parse_heading("1 INTRODUÇÃO").unwrap();
        assert_eq!(heading.number, "1");
        assert_eq!(heading.level, 1);
        assert!(heading.is_primary());
    }

    #[test]
    fn test_nested_headings() {
        assert_eq!(parse_heading("2.1 Methodology").unwrap().level, 2);
        assert_eq!(parse_heading("3.2.1 Details").unwrap().level, 3);
        assert_eq!(parse_heading("10.4 Large numbers").unwrap().number, "10.4");
    }

    #[test]
    fn test_trailing_dot_counts_as_separator() {
        // "2. Title" carries a separator, so it is not a primary heading.
        let heading = parse_heading("2. Metodologia").unwrap();
        assert_eq!(heading.number, "2.");
        assert_eq!(heading.level, 2);
    }

    #[test]
    fn test_requires_whitespace_after_number() {
        assert!(parse_heading("1INTRODUÇÃO").is_none());
        assert!(parse_heading("2.1").is_none());
    }

    #[test]
    fn test_non_headings() {
        assert!(parse_heading("Em 1995, os autores...").is_none());
        assert!(parse_heading("").is_none());
        assert!(parse_heading("Título do trabalho").is_none());
    }
}
