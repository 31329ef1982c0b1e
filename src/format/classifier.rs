//! Section classification.
//!
//! A single forward scan over the body paragraphs tracks which logical
//! section of the manuscript the scan is in. The state is a small `Copy`
//! value threaded through the scan; each paragraph produces the next state
//! from the previous one.

/// Textual marker opening the foreign-language abstract.
pub(crate) const ABSTRACT_MARKER: &str = "ABSTRACT";

/// Textual marker opening the textual body (first numbered section).
pub(crate) const INTRODUCTION_MARKER: &str = "1 INTRODUÇÃO";

/// Textual marker opening the references list.
pub(crate) const REFERENCES_MARKER: &str = "REFERÊNCIAS";

/// Which logical sections the scan is currently inside.
///
/// The three flags are independent: the abstract flag can be re-armed by a
/// later marker even after the body or references have been entered, and
/// the references flag is never cleared once set. Paragraphs seen before
/// any marker (title page, resumo) match no flag and are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionState {
    /// Inside the abstract section
    pub in_abstract: bool,

    /// Inside the numbered textual body
    pub in_body: bool,

    /// Inside the references list
    pub in_references: bool,
}

impl SectionState {
    /// The initial state: before any marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the state after seeing a paragraph with the given text.
    ///
    /// At most one transition fires per paragraph, checked in priority
    /// order; a paragraph matching no marker leaves the state unchanged.
    #[must_use]
    pub fn advance(&self, text: &str) -> Self {
        let marker = text.trim().to_uppercase();
        if marker.contains(ABSTRACT_MARKER) {
            Self {
                in_abstract: true,
                ..*self
            }
        } else if marker.contains(INTRODUCTION_MARKER) {
            Self {
                in_abstract: false,
                in_body: true,
                ..*self
            }
        } else if marker == REFERENCES_MARKER {
            Self {
                in_body: false,
                in_references: true,
                ..*self
            }
        } else {
            *self
        }
    }

    /// Check if any section has been entered.
    pub fn is_preamble(&self) -> bool {
        !self.in_abstract && !self.in_body && !self.in_references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(texts: &[&str]) -> SectionState {
        texts
            .iter()
            .fold(SectionState::new(), |state, text| state.advance(text))
    }

    #[test]
    fn test_initial_state_is_preamble() {
        let state = SectionState::new();
        assert!(state.is_preamble());
    }

    #[test]
    fn test_abstract_marker_is_substring_match() {
        let state = SectionState::new().advance("  my abstract in english  ");
        assert!(state.in_abstract);
        assert!(!state.in_body);
    }

    #[test]
    fn test_introduction_clears_abstract() {
        let state = scan(&["ABSTRACT", "some text", "1 Introdução"]);
        assert!(!state.in_abstract);
        assert!(state.in_body);
    }

    #[test]
    fn test_references_requires_exact_match() {
        let state = scan(&["1 INTRODUÇÃO", "as referências indicam que..."]);
        assert!(state.in_body);
        assert!(!state.in_references);

        let state = state.advance("  referências  ");
        assert!(!state.in_body);
        assert!(state.in_references);
    }

    #[test]
    fn test_references_is_terminal() {
        let state = scan(&["1 INTRODUÇÃO", "REFERÊNCIAS", "AUTHOR, A. Title."]);
        assert!(state.in_references);

        // A later introduction marker re-enters the body but never clears
        // the references flag.
        let state = state.advance("1 INTRODUÇÃO revisited");
        assert!(state.in_body);
        assert!(state.in_references);
    }

    #[test]
    fn test_abstract_can_be_rearmed_after_body() {
        let state = scan(&["1 INTRODUÇÃO", "body text", "ABSTRACT again"]);
        assert!(state.in_abstract);
        assert!(state.in_body);
    }

    #[test]
    fn test_unmarked_paragraph_keeps_state() {
        let state = scan(&["1 INTRODUÇÃO"]);
        assert_eq!(state.advance("plain body paragraph"), state);
        assert_eq!(state.advance(""), state);
    }

    #[test]
    fn test_abstract_wins_over_other_markers() {
        // A paragraph containing both markers fires only the highest-
        // priority transition.
        let state = SectionState::new().advance("ABSTRACT / 1 INTRODUÇÃO");
        assert!(state.in_abstract);
        assert!(!state.in_body);
    }

    #[test]
    fn test_missing_introduction_never_enters_body() {
        let state = scan(&["Título", "texto solto", "2 METODOLOGIA"]);
        assert!(!state.in_body);
        assert!(state.is_preamble());
    }
}
