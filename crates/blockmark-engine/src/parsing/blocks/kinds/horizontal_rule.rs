use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::cursor::LineCursor;

/// A thematic break (`---`, `***`, `___`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalRule;

impl HorizontalRule {
    /// Parses a rule from the current line, consuming it on success.
    pub fn parse(cursor: &mut LineCursor<'_>) -> Option<Self> {
        static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
        let rule_regex = RULE_REGEX.get_or_init(|| {
            Regex::new(r"^ {0,3}(?:(?:-\s*){3,}|(?:_\s*){3,}|(?:\*\s*){3,})$")
                .expect("Invalid horizontal rule regex")
        });

        let line = cursor.current()?;
        if !rule_regex.is_match(line) {
            return None;
        }
        cursor.advance();
        Some(HorizontalRule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---")]
    #[case("***")]
    #[case("___")]
    #[case(" - - -")]
    #[case("   *  *  *   ")]
    #[case("----------")]
    fn matches_rules(#[case] line: &str) {
        let mut cursor = LineCursor::new(line);
        assert_eq!(HorizontalRule::parse(&mut cursor), Some(HorizontalRule));
        assert!(cursor.is_end());
    }

    #[rstest]
    #[case("--")]
    #[case("-*-")]
    #[case("    ---")]
    #[case("--- a")]
    #[case("===")]
    fn rejects_non_rules(#[case] line: &str) {
        let mut cursor = LineCursor::new(line);
        assert_eq!(HorizontalRule::parse(&mut cursor), None);
        assert_eq!(cursor.current(), Some(line));
    }
}
