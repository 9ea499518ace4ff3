use crate::parsing::{cursor::LineCursor, text::Text};

/// An ATX (`# Title`) or setext (`Title` + `===`) heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    pub text: Text,
}

impl Heading {
    /// The ATX heading marker character.
    pub const MARKER: u8 = b'#';
    /// Deepest heading level.
    pub const MAX_LEVEL: usize = 6;

    pub fn new(text: Text, level: u8) -> Self {
        Self { level, text }
    }

    /// Parses an ATX heading from the current line.
    ///
    /// Accepts up to three spaces of indentation, one to six `#`, then a space
    /// or the end of the line. Consumes exactly one line on success.
    pub fn parse(cursor: &mut LineCursor<'_>) -> Option<Self> {
        let line = cursor.current()?;
        let bytes = line.as_bytes();

        let indent = bytes.iter().take(3).take_while(|&&b| b == b' ').count();
        let level = bytes[indent..]
            .iter()
            .take_while(|&&b| b == Self::MARKER)
            .count();

        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        if bytes.get(indent + level).is_some_and(|&b| b != b' ') {
            return None;
        }

        let text = Text::new(line[indent + level..].trim());
        cursor.advance();
        Some(Self::new(text, level as u8))
    }
}

/// Probes `line` for a setext heading underline, returning the level it
/// denotes: `=` gives 1, `-` gives 2.
pub fn setext_underline_level(line: &str) -> Option<u8> {
    let bytes = line.as_bytes();
    let indent = bytes.iter().take_while(|&&b| b == b' ').count();
    if indent > 3 {
        return None;
    }

    let rest = line[indent..].trim_end();
    let marker = *rest.as_bytes().first()?;
    if !rest.bytes().all(|b| b == marker) {
        return None;
    }
    match marker {
        b'=' => Some(1),
        b'-' => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(line: &str) -> Option<Heading> {
        Heading::parse(&mut LineCursor::new(line))
    }

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("###### Deep", 6, "Deep")]
    #[case("   ## Indented", 2, "Indented")]
    #[case("#", 1, "")]
    #[case("##   spaced out  ", 2, "spaced out")]
    fn parses_atx_headings(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        let heading = parse(line).unwrap();
        assert_eq!(heading.level, level);
        assert_eq!(heading.text.as_str(), text);
    }

    #[rstest]
    #[case("####### Too deep")]
    #[case("#NoSpace")]
    #[case("    # Four spaces")]
    #[case("Plain text")]
    #[case("")]
    fn rejects_non_headings(#[case] line: &str) {
        let mut cursor = LineCursor::new(line);
        assert_eq!(Heading::parse(&mut cursor), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn consumes_one_line() {
        let mut cursor = LineCursor::new("# One\nTwo");
        Heading::parse(&mut cursor).unwrap();
        assert_eq!(cursor.current(), Some("Two"));
    }

    #[rstest]
    #[case("===", Some(1))]
    #[case("=", Some(1))]
    #[case("   ---  ", Some(2))]
    #[case("-", Some(2))]
    #[case("    ===", None)]
    #[case("=-=", None)]
    #[case("- - -", None)]
    #[case("", None)]
    #[case("***", None)]
    fn setext_underlines(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(setext_underline_level(line), expected);
    }
}
