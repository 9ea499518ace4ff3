use crate::parsing::cursor::LineCursor;

/// An HTML comment (`<!-- ... -->`) standing on its own lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Comment body with the delimiters removed.
    pub comment: String,
}

impl CommentBlock {
    pub const START: &'static str = "<!--";
    pub const END: &'static str = "-->";

    /// Parses a comment starting on the current line.
    ///
    /// Runs until a line ending in `-->` (which may be the opening line) or
    /// the end of input.
    pub fn parse(cursor: &mut LineCursor<'_>) -> Option<Self> {
        let first = cursor.current()?;
        let mut line = first.strip_prefix(Self::START)?;

        let mut comment = String::new();
        loop {
            let stripped = line.strip_suffix(Self::END);
            comment.push_str(stripped.unwrap_or(line));
            cursor.advance();

            if stripped.is_some() {
                break;
            }
            match cursor.current() {
                Some(next) => {
                    comment.push('\n');
                    line = next;
                }
                None => break,
            }
        }

        Some(Self { comment })
    }
}
