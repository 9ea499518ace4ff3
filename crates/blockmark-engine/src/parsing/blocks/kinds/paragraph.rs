use crate::parsing::text::Text;

/// A paragraph: the block produced when no other block opener matches.
///
/// Built by the container parser from accumulated lines rather than by a
/// parser of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: Text,
}

impl Paragraph {
    pub fn new(text: Text) -> Self {
        Self { text }
    }
}
