use crate::parsing::{
    blocks::container::ContainerBlock,
    cursor::{Context, LineCursor},
};

/// A `>`-prefixed block quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockQuote {
    pub contents: ContainerBlock,
}

impl BlockQuote {
    /// Parses a block quote by reading the following lines through a
    /// [`Context::BlockQuote`]; the quote ends at the first line without `>`.
    pub fn parse(cursor: &mut LineCursor<'_>) -> Option<Self> {
        cursor.with_context(Context::block_quote(), |cursor| {
            if cursor.is_end() {
                return None;
            }
            Some(Self {
                contents: ContainerBlock::parse(cursor),
            })
        })
    }
}
