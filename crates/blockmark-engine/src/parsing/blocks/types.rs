use super::kinds::{
    BlockQuote, CodeBlock, CommentBlock, Heading, HorizontalRule, List, Paragraph, Table,
};

/// A block of the document tree.
///
/// The set of block kinds is closed; renderers and the visitor match on it
/// exhaustively. List items are [`ContainerBlock`](super::ContainerBlock)s
/// owned by their [`List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    /// A fenced or indented code block.
    CodeBlock(CodeBlock),
    List(List),
    Table(Table),
    HorizontalRule(HorizontalRule),
    CommentBlock(CommentBlock),
    BlockQuote(BlockQuote),
}
