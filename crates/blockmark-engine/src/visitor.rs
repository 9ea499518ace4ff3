//! Pre-order traversal of the document tree.
//!
//! A [`Visitor`] is called once per node. Its [`RecursionDecision`] decides
//! whether the walk descends into the node's children, skips them, or stops
//! altogether. `walk` only ever reports [`Walk::Continue`] or [`Walk::Break`].

use crate::parsing::{
    blocks::{
        Block, BlockQuote, CodeBlock, CommentBlock, ContainerBlock, Heading, HorizontalRule, List,
        Paragraph, Table,
    },
    text::Text,
};

/// What a visitor wants the walk to do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionDecision {
    /// Visit this node's children next.
    Recurse,
    /// Skip this node's children and go on with its next sibling.
    SkipSubtree,
    /// Stop the whole walk; no further nodes are visited.
    Break,
}

/// Outcome of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    Break,
}

/// A borrowed node of the document tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Container(&'a ContainerBlock),
    Heading(&'a Heading),
    Paragraph(&'a Paragraph),
    CodeBlock(&'a CodeBlock),
    List(&'a List),
    Table(&'a Table),
    HorizontalRule(&'a HorizontalRule),
    CommentBlock(&'a CommentBlock),
    BlockQuote(&'a BlockQuote),
    /// Inline content of a heading, paragraph or table cell.
    Text(&'a Text),
    /// Body of a code block.
    Code(&'a str),
    /// Body of a comment block.
    Comment(&'a str),
}

pub trait Visitor {
    fn visit(&mut self, node: Node<'_>) -> RecursionDecision;
}

impl<F> Visitor for F
where
    F: FnMut(Node<'_>) -> RecursionDecision,
{
    fn visit(&mut self, node: Node<'_>) -> RecursionDecision {
        self(node)
    }
}

fn descend<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: Node<'_>,
    children: impl FnOnce(&mut V) -> Walk,
) -> Walk {
    match visitor.visit(node) {
        RecursionDecision::Recurse => children(visitor),
        RecursionDecision::SkipSubtree => Walk::Continue,
        RecursionDecision::Break => Walk::Break,
    }
}

fn leaf<V: Visitor + ?Sized>(visitor: &mut V, node: Node<'_>) -> Walk {
    match visitor.visit(node) {
        RecursionDecision::Break => Walk::Break,
        RecursionDecision::Recurse | RecursionDecision::SkipSubtree => Walk::Continue,
    }
}

fn each<T>(items: impl IntoIterator<Item = T>, mut walk: impl FnMut(T) -> Walk) -> Walk {
    for item in items {
        if walk(item) == Walk::Break {
            return Walk::Break;
        }
    }
    Walk::Continue
}

impl ContainerBlock {
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Walk {
        descend(visitor, Node::Container(self), |visitor| {
            each(self.blocks(), |block| block.walk(visitor))
        })
    }
}

impl Block {
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Walk {
        match self {
            Block::Heading(heading) => descend(visitor, Node::Heading(heading), |visitor| {
                leaf(visitor, Node::Text(&heading.text))
            }),
            Block::Paragraph(paragraph) => {
                descend(visitor, Node::Paragraph(paragraph), |visitor| {
                    leaf(visitor, Node::Text(&paragraph.text))
                })
            }
            // Language and style are attributes, not children.
            Block::CodeBlock(code) => descend(visitor, Node::CodeBlock(code), |visitor| {
                leaf(visitor, Node::Code(&code.code))
            }),
            Block::List(list) => descend(visitor, Node::List(list), |visitor| {
                each(list.items(), |item| item.walk(visitor))
            }),
            Block::Table(table) => descend(visitor, Node::Table(table), |visitor| {
                let headers = table.columns.iter().map(|column| &column.header);
                let cells = table.rows.iter().flatten();
                each(headers.chain(cells), |text| leaf(visitor, Node::Text(text)))
            }),
            Block::HorizontalRule(rule) => leaf(visitor, Node::HorizontalRule(rule)),
            Block::CommentBlock(comment) => {
                descend(visitor, Node::CommentBlock(comment), |visitor| {
                    leaf(visitor, Node::Comment(&comment.comment))
                })
            }
            Block::BlockQuote(quote) => descend(visitor, Node::BlockQuote(quote), |visitor| {
                quote.contents.walk(visitor)
            }),
        }
    }
}
