//! # Block Parsing
//!
//! Recursive-descent block parsing over a [`LineCursor`](super::cursor::LineCursor).
//!
//! ## Parsing Model
//!
//! 1. **Block parsers** (`kinds`): every block kind owns its syntax knowledge and
//!    exposes `parse(cursor, ..) -> Option<Self>`. A parser that declines leaves
//!    the cursor where it was; one that matches consumes at least one line.
//!
//! 2. **Container orchestration** (`container`): `ContainerBlock::parse` tries the
//!    block parsers in a fixed precedence order, accumulates unclaimed lines into
//!    paragraphs and turns paragraph + underline pairs into setext headings.
//!    List items and block quotes recurse into `ContainerBlock::parse` with a
//!    cursor context pushed for their indentation or `>` prefix.
//!
//! ## Precedence
//!
//! Heading, Table, HorizontalRule, CodeBlock, List, CommentBlock, BlockQuote,
//! then setext underline, then paragraph text.
//!
//! ## Key Invariants
//!
//! - The grammar is total: every line is consumed by some rule
//! - A block that interrupts a paragraph is placed after that paragraph
//! - Blank lines never become blocks; they only flush paragraphs and feed the
//!   tight/loose bookkeeping of lists

pub mod container;
pub mod kinds;
pub mod types;

pub use container::{ContainerBlock, ParseContext};
pub use kinds::{
    Alignment, BlockQuote, CodeBlock, CodeBlockKind, Column, CommentBlock, Heading,
    HorizontalRule, List, Paragraph, Table,
};
pub use types::Block;
