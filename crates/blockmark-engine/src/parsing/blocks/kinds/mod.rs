pub mod block_quote;
pub mod code_block;
pub mod comment_block;
pub mod heading;
pub mod horizontal_rule;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_block::{CodeBlock, CodeBlockKind};
pub use comment_block::CommentBlock;
pub use heading::Heading;
pub use horizontal_rule::HorizontalRule;
pub use list::List;
pub use paragraph::Paragraph;
pub use table::{Alignment, Column, Table};
