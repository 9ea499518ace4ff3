pub mod blocks;
pub mod cursor;
pub mod text;

#[cfg(test)]
mod tests;

use blocks::ContainerBlock;
use cursor::LineCursor;

/// Parses `source` into the root container of a document.
pub fn parse_container(source: &str) -> ContainerBlock {
    let mut cursor = LineCursor::new(source);
    let container = ContainerBlock::parse(&mut cursor);
    log::debug!(
        "parsed {} lines into {} top-level blocks",
        cursor.len(),
        container.blocks().len()
    );
    container
}
