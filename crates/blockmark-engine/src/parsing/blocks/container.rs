use crate::parsing::{cursor::LineCursor, text::Text};

use super::{
    kinds::{
        BlockQuote, CodeBlock, CommentBlock, Heading, HorizontalRule, List, Paragraph, Table,
        heading::setext_underline_level,
    },
    types::Block,
};

/// Parse-time state of a single container: the section (last heading) the
/// parser is currently in.
///
/// Lives only as long as one [`ContainerBlock::parse`] call; blocks keep what
/// they derive from it, never a reference to the heading.
#[derive(Debug, Default)]
pub struct ParseContext {
    current_section: Option<String>,
}

impl ParseContext {
    /// Marker looked for in a section title to detect synopsis sections.
    pub const SYNOPSIS: &'static str = "SYNOPSIS";

    pub fn enter_section(&mut self, heading: &Heading) {
        self.current_section = Some(heading.text.as_str().to_string());
    }

    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// Whether the current section's title names a synopsis.
    pub fn in_synopsis(&self) -> bool {
        self.current_section
            .as_deref()
            .is_some_and(|title| title.to_uppercase().contains(Self::SYNOPSIS))
    }
}

/// An ordered sequence of blocks: the document body, a list item or the
/// inside of a block quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerBlock {
    blocks: Vec<Block>,
    has_blank_lines: bool,
    has_trailing_blank_lines: bool,
}

impl ContainerBlock {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Whether a blank line separated two of this container's blocks.
    pub fn has_blank_lines(&self) -> bool {
        self.has_blank_lines
    }

    /// Whether any blank line was seen; the last of them may have ended the
    /// container.
    pub fn has_trailing_blank_lines(&self) -> bool {
        self.has_trailing_blank_lines
    }

    /// Parses blocks until the cursor reports end of input at this nesting
    /// level.
    ///
    /// Block kinds are tried in a fixed order; the first that matches wins.
    /// Lines nobody claims accumulate into a paragraph, which is flushed by a
    /// blank line, by any other block, or at the end.
    pub fn parse(cursor: &mut LineCursor<'_>) -> Self {
        let mut blocks = Vec::new();
        let mut paragraph = String::new();
        let mut context = ParseContext::default();

        let mut has_blank_lines = false;
        let mut has_trailing_blank_lines = false;

        while let Some(line) = cursor.current() {
            if line.trim().is_empty() {
                has_trailing_blank_lines = true;
                cursor.advance();
                flush_paragraph(&mut paragraph, &mut blocks);
                continue;
            }
            has_blank_lines = has_blank_lines || has_trailing_blank_lines;

            let is_interrupting_paragraph = !paragraph.is_empty();

            // `---` under a paragraph is an underline, not a rule.
            let setext_level = if is_interrupting_paragraph {
                setext_underline_level(line)
            } else {
                None
            };

            if let Some(block) = parse_block(
                cursor,
                &mut context,
                is_interrupting_paragraph,
                setext_level.is_some(),
            ) {
                // The interrupted paragraph precedes the block that ended it.
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(block);
                continue;
            }

            if let Some(level) = setext_level {
                let heading = Heading::new(Text::new(paragraph.trim()), level);
                context.enter_section(&heading);
                blocks.push(Block::Heading(heading));
                paragraph.clear();
                cursor.advance();
                continue;
            }

            if !paragraph.is_empty() {
                paragraph.push('\n');
            }
            paragraph.push_str(line);
            cursor.advance();
        }

        flush_paragraph(&mut paragraph, &mut blocks);

        Self {
            blocks,
            has_blank_lines,
            has_trailing_blank_lines,
        }
    }
}

fn flush_paragraph(paragraph: &mut String, blocks: &mut Vec<Block>) {
    if paragraph.is_empty() {
        return;
    }
    let text = Text::new(std::mem::take(paragraph));
    blocks.push(Block::Paragraph(Paragraph::new(text)));
}

/// Tries every block parser in precedence order.
fn parse_block(
    cursor: &mut LineCursor<'_>,
    context: &mut ParseContext,
    is_interrupting_paragraph: bool,
    is_setext_underline: bool,
) -> Option<Block> {
    if let Some(heading) = Heading::parse(cursor) {
        context.enter_section(&heading);
        return Some(Block::Heading(heading));
    }
    if let Some(table) = Table::parse(cursor) {
        return Some(Block::Table(table));
    }
    if !is_setext_underline && let Some(rule) = HorizontalRule::parse(cursor) {
        return Some(Block::HorizontalRule(rule));
    }
    // Code blocks need the current section for terminal indentation.
    if let Some(code) = CodeBlock::parse(cursor, context, is_interrupting_paragraph) {
        return Some(Block::CodeBlock(code));
    }
    if let Some(list) = List::parse(cursor, is_interrupting_paragraph) {
        return Some(Block::List(list));
    }
    if let Some(comment) = CommentBlock::parse(cursor) {
        return Some(Block::CommentBlock(comment));
    }
    BlockQuote::parse(cursor).map(Block::BlockQuote)
}
