use std::fmt::Write as _;

use crate::parsing::blocks::{Block, CodeBlockKind, ContainerBlock};

/// Renders a parsed container as an indented outline, one node per line.
///
/// Text is shown with `{:?}` so whitespace and newlines stay visible.
pub fn outline(container: &ContainerBlock) -> String {
    let mut out = String::new();
    write_container(&mut out, container, 0);
    out
}

fn write_container(out: &mut String, container: &ContainerBlock, depth: usize) {
    for block in container.blocks() {
        write_block(out, block, depth);
    }
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    let pad = "  ".repeat(depth);
    let _ = match block {
        Block::Heading(h) => writeln!(out, "{pad}Heading({}) {:?}", h.level, h.text.as_str()),
        Block::Paragraph(p) => writeln!(out, "{pad}Paragraph {:?}", p.text.as_str()),
        Block::CodeBlock(code) => {
            let kind = match code.kind {
                CodeBlockKind::Fenced { fence } => format!("fenced {fence:?}"),
                CodeBlockKind::Indented => "indented".to_string(),
            };
            writeln!(
                out,
                "{pad}CodeBlock({kind}, language={:?}, style={:?}) {:?}",
                code.language, code.style, code.code
            )
        }
        Block::List(list) => {
            let _ = writeln!(
                out,
                "{pad}List({}, {}, start={})",
                if list.is_ordered() { "ordered" } else { "unordered" },
                if list.is_tight() { "tight" } else { "loose" },
                list.start_number()
            );
            for item in list.items() {
                let _ = writeln!(out, "{pad}  Item");
                write_container(out, item, depth + 2);
            }
            Ok(())
        }
        Block::Table(table) => {
            let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
            writeln!(out, "{pad}Table {headers:?} rows={}", table.rows.len())
        }
        Block::HorizontalRule(_) => writeln!(out, "{pad}HorizontalRule"),
        Block::CommentBlock(c) => writeln!(out, "{pad}CommentBlock {:?}", c.comment),
        Block::BlockQuote(quote) => {
            let _ = writeln!(out, "{pad}BlockQuote");
            write_container(out, &quote.contents, depth + 1);
            Ok(())
        }
    };
}
