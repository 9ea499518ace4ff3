use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::{blocks::container::ParseContext, cursor::LineCursor};

/// How a code block was delimited in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeBlockKind {
    /// Opened by a run of backticks or tildes.
    Fenced { fence: char },
    /// Every line indented by at least four columns.
    Indented,
}

/// A fenced or indented code block.
///
/// Our dialect lets a fence carry a style marker before the language, e.g.
/// ```` ```**sh ```` renders the block bold and tags it as shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub kind: CodeBlockKind,
    pub language: String,
    /// Run of `*` / `_` from the info string.
    pub style: String,
    /// Block content; every line is terminated by `\n`.
    pub code: String,
    /// Whether the block sits in a synopsis section, which gets a narrower
    /// indent in terminal output.
    pub synopsis: bool,
}

struct FenceOpen<'a> {
    fence: &'a str,
    style: &'a str,
    language: &'a str,
    indent: usize,
}

impl<'a> FenceOpen<'a> {
    fn from_captures(line: &'a str, caps: &Captures<'a>) -> Self {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Self {
            fence: group(1),
            style: group(2),
            language: group(3),
            indent: line.bytes().take_while(|&b| b == b' ').count(),
        }
    }
}

// Info strings of backtick fences cannot contain backticks, tilde fences may
// contain anything.
fn backtick_open_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^ {0,3}(`{3,})\s*([*_]*)\s*([^*_\s`]*)[^`]*$")
            .expect("Invalid backtick fence regex")
    })
}

fn tilde_open_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^ {0,3}(~{3,})\s*([*_]*)\s*([^*_\s]*).*$")
            .expect("Invalid tilde fence regex")
    })
}

fn close_fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})\s*$").expect("Invalid close fence regex"))
}

/// Returns the byte length of a four-column code block prefix, if `line`
/// has one. A tab completes the current tab stop.
pub fn line_block_prefix(line: &str) -> Option<usize> {
    let mut characters = 0;
    let mut columns = 0;

    for b in line.bytes() {
        if columns == 4 {
            break;
        }
        match b {
            b' ' => {
                characters += 1;
                columns += 1;
            }
            b'\t' => {
                characters += 1;
                columns = 4;
            }
            _ => break,
        }
    }

    (columns == 4).then_some(characters)
}

impl CodeBlock {
    /// Parses a code block at the cursor.
    ///
    /// Fenced blocks may interrupt a paragraph, indented blocks may not.
    pub fn parse(
        cursor: &mut LineCursor<'_>,
        context: &ParseContext,
        is_interrupting_paragraph: bool,
    ) -> Option<Self> {
        let line = cursor.current()?;

        let open = backtick_open_regex()
            .captures(line)
            .or_else(|| tilde_open_regex().captures(line));
        if let Some(caps) = open {
            let open = FenceOpen::from_captures(line, &caps);
            return Some(Self::parse_fenced(cursor, context, open));
        }

        if is_interrupting_paragraph {
            return None;
        }

        line_block_prefix(line)?;
        Some(Self::parse_indented(cursor, context))
    }

    fn parse_fenced(
        cursor: &mut LineCursor<'_>,
        context: &ParseContext,
        open: FenceOpen<'_>,
    ) -> Self {
        let fence = open.fence.chars().next().unwrap_or('`');
        cursor.advance();

        let mut code = String::new();
        while let Some(line) = cursor.current() {
            cursor.advance();

            if let Some(caps) = close_fence_regex().captures(line) {
                let close = &caps[1];
                if close.starts_with(fence) && close.len() >= open.fence.len() {
                    break;
                }
            }

            // Content loses as much of the opening fence's indentation as it has.
            let offset = line
                .bytes()
                .take(open.indent)
                .take_while(|&b| b == b' ')
                .count();
            code.push_str(&line[offset..]);
            code.push('\n');
        }

        Self {
            kind: CodeBlockKind::Fenced { fence },
            language: open.language.to_string(),
            style: open.style.to_string(),
            code,
            synopsis: context.in_synopsis(),
        }
    }

    fn parse_indented(cursor: &mut LineCursor<'_>, context: &ParseContext) -> Self {
        let mut code = String::new();
        let mut blank_lines_after_last_chunk = 0;

        while let Some(line) = cursor.current() {
            let prefix = line_block_prefix(line).filter(|&len| len < line.len());

            let Some(prefix) = prefix else {
                // Chunks may be separated by blank lines; those only count
                // once another chunk follows.
                if line.trim().is_empty() {
                    cursor.advance();
                    blank_lines_after_last_chunk += 1;
                    continue;
                }
                break;
            };

            cursor.advance();
            for _ in 0..blank_lines_after_last_chunk {
                code.push('\n');
            }
            blank_lines_after_last_chunk = 0;

            code.push_str(&line[prefix..]);
            code.push('\n');
        }

        Self {
            kind: CodeBlockKind::Indented,
            language: String::new(),
            style: String::new(),
            code,
            synopsis: context.in_synopsis(),
        }
    }
}
