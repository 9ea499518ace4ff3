use crate::{
    error::RenderError,
    parsing::{
        blocks::{Alignment, Block, BlockQuote, CodeBlock, ContainerBlock, Heading, List, Table},
        text::Text,
    },
};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Width used for horizontal rules when the terminal width is unknown.
pub const DEFAULT_RULE_WIDTH: usize = 80;

const PARAGRAPH_INDENT: &str = "  ";
const CODE_INDENT: &str = "    ";
const SYNOPSIS_CODE_INDENT: &str = "  ";
const QUOTE_PREFIX: &str = "  > ";

/// Joins lines into one string, each followed by `\n`.
pub fn join_lines(lines: &[String]) -> Result<String, RenderError> {
    let size = lines.iter().map(|line| line.len() + 1).sum();
    let mut output = String::new();
    output.try_reserve_exact(size)?;
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    Ok(output)
}

/// Greedy word wrap; a word longer than `width` gets a line of its own.
/// A `width` of zero disables wrapping.
fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn indented_text(text: &Text, view_width: usize) -> Vec<String> {
    let width = view_width.saturating_sub(PARAGRAPH_INDENT.len());
    text.render_for_terminal()
        .iter()
        .flat_map(|line| wrap(line, width))
        .map(|line| format!("{PARAGRAPH_INDENT}{line}"))
        .collect()
}

impl ContainerBlock {
    pub fn render_lines_for_terminal(&self, view_width: usize) -> Vec<String> {
        self.blocks()
            .iter()
            .flat_map(|block| block.render_lines_for_terminal(view_width))
            .collect()
    }
}

impl Block {
    pub fn render_lines_for_terminal(&self, view_width: usize) -> Vec<String> {
        match self {
            Block::Heading(heading) => heading.render_lines_for_terminal(),
            Block::Paragraph(paragraph) => {
                let mut lines = indented_text(&paragraph.text, view_width);
                lines.push(String::new());
                lines
            }
            Block::CodeBlock(code) => code.render_lines_for_terminal(),
            Block::List(list) => list.render_lines_for_terminal(view_width),
            Block::Table(table) => table.render_lines_for_terminal(),
            Block::HorizontalRule(_) => {
                let width = if view_width == 0 {
                    DEFAULT_RULE_WIDTH
                } else {
                    view_width
                };
                vec!["-".repeat(width)]
            }
            Block::CommentBlock(_) => Vec::new(),
            Block::BlockQuote(quote) => quote.render_lines_for_terminal(view_width),
        }
    }
}

impl Heading {
    fn render_lines_for_terminal(&self) -> Vec<String> {
        let text = self.text.render_for_raw_print();
        let text = if self.level <= 2 {
            text.to_uppercase()
        } else {
            text
        };
        vec![String::new(), format!("{BOLD}{text}{RESET}")]
    }
}

impl CodeBlock {
    fn render_lines_for_terminal(&self) -> Vec<String> {
        let indent = if self.synopsis {
            SYNOPSIS_CODE_INDENT
        } else {
            CODE_INDENT
        };
        let mut lines: Vec<String> = self
            .code
            .lines()
            .map(|line| format!("{indent}{line}"))
            .collect();
        lines.push(String::new());
        lines
    }
}

impl List {
    fn render_lines_for_terminal(&self, view_width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for (index, item) in self.items().iter().enumerate() {
            let marker = if self.is_ordered() {
                format!("  {}.", self.start_number() + index)
            } else {
                "  *".to_string()
            };
            let alignment = " ".repeat(marker.len());

            let mut item_lines = item.render_lines_for_terminal(view_width).into_iter();
            let first = item_lines.next().unwrap_or_default();
            lines.push(format!("{marker}{first}"));
            lines.extend(item_lines.map(|line| format!("{alignment}{line}")));
        }
        lines
    }
}

fn pad(cell: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    match alignment {
        Alignment::Right => format!("{}{cell}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{cell}{}", " ".repeat(left), " ".repeat(fill - left))
        }
        Alignment::Left | Alignment::Unspecified => format!("{cell}{}", " ".repeat(fill)),
    }
}

impl Table {
    fn render_lines_for_terminal(&self) -> Vec<String> {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .map(|row| row[i].as_str().chars().count())
                    .chain([column.header.as_str().chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let row_line = |cells: Vec<&str>| {
            let padded: Vec<String> = cells
                .into_iter()
                .zip(&widths)
                .zip(&self.columns)
                .map(|((cell, &width), column)| pad(cell, width, column.alignment))
                .collect();
            format!("{PARAGRAPH_INDENT}{}", padded.join(" | ").trim_end())
        };

        let mut lines = vec![row_line(
            self.columns.iter().map(|c| c.header.as_str()).collect(),
        )];
        let separator: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        lines.push(format!("{PARAGRAPH_INDENT}{}", separator.join("-+-")));
        for row in &self.rows {
            lines.push(row_line(row.iter().map(Text::as_str).collect()));
        }
        lines.push(String::new());
        lines
    }
}

impl BlockQuote {
    fn render_lines_for_terminal(&self, view_width: usize) -> Vec<String> {
        let width = view_width.saturating_sub(QUOTE_PREFIX.len());
        self.contents
            .render_lines_for_terminal(width)
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    QUOTE_PREFIX.trim_end().to_string()
                } else {
                    format!("{QUOTE_PREFIX}{line}")
                }
            })
            .collect()
    }
}
