use std::fmt::Write as _;

use crate::parsing::blocks::{
    Alignment, Block, BlockQuote, CodeBlock, CommentBlock, ContainerBlock, Heading, List,
    Paragraph, Table,
};

use super::{RenderExtensionConfig, highlight::highlight_or_escape};

const PAGE_START: &str = "<!DOCTYPE html>
<html>
<head>
    <style>
        code { white-space: pre; }
    </style>
";

const PAGE_BODY: &str = "
</head>
<body>
";

const PAGE_END: &str = "
</body>
</html>";

/// Wraps an inline fragment in a complete HTML page.
pub fn page(extra_head_contents: &str, body: &str) -> String {
    let mut html = String::with_capacity(
        PAGE_START.len() + extra_head_contents.len() + PAGE_BODY.len() + body.len() + PAGE_END.len(),
    );
    html.push_str(PAGE_START);
    html.push_str(extra_head_contents);
    html.push_str(PAGE_BODY);
    html.push_str(body);
    html.push_str(PAGE_END);
    html
}

/// Fragment identifier for a heading: lowercase alphanumerics, with
/// whitespace, `-` and `_` turned into `-`. Everything else is dropped.
pub fn slugify(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            c if c.is_alphanumeric() => Some(c.to_lowercase().collect::<String>()),
            c if c.is_whitespace() || c == '-' || c == '_' => Some("-".to_string()),
            _ => None,
        })
        .collect()
}

impl ContainerBlock {
    /// Renders every block; in a tight list item a final paragraph drops its
    /// trailing newline.
    pub fn render_to_html(&self, config: &RenderExtensionConfig, tight: bool) -> String {
        let mut html = String::new();
        let Some((last, rest)) = self.blocks().split_last() else {
            return html;
        };

        for block in rest {
            html.push_str(&block.render_to_html(config, tight));
        }

        let rendered = last.render_to_html(config, tight);
        match last {
            Block::Paragraph(_) if tight => {
                html.push_str(rendered.strip_suffix('\n').unwrap_or(&rendered))
            }
            _ => html.push_str(&rendered),
        }
        html
    }
}

impl Block {
    pub fn render_to_html(&self, config: &RenderExtensionConfig, tight: bool) -> String {
        match self {
            Block::Heading(heading) => heading.render_to_html(config),
            Block::Paragraph(paragraph) => paragraph.render_to_html(tight),
            Block::CodeBlock(code) => code.render_to_html(config),
            Block::List(list) => list.render_to_html(config),
            Block::Table(table) => table.render_to_html(),
            Block::HorizontalRule(_) => "<hr />\n".to_string(),
            Block::CommentBlock(comment) => comment.render_to_html(),
            Block::BlockQuote(quote) => quote.render_to_html(config),
        }
    }
}

impl Heading {
    fn render_to_html(&self, config: &RenderExtensionConfig) -> String {
        let level = self.level;
        let text = self.text.render_to_html();
        if config.fragment_links_in_heading {
            let slug = slugify(self.text.as_str());
            format!("<h{level} id='{slug}'><a href='#{slug}'>#</a> {text}</h{level}>\n")
        } else {
            format!("<h{level}>{text}</h{level}>\n")
        }
    }
}

impl Paragraph {
    fn render_to_html(&self, tight: bool) -> String {
        let text = html_escape::encode_text(self.text.as_str().trim());
        if tight {
            format!("{text}\n")
        } else {
            format!("<p>{text}</p>\n")
        }
    }
}

impl CodeBlock {
    fn render_to_html(&self, config: &RenderExtensionConfig) -> String {
        let (open_style, close_style) = match self.style.len() {
            0 => ("", ""),
            1 => ("<em>", "</em>"),
            _ => ("<strong>", "</strong>"),
        };

        let mut html = format!("<pre>{open_style}");
        if self.language.is_empty() {
            html.push_str("<code>");
        } else {
            let language = html_escape::encode_double_quoted_attribute(&self.language);
            let _ = write!(html, "<code class=\"language-{language}\">");
        }

        html.push_str(&highlight_or_escape(
            config.highlighter.as_deref(),
            &self.language,
            &self.code,
        ));

        let _ = writeln!(html, "</code>{close_style}</pre>");
        html
    }
}

impl List {
    fn render_to_html(&self, config: &RenderExtensionConfig) -> String {
        let tag = if self.is_ordered() { "ol" } else { "ul" };

        let mut html = format!("<{tag}");
        if self.start_number() != 1 {
            let _ = write!(html, " start=\"{}\"", self.start_number());
        }
        html.push_str(">\n");

        for item in self.items() {
            html.push_str("<li>");
            let starts_inline = match item.blocks().first() {
                None | Some(Block::Paragraph(_)) => true,
                Some(_) => false,
            };
            if !self.is_tight() || !starts_inline {
                html.push('\n');
            }
            html.push_str(&item.render_to_html(config, self.is_tight()));
            html.push_str("</li>\n");
        }

        let _ = writeln!(html, "</{tag}>");
        html
    }
}

fn alignment_attribute(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Unspecified => "",
        Alignment::Left => " style=\"text-align: left\"",
        Alignment::Center => " style=\"text-align: center\"",
        Alignment::Right => " style=\"text-align: right\"",
    }
}

impl Table {
    fn render_to_html(&self) -> String {
        let mut html = String::from("<table>\n<thead>\n<tr>\n");
        for column in &self.columns {
            let _ = writeln!(
                html,
                "<th{}>{}</th>",
                alignment_attribute(column.alignment),
                column.header.render_to_html()
            );
        }
        html.push_str("</tr>\n</thead>\n");

        if !self.rows.is_empty() {
            html.push_str("<tbody>\n");
            for row in &self.rows {
                html.push_str("<tr>\n");
                for (cell, column) in row.iter().zip(&self.columns) {
                    let _ = writeln!(
                        html,
                        "<td{}>{}</td>",
                        alignment_attribute(column.alignment),
                        cell.render_to_html()
                    );
                }
                html.push_str("</tr>\n");
            }
            html.push_str("</tbody>\n");
        }

        html.push_str("</table>\n");
        html
    }
}

impl CommentBlock {
    fn render_to_html(&self) -> String {
        format!("<!--{}-->\n", html_escape::encode_text(&self.comment))
    }
}

impl BlockQuote {
    fn render_to_html(&self, config: &RenderExtensionConfig) -> String {
        format!(
            "<blockquote>\n{}</blockquote>\n",
            self.contents.render_to_html(config, false)
        )
    }
}
