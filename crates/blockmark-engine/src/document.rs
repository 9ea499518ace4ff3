use crate::{
    error::RenderError,
    parsing::{blocks::ContainerBlock, parse_container},
    render::{RenderExtensionConfig, html, terminal},
    visitor::{Visitor, Walk},
};

/// A parsed Markdown document.
///
/// Immutable once built; render it as many times, and from as many threads,
/// as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    container: ContainerBlock,
}

impl Document {
    /// Parses `source` into a document.
    ///
    /// The block grammar accepts every input, so this currently always
    /// returns `Some`; `None` is reserved for inputs a future grammar rejects.
    pub fn parse(source: &str) -> Option<Self> {
        Some(Self {
            container: parse_container(source),
        })
    }

    pub fn container(&self) -> &ContainerBlock {
        &self.container
    }

    /// A complete HTML page with `extra_head_contents` inserted into `<head>`.
    pub fn render_to_html(
        &self,
        extra_head_contents: &str,
        config: &RenderExtensionConfig,
    ) -> String {
        html::page(extra_head_contents, &self.render_to_inline_html(config))
    }

    /// The document body as an HTML fragment.
    pub fn render_to_inline_html(&self, config: &RenderExtensionConfig) -> String {
        self.container.render_to_html(config, false)
    }

    /// Terminal text, wrapped to `view_width` columns (no wrapping when 0).
    pub fn render_for_terminal(&self, view_width: usize) -> Result<String, RenderError> {
        terminal::join_lines(&self.container.render_lines_for_terminal(view_width))
    }

    /// Pre-order walk over the whole document; see [`crate::visitor`].
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Walk {
        self.container.walk(visitor)
    }
}
