//! # Rendering
//!
//! Two independent projections of the document tree:
//!
//! - **`html`**: HTML markup, either a full page or an inline fragment
//! - **`terminal`**: fixed-width lines for display in a terminal
//!
//! Both match exhaustively on [`Block`](crate::parsing::blocks::Block).
//! Embedded code is highlighted through the optional [`Highlighter`] in the
//! [`RenderExtensionConfig`]; anything it cannot handle is emitted as escaped
//! plain text.

pub mod highlight;
pub mod html;
pub mod terminal;

use std::{fmt, sync::Arc};

pub use highlight::Highlighter;

/// Optional HTML rendering behaviour.
#[derive(Clone)]
pub struct RenderExtensionConfig {
    /// Give headings an `id` and a `#` self-link.
    pub fragment_links_in_heading: bool,
    pub highlighter: Option<Arc<dyn Highlighter>>,
}

impl RenderExtensionConfig {
    /// Configuration with every extension turned off.
    pub fn disabled() -> Self {
        Self {
            fragment_links_in_heading: false,
            highlighter: None,
        }
    }

    pub fn with_highlighter(mut self, highlighter: Arc<dyn Highlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }
}

impl Default for RenderExtensionConfig {
    fn default() -> Self {
        Self {
            fragment_links_in_heading: true,
            highlighter: None,
        }
    }
}

impl fmt::Debug for RenderExtensionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderExtensionConfig")
            .field("fragment_links_in_heading", &self.fragment_links_in_heading)
            .field("highlighter", &self.highlighter.is_some())
            .finish()
    }
}
