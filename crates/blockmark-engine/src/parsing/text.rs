/// Inline content of a heading, paragraph or table cell.
///
/// Inline spans (emphasis, links, code spans) are not parsed; the source text
/// is kept verbatim and escaped when rendered to HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    source: String,
}

impl Text {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The inline source exactly as it appeared in the document.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// HTML-escaped inline content.
    pub fn render_to_html(&self) -> String {
        html_escape::encode_text(&self.source).into_owned()
    }

    /// Terminal lines of the inline content, one per source line with
    /// surrounding whitespace removed.
    pub fn render_for_terminal(&self) -> Vec<String> {
        self.source
            .lines()
            .map(|line| line.trim().to_string())
            .collect()
    }

    /// The content on a single line, for places that cannot hold more.
    pub fn render_for_raw_print(&self) -> String {
        self.render_for_terminal().join(" ")
    }
}
