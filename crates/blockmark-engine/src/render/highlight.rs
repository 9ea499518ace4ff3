use crate::error::HighlightError;

/// Turns the content of a code block into highlighted HTML.
///
/// Implementations return `Ok(None)` for languages they do not know. The
/// returned markup is inserted verbatim inside `<code>`, so it must already
/// be escaped.
pub trait Highlighter: Send + Sync {
    fn highlight(&self, language: &str, code: &str) -> Result<Option<String>, HighlightError>;
}

/// Renders `code` with `highlighter`, falling back to escaped plain text when
/// there is no highlighter, the language is unknown, or highlighting fails.
pub fn highlight_or_escape(
    highlighter: Option<&dyn Highlighter>,
    language: &str,
    code: &str,
) -> String {
    let escaped = || html_escape::encode_text(code).into_owned();

    let Some(highlighter) = highlighter.filter(|_| !language.is_empty()) else {
        return escaped();
    };

    match highlighter.highlight(language, code) {
        Ok(Some(html)) => html,
        Ok(None) => escaped(),
        Err(e) => {
            log::warn!("Could not render {language} code to html: {e}");
            escaped()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Highlighter for Upper {
        fn highlight(&self, language: &str, code: &str) -> Result<Option<String>, HighlightError> {
            match language {
                "shout" => Ok(Some(format!("<b>{}</b>", code.to_uppercase()))),
                "broken" => Err(HighlightError::Failed {
                    language: language.to_string(),
                    reason: "unexpected token".to_string(),
                }),
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn no_highlighter_escapes() {
        assert_eq!(highlight_or_escape(None, "shout", "a<b"), "a&lt;b");
    }

    #[test]
    fn highlighter_output_is_used() {
        assert_eq!(highlight_or_escape(Some(&Upper), "shout", "hi"), "<b>HI</b>");
    }

    #[test]
    fn unknown_language_falls_back() {
        assert_eq!(highlight_or_escape(Some(&Upper), "other", "x & y"), "x &amp; y");
    }

    #[test]
    fn failure_falls_back() {
        assert_eq!(highlight_or_escape(Some(&Upper), "broken", "<x>"), "&lt;x&gt;");
    }

    #[test]
    fn empty_language_is_never_highlighted() {
        assert_eq!(highlight_or_escape(Some(&Upper), "", "plain"), "plain");
    }
}
