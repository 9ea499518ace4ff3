use std::collections::TryReserveError;

/// Failure while producing rendered output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to allocate output buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

/// Failure reported by a [`Highlighter`](crate::render::highlight::Highlighter).
///
/// Never escapes a render: the code is emitted as escaped plain text instead.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("Could not highlight {language} code: {reason}")]
    Failed { language: String, reason: String },
}
