pub mod document;
pub mod error;
pub mod parsing;
pub mod render;
pub mod visitor;

// Re-export key types for easier usage
pub use document::Document;
pub use error::{HighlightError, RenderError};
pub use render::{Highlighter, RenderExtensionConfig};
pub use visitor::{Node, RecursionDecision, Visitor, Walk};
