//! bard-slate-core - Slate document model
//!
//! Article bodies and comment messages are stored as JSON-encoded Slate
//! documents. This crate provides the document tree and the transforms run
//! on it between storage and the reader.
//!
//! # Architecture
//!
//! ```text
//!                  ┌──────────┐  normalize   ┌──────────┐
//! stored JSON ───▶ │          │ ───────────▶ │          │ ──▶ stored JSON
//!                  │ Document │              │ Document │
//!                  │          │ ──redact──▶  │          │ ──▶ HTML / text
//!                  └──────────┘              └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use bard_slate_core::{Document, Options};
//!
//! let raw = r#"[
//!     {"type": "paragraph", "children": [{"text": "Hello", "bold": true}]},
//!     {"type": "paragraph", "children": [{"text": ""}]},
//!     {"type": "paragraph", "children": [{"text": ""}]},
//!     {"type": "paragraph", "children": [{"text": "World"}]}
//! ]"#;
//!
//! let document = Document::parse(raw)?.normalized(&Options::default());
//! assert_eq!(document.len(), 3);
//! assert_eq!(
//!     document.to_html(),
//!     "<p><strong>Hello</strong></p><p></p><p>World</p>"
//! );
//!
//! let preview = document.visible(true);
//! assert_eq!(preview.to_plain_text(), "Hello");
//! # Ok::<(), bard_slate_core::DocumentError>(())
//! ```

mod ast;
mod json;
mod normalize;
mod options;
mod redact;
mod serialize;

pub use ast::{is_empty_paragraph, Document, Element, ElementKind, Mark, Node, Text};
pub use normalize::{normalize, normalize_node};
pub use options::{Emptiness, Options};
pub use redact::visible_content;
pub use serialize::{document_to_html, escape_html, to_html, to_plain_text};

/// Error type for document encoding
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid document: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
