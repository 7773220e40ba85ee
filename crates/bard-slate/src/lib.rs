//! # bard-slate
//!
//! Article and comment content handling for the Bard API.
//!
//! Resolvers store article bodies (`content`) and comment bodies
//! (`message`) as JSON-encoded Slate documents. [`ContentService`] runs the
//! document transforms from `bard-slate-core` on those raw strings for each
//! resolver path:
//!
//! - **write**: parse, collapse runs of blank lines, re-encode
//! - **read**: parse, truncate for paywalled viewers, re-encode for the editor
//! - **email**: parse, render HTML and plain text
//!
//! ## Example
//!
//! ```rust
//! use bard_slate::ContentService;
//!
//! let service = ContentService::new();
//! let stored = service
//!     .prepare_for_storage(r#"[{"type":"paragraph","children":[{"text":"Hi"}]}]"#)
//!     .unwrap();
//!
//! let html = service.render_html(&stored).unwrap();
//! assert_eq!(html, "<p>Hi</p>");
//!
//! // Unparsable content never fails a blocked read
//! let preview = service.visible_content("not json", true).unwrap();
//! assert_eq!(preview.len(), 1);
//! ```

mod service;

pub use bard_slate_core::{Document, DocumentError, Emptiness, Node, Options};
pub use service::ContentService;

/// Error type for content operations
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Stored content does not decode into a document; retrying won't help
    #[error("Could not load content: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Could not encode content: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<DocumentError> for ContentError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::Parse(source) => ContentError::Corrupt(source),
            DocumentError::Encode(source) => ContentError::Encode(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
