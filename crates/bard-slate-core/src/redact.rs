//! Paywall previews
//!
//! Whether a viewer is blocked is decided by the caller; this module only
//! truncates.

use crate::ast::{Document, Node};

/// Return the part of `document` a viewer may see
///
/// Unblocked viewers get the document unchanged. Blocked viewers get only
/// the first top-level node, or [`Document::placeholder`] when there is
/// none.
pub fn visible_content(document: Document, blocked: bool) -> Document {
    if !blocked {
        return document;
    }

    match first_node(document) {
        Some(node) => Document::new(vec![node]),
        None => Document::placeholder(),
    }
}

fn first_node(document: Document) -> Option<Node> {
    document.into_nodes().into_iter().next()
}

impl Document {
    /// See [`visible_content`]
    pub fn visible(self, blocked: bool) -> Self {
        visible_content(self, blocked)
    }
}
