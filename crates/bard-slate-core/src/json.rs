//! JSON encoding of stored documents

use std::str::FromStr;

use serde::de::Error as _;
use serde_json::Value;

use crate::ast::{Document, Node};
use crate::{DocumentError, Result};

impl Document {
    /// Parse a document from its stored JSON string
    pub fn parse(raw: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(raw).map_err(DocumentError::Parse)?;
        validate(document.nodes())?;
        Ok(document)
    }

    /// Decode a document from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let document: Self = serde_json::from_value(value).map_err(DocumentError::Parse)?;
        validate(document.nodes())?;
        Ok(document)
    }

    /// Encode this document as a JSON string for storage
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(DocumentError::Encode)
    }

    /// Encode this document as a JSON value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(DocumentError::Encode)
    }
}

/// Reject shapes serde accepts but the tree forbids: any object with a
/// string `text` decodes as a leaf, so a stray `children` would be swallowed
/// into its attributes.
fn validate(nodes: &[Node]) -> Result<()> {
    for node in nodes {
        match node {
            Node::Text(text) if text.attributes.contains_key("children") => {
                return Err(DocumentError::Parse(serde_json::Error::custom(
                    "text node cannot have children",
                )));
            }
            Node::Text(_) => {}
            Node::Element(element) => validate(&element.children)?,
        }
    }
    Ok(())
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}
