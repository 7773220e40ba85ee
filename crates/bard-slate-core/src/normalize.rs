//! Line-break elimination
//!
//! The editor produces an empty paragraph for every press of enter, so
//! stored bodies tend to accumulate runs of blank lines. Normalization keeps
//! the first empty element of each run and drops the rest, at every depth.

use crate::ast::{Document, Element, Node};
use crate::options::Options;

/// Collapse runs of consecutive empty elements in a sibling sequence
///
/// Children are normalized before their node is judged, so a quote whose
/// blank paragraphs collapse is compared in its reduced form. Survivors
/// keep their order.
pub fn normalize(nodes: Vec<Node>, options: &Options) -> Vec<Node> {
    let mut output = Vec::with_capacity(nodes.len());
    let mut previous_empty = false;

    for node in nodes {
        let node = normalize_node(node, options);
        let empty = node.is_empty_with(options);

        if !(empty && previous_empty) {
            output.push(node);
        }
        previous_empty = empty;
    }

    output
}

/// Normalize the children of a single node; text leaves are returned as-is
pub fn normalize_node(node: Node, options: &Options) -> Node {
    match node {
        Node::Text(_) => node,
        Node::Element(element) => Node::Element(Element {
            children: normalize(element.children, options),
            ..element
        }),
    }
}

impl Document {
    /// Return this document with runs of empty elements collapsed
    pub fn normalized(self, options: &Options) -> Self {
        Document::new(normalize(self.into_nodes(), options))
    }
}
