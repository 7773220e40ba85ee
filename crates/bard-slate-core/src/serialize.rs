//! Document serialization
//!
//! Renders documents to HTML for email bodies and to plain text for
//! previews. Both renderers are total: unknown element kinds fall back to
//! their children.

use crate::ast::{Document, Element, ElementKind, Node, Text};

/// Serialize a single node to an HTML string
pub fn to_html(node: &Node) -> String {
    let mut output = String::with_capacity(256);
    serialize_node(node, &mut output);
    output
}

/// Serialize a sequence of top-level nodes to an HTML string
///
/// The sequence is treated as the children of an untyped root, so the
/// result is the concatenation of each node's HTML.
pub fn document_to_html(nodes: &[Node]) -> String {
    let mut output = String::with_capacity(nodes.len() * 64);
    serialize_nodes(nodes, &mut output);
    output
}

/// Serialize top-level nodes to plain text, one line per node
pub fn to_plain_text(nodes: &[Node]) -> String {
    let mut output = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        node.push_text_content(&mut output);
    }
    output
}

/// Escape `& < > " '` for use in HTML text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    push_escaped(text, &mut output);
    output
}

fn push_escaped(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

fn serialize_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        serialize_node(node, out);
    }
}

fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => serialize_text(text, out),
        Node::Element(element) => serialize_element(element, out),
    }
}

fn serialize_text(text: &Text, out: &mut String) {
    // Only the highest-priority mark is rendered; marks never nest
    match text.primary_mark() {
        Some(mark) => {
            let tag = mark.tag();
            out.push('<');
            out.push_str(tag);
            out.push('>');
            push_escaped(&text.text, out);
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        None => push_escaped(&text.text, out),
    }
}

fn serialize_element(element: &Element, out: &mut String) {
    let url = element.url.as_deref().unwrap_or("");

    match &element.kind {
        ElementKind::Quote => {
            out.push_str("<blockquote><p>");
            serialize_nodes(&element.children, out);
            out.push_str("</p></blockquote>");
        }

        ElementKind::Paragraph => {
            out.push_str("<p>");
            serialize_nodes(&element.children, out);
            out.push_str("</p>");
        }

        ElementKind::Link => {
            out.push_str("<a href=\"");
            push_escaped(url, out);
            out.push_str("\">");
            serialize_nodes(&element.children, out);
            out.push_str("</a>");
        }

        // Void element: children are never rendered
        ElementKind::Image => {
            out.push_str("<img style=\"width:100%;\" src=\"");
            push_escaped(url, out);
            out.push_str("\" />");
        }

        ElementKind::Other(_) => serialize_nodes(&element.children, out),
    }
}

impl Document {
    /// Serialize this document to HTML
    pub fn to_html(&self) -> String {
        document_to_html(self.nodes())
    }

    /// Serialize this document to plain text
    pub fn to_plain_text(&self) -> String {
        to_plain_text(self.nodes())
    }
}
