//! Slate document tree
//!
//! This module defines the nodes of a stored article or comment body.
//! A document is an ordered sequence of nodes; each node is either a text
//! leaf carrying formatting marks, or an element carrying child nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::options::Options;

/// A node in a Slate document
///
/// The JSON shape decides the variant: an object with a string `text` is a
/// [`Text`], an object with a string `type` is an [`Element`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Leaf holding text and marks
    Text(Text),

    /// Internal node holding children
    Element(Element),
}

/// A text leaf
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,

    /// Attributes the model doesn't interpret, kept for re-encoding
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// An element with child nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Missing children decode as an empty list
    #[serde(default)]
    pub children: Vec<Node>,

    /// Target of a link or source of an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Attributes the model doesn't interpret, kept for re-encoding
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// The `type` of an element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Paragraph,
    Quote,
    Link,
    Image,
    /// Any other editor block, carrying its raw type name. Names of the
    /// kinds above are canonicalized by [`Element::new`] and when decoding.
    Other(String),
}

/// A formatting mark on a text leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
}

/// An ordered sequence of top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    nodes: Vec<Node>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Node {
    /// Create a plain text leaf
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(Text::new(text))
    }

    /// Create an element of the given kind without a url
    pub fn element(kind: ElementKind, children: Vec<Node>) -> Self {
        Node::Element(Element::new(kind, children))
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::element(ElementKind::Paragraph, children)
    }

    pub fn quote(children: Vec<Node>) -> Self {
        Self::element(ElementKind::Quote, children)
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element(Element::new(ElementKind::Link, children).with_url(url))
    }

    /// Create an image; Slate gives void elements a single empty text child
    pub fn image(url: impl Into<String>) -> Self {
        Node::Element(Element::new(ElementKind::Image, vec![Node::text("")]).with_url(url))
    }

    /// Check if this is a text leaf
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is an element
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Children of an element, empty for text leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Element(element) => &element.children,
        }
    }

    /// Check emptiness using the default [`Options`]
    pub fn is_empty(&self) -> bool {
        self.is_empty_with(&Options::default())
    }

    /// Check emptiness: only elements can be empty, see [`Element::is_empty_with`]
    pub fn is_empty_with(&self, options: &Options) -> bool {
        match self {
            Node::Text(_) => false,
            Node::Element(element) => element.is_empty_with(options),
        }
    }

    /// Concatenated text of this node and all its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text_content(&mut out);
        out
    }

    pub(crate) fn push_text_content(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(element) => {
                for child in &element.children {
                    child.push_text_content(out);
                }
            }
        }
    }
}

/// Check if a node is a paragraph with no visible content
pub fn is_empty_paragraph(node: &Node) -> bool {
    match node {
        Node::Element(element) => element.kind == ElementKind::Paragraph && element.is_empty(),
        Node::Text(_) => false,
    }
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.code = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// The mark used when rendering: the first set one in the order
    /// bold, italic, underline, code, strikethrough
    pub fn primary_mark(&self) -> Option<Mark> {
        [
            (self.bold, Mark::Bold),
            (self.italic, Mark::Italic),
            (self.underline, Mark::Underline),
            (self.code, Mark::Code),
            (self.strikethrough, Mark::Strikethrough),
        ]
        .into_iter()
        .find_map(|(set, mark)| set.then_some(mark))
    }
}

impl Element {
    pub fn new(kind: ElementKind, children: Vec<Node>) -> Self {
        Self {
            kind: kind.canonical(),
            children,
            url: None,
            attributes: Map::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty_with(&Options::default())
    }

    /// An element is empty when it has no children, or exactly one text
    /// child whose text is blank under `options.emptiness`.
    pub fn is_empty_with(&self, options: &Options) -> bool {
        match self.children.as_slice() {
            [] => true,
            [Node::Text(text)] => options.emptiness.is_blank(&text.text),
            _ => false,
        }
    }
}

impl ElementKind {
    /// The `type` name stored in JSON
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Paragraph => "paragraph",
            ElementKind::Quote => "quote",
            ElementKind::Link => "link",
            ElementKind::Image => "image",
            ElementKind::Other(name) => name.as_str(),
        }
    }

    /// Map an `Other` holding a known name to that kind
    pub fn canonical(self) -> Self {
        match self {
            ElementKind::Other(name) => ElementKind::from(name),
            known => known,
        }
    }
}

impl From<String> for ElementKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "paragraph" => ElementKind::Paragraph,
            "quote" => ElementKind::Quote,
            "link" => ElementKind::Link,
            "image" => ElementKind::Image,
            _ => ElementKind::Other(name),
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl Mark {
    /// HTML tag name used for this mark
    pub fn tag(self) -> &'static str {
        match self {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Underline => "u",
            Mark::Code => "code",
            Mark::Strikethrough => "del",
        }
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// A single paragraph holding an empty text leaf
    pub fn placeholder() -> Self {
        Self::new(vec![Node::paragraph(vec![Node::text("")])])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the document has no top-level nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl From<Vec<Node>> for Document {
    fn from(nodes: Vec<Node>) -> Self {
        Self::new(nodes)
    }
}
