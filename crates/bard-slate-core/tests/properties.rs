//! Property-based tests for the document transforms
//!
//! Uses proptest to generate random document trees and verify the laws the
//! normalizer, serializer and redaction must hold.

use bard_slate_core::{
    document_to_html, normalize, to_html, visible_content, Document, ElementKind, Node, Options,
    Text,
};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = Node> {
    (
        prop_oneof![
            Just(String::new()),
            Just("  ".to_string()),
            "[a-z <>&\"']{1,8}",
        ],
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(text, bold, italic, code)| {
            let mut text = Text::new(text);
            text.bold = bold;
            text.italic = italic;
            text.code = code;
            Node::Text(text)
        })
}

fn kind_strategy() -> impl Strategy<Value = ElementKind> {
    prop_oneof![
        Just(ElementKind::Paragraph),
        Just(ElementKind::Quote),
        Just(ElementKind::Link),
        Just(ElementKind::Image),
        "[a-z-]{1,12}".prop_map(ElementKind::from),
        "(paragraph|quote|link|image)".prop_map(ElementKind::Other),
    ]
}

fn node_strategy() -> impl Strategy<Value = Node> {
    text_strategy().prop_recursive(4, 32, 4, |inner| {
        (kind_strategy(), prop::collection::vec(inner, 0..4))
            .prop_map(|(kind, children)| Node::element(kind, children))
    })
}

fn nodes_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(node_strategy(), 0..8)
}

/// Paragraphs whose children are text only; normalizing them never changes
/// a node, only drops some.
fn flat_paragraphs_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(
        prop::collection::vec(text_strategy(), 0..3).prop_map(Node::paragraph),
        0..10,
    )
}

fn is_subsequence(needle: &[Node], haystack: &[Node]) -> bool {
    let mut haystack = haystack.iter();
    needle.iter().all(|node| haystack.any(|candidate| candidate == node))
}

fn no_adjacent_empties(nodes: &[Node], options: &Options) -> bool {
    nodes
        .windows(2)
        .all(|pair| !(pair[0].is_empty_with(options) && pair[1].is_empty_with(options)))
        && nodes
            .iter()
            .all(|node| no_adjacent_empties(node.children(), options))
}

proptest! {
    #[test]
    fn test_normalize_is_idempotent(nodes in nodes_strategy()) {
        let options = Options::default();
        let once = normalize(nodes, &options);
        let twice = normalize(once.clone(), &options);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_leaves_no_adjacent_empties(nodes in nodes_strategy()) {
        let options = Options::default();
        let result = normalize(nodes, &options);
        prop_assert!(no_adjacent_empties(&result, &options));
    }

    #[test]
    fn test_normalize_preserves_order(nodes in flat_paragraphs_strategy()) {
        let result = normalize(nodes.clone(), &Options::default());
        prop_assert!(result.len() <= nodes.len());
        prop_assert!(is_subsequence(&result, &nodes));
    }

    #[test]
    fn test_normalize_keeps_non_empty_nodes(nodes in flat_paragraphs_strategy()) {
        let result = normalize(nodes.clone(), &Options::default());
        let kept = nodes.iter().filter(|node| !node.is_empty()).count();
        let survived = result.iter().filter(|node| !node.is_empty()).count();
        prop_assert_eq!(kept, survived);
    }

    #[test]
    fn test_json_round_trip(nodes in nodes_strategy()) {
        let document = Document::new(nodes);
        let json = document.to_json().unwrap();
        prop_assert_eq!(Document::parse(&json).unwrap(), document);
    }

    #[test]
    fn test_html_never_contains_raw_markup_from_text(text in ".*") {
        let html = to_html(&Node::paragraph(vec![Node::text(text)]));
        let inner = &html["<p>".len()..html.len() - "</p>".len()];
        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
    }

    #[test]
    fn test_html_is_deterministic(nodes in nodes_strategy()) {
        prop_assert_eq!(document_to_html(&nodes), document_to_html(&nodes));
    }

    #[test]
    fn test_blocked_content_is_single_node(nodes in nodes_strategy()) {
        let first = nodes.first().cloned();
        let visible = visible_content(Document::new(nodes), true);
        prop_assert_eq!(visible.len(), 1);
        if let Some(first) = first {
            prop_assert_eq!(&visible.nodes()[0], &first);
        } else {
            prop_assert_eq!(visible, Document::placeholder());
        }
    }

    #[test]
    fn test_unblocked_content_is_unchanged(nodes in nodes_strategy()) {
        let document = Document::new(nodes);
        prop_assert_eq!(visible_content(document.clone(), false), document);
    }
}
