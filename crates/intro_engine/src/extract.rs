use ego_tree::iter::Edge;
use ego_tree::NodeId;
use intro_logging::intro_debug;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Inline reference numbers are rendered as superscripts.
pub const CITATION_MARKER_TAG: &str = "sup";
pub const PARAGRAPH_TAG: &str = "p";
/// Text prefix of the table of contents; the introduction ends before it.
pub const CONTENTS_MARKER: &str = "Contents";

/// Elements whose boundaries separate words in rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "tbody", "td", "tfoot", "th", "thead",
    "tr", "ul",
];

pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Vec<String>;
}

/// Collects the introduction of an article page:
/// - detaches every citation marker from the tree
/// - starts at the first `<p>` in document order
/// - takes each following sibling element's text as one line
/// - stops at a missing sibling, an empty text, or a text starting with `Contents`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntroExtractor;

impl Extractor for IntroExtractor {
    fn extract(&self, html: &str) -> Vec<String> {
        let mut doc = Html::parse_document(html);
        let removed = strip_citation_markers(&mut doc);

        let mut lines = Vec::new();
        let mut cursor = first_paragraph(&doc);
        while let Some(element) = cursor {
            let text = element_text(element);
            if text.is_empty() || text.starts_with(CONTENTS_MARKER) {
                break;
            }
            lines.push(text);
            cursor = next_sibling_element(element);
        }

        intro_debug!(
            "extracted {} lines after removing {} citation markers",
            lines.len(),
            removed
        );
        lines
    }
}

fn strip_citation_markers(doc: &mut Html) -> usize {
    let Ok(selector) = Selector::parse(CITATION_MARKER_TAG) else {
        return 0;
    };
    let ids: Vec<NodeId> = doc
        .root_element()
        .select(&selector)
        .map(|el| (*el).id())
        .collect();
    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }
    ids.len()
}

fn first_paragraph(doc: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse(PARAGRAPH_TAG).ok()?;
    doc.root_element().select(&selector).next()
}

fn next_sibling_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// Descendant text with whitespace runs collapsed and ends trimmed.
/// Block boundaries and line breaks count as whitespace.
fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    for edge in element.traverse() {
        let (node, opening) = match edge {
            Edge::Open(node) => (node, true),
            Edge::Close(node) => (node, false),
        };
        match node.value() {
            Node::Text(text) if opening => raw.push_str(text),
            Node::Element(el) if is_block(el.name()) => raw.push(' '),
            _ => {}
        }
    }
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}
