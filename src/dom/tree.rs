use crate::dom::element::{AttributeValue, ElementNode};
use crate::error::{LocatorError, Result};
use indexmap::IndexMap;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Attributes whose values are whitespace-separated token lists, keyed by
/// tag name (`*` applies to every element).
const MULTI_VALUED_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("*", &["class", "accesskey", "dropzone"]),
    ("a", &["rel", "rev"]),
    ("link", &["rel", "rev"]),
    ("td", &["headers"]),
    ("th", &["headers"]),
    ("form", &["accept-charset"]),
    ("object", &["archive"]),
    ("area", &["rel"]),
    ("icon", &["sizes"]),
    ("iframe", &["sandbox"]),
    ("output", &["for"]),
];

/// Elements the HTML parser inserts when their start tag is missing
const IMPLIED_ELEMENTS: &[&str] = &["html", "head", "body", "tbody", "tr", "colgroup"];

/// Elements that are only kept when parsed inside a table
const TABLE_PARTS: &[&str] = &["caption", "colgroup", "col", "thead", "tbody", "tfoot", "tr", "td", "th"];

/// Spans whose content is not markup
static OPAQUE_SPANS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!--.*?(?:-->|$)|<script\b.*?</script\s*>|<style\b.*?</style\s*>").unwrap());

static START_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<([a-z][a-z0-9]*)(?:[\s/>]|$)").unwrap());

/// Represents the element tree of a parsed HTML document
#[derive(Debug, Clone, Default)]
pub struct DomTree {
    /// Top-level elements in document order
    pub roots: Vec<ElementNode>,
}

impl DomTree {
    /// Create a DomTree from already-built top-level elements
    pub fn new(roots: Vec<ElementNode>) -> Self {
        Self { roots }
    }

    /// Parse an HTML string.
    ///
    /// Markup errors are recovered from, never reported. The tree holds only
    /// elements whose start tag appears in the input: wrappers the parser
    /// implies (`html`, `head`, `body`, `tbody`, ...) are dropped and their
    /// children take their place. Input that opens with a table part such as
    /// `<tr>` is parsed inside a table so those elements survive.
    pub fn parse(html: &str) -> Self {
        let source = SourceTags::scan(html);

        if source.opens_in_table() {
            let document = Html::parse_document(&format!("<table>{}</table>", html));
            let mut roots = drop_implied(vec![convert_element(document.root_element())], &source);
            if roots.first().is_some_and(|node| node.is_tag("table")) {
                let mut unwrapped = roots.remove(0).children;
                unwrapped.append(&mut roots);
                roots = unwrapped;
            }
            Self::new(roots)
        } else {
            let document = Html::parse_document(html);
            Self::new(drop_implied(vec![convert_element(document.root_element())], &source))
        }
    }

    /// Parse raw bytes, failing only when they are not valid UTF-8
    pub fn parse_bytes(html: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(html)
            .map_err(|e| LocatorError::DocumentParseFailed(format!("Input is not valid UTF-8: {}", e)))?;
        Ok(Self::parse(text))
    }

    /// Iterate over every element in document (pre-order) order
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// First element in document order satisfying `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<&ElementNode>
    where
        P: FnMut(&ElementNode) -> bool,
    {
        self.iter().find(|node| predicate(node))
    }

    /// Count total elements in the tree
    pub fn count_elements(&self) -> usize {
        self.iter().count()
    }

    /// Whether the document contains no elements at all
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Convert the element tree to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.roots)?)
    }
}

/// Pre-order iterator over a [`DomTree`]
pub struct PreOrder<'a> {
    stack: Vec<&'a ElementNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a ElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Start tags written in the input, ignoring comments, scripts and styles
struct SourceTags {
    first: Option<String>,
    names: HashSet<String>,
}

impl SourceTags {
    fn scan(html: &str) -> Self {
        let markup = OPAQUE_SPANS.replace_all(html, " ");
        let mut first = None;
        let mut names = HashSet::new();

        for capture in START_TAG.captures_iter(&markup) {
            let name = capture[1].to_ascii_lowercase();
            if first.is_none() {
                first = Some(name.clone());
            }
            names.insert(name);
        }

        Self { first, names }
    }

    fn opens_in_table(&self) -> bool {
        self.first.as_deref().is_some_and(|name| TABLE_PARTS.contains(&name))
    }

    fn is_implied(&self, tag: &str) -> bool {
        IMPLIED_ELEMENTS.contains(&tag) && !self.names.contains(tag)
    }
}

/// Replace implied wrapper elements with their children, at any depth
fn drop_implied(nodes: Vec<ElementNode>, source: &SourceTags) -> Vec<ElementNode> {
    let mut kept = Vec::with_capacity(nodes.len());
    for mut node in nodes {
        let children = drop_implied(std::mem::take(&mut node.children), source);
        if source.is_implied(&node.tag_name) {
            kept.extend(children);
        } else {
            node.children = children;
            kept.push(node);
        }
    }
    kept
}

fn is_multi_valued(tag: &str, attribute: &str) -> bool {
    MULTI_VALUED_ATTRIBUTES
        .iter()
        .filter(|(scope, _)| *scope == "*" || *scope == tag)
        .any(|(_, names)| names.contains(&attribute))
}

fn convert_element(element: ElementRef<'_>) -> ElementNode {
    let value = element.value();
    let tag_name = value.name().to_string();

    let mut attributes = IndexMap::new();
    for (name, raw) in value.attrs() {
        let attr = if is_multi_valued(&tag_name, name) {
            AttributeValue::List(raw.split_whitespace().map(str::to_string).collect())
        } else {
            AttributeValue::Single(raw.to_string())
        };
        attributes.insert(name.to_string(), attr);
    }

    let text_content = element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<String>();

    let children = element
        .children()
        .filter_map(ElementRef::wrap)
        .map(convert_element)
        .collect();

    ElementNode {
        tag_name,
        attributes,
        text_content,
        children,
    }
}
