use crate::dom::{DomTree, ElementNode};
use crate::matcher::reference::ElementReference;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an element was located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Id,
    Name,
    Class,
    TextExact,
    TextContains,
    NotFound,
}

impl MatchMethod {
    /// Label reported to callers; a miss reads `not found`
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Class => "class",
            Self::TextExact => "text_exact",
            Self::TextContains => "text_contains",
            Self::NotFound => "not found",
        }
    }

    /// Parse a label produced by [`MatchMethod::label`]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "class" => Some(Self::Class),
            "text_exact" => Some(Self::TextExact),
            "text_contains" => Some(Self::TextContains),
            "not found" | "not_found" => Some(Self::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of locating one reference in a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    pub method: MatchMethod,
    pub element: Option<&'a ElementNode>,
}

impl<'a> MatchResult<'a> {
    fn found(method: MatchMethod, element: &'a ElementNode) -> Self {
        Self {
            method,
            element: Some(element),
        }
    }

    /// A miss: no element and method `not_found`
    pub fn not_found() -> Self {
        Self {
            method: MatchMethod::NotFound,
            element: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.element.is_some()
    }
}

/// Locate the element a reference points at.
///
/// The first element in document order wins for every kind. Text references
/// try an exact match over the whole document before falling back to a
/// substring match. XPath references are never resolved.
pub fn locate<'a>(tree: &'a DomTree, reference: Option<&ElementReference>) -> MatchResult<'a> {
    let Some(reference) = reference else {
        return MatchResult::not_found();
    };

    let found = match reference {
        ElementReference::Id(id) => tree
            .find(|node| node.attribute_matches("id", id))
            .map(|node| MatchResult::found(MatchMethod::Id, node)),
        ElementReference::Name(name) => tree
            .find(|node| node.attribute_matches("name", name))
            .map(|node| MatchResult::found(MatchMethod::Name, node)),
        ElementReference::Class(class) => {
            let wanted: Vec<&str> = class.split_whitespace().collect();
            if wanted.is_empty() {
                None
            } else {
                tree.find(|node| node.has_all_classes(wanted.as_slice()))
                    .map(|node| MatchResult::found(MatchMethod::Class, node))
            }
        }
        ElementReference::Text(text) | ElementReference::Hinted { text, .. } => locate_by_text(tree, text),
        ElementReference::XPath(_) => None,
    };

    found.unwrap_or_else(MatchResult::not_found)
}

fn locate_by_text<'a>(tree: &'a DomTree, text: &str) -> Option<MatchResult<'a>> {
    if let Some(node) = tree.find(|node| node.text_content == text) {
        return Some(MatchResult::found(MatchMethod::TextExact, node));
    }

    tree.find(|node| node.text_content.contains(text))
        .map(|node| MatchResult::found(MatchMethod::TextContains, node))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate_in(html: &str, reference: ElementReference) -> (MatchMethod, Option<ElementNode>) {
        let tree = DomTree::parse(html);
        let result = locate(&tree, Some(&reference));
        (result.method, result.element.cloned())
    }

    #[test]
    fn test_locate_by_id() {
        let (method, node) = locate_in(
            "<div id=\"a\"></div><button id=\"submitBtn\">Submit</button>",
            ElementReference::Id("submitBtn".into()),
        );
        assert_eq!(method, MatchMethod::Id);
        assert!(node.unwrap().is_tag("button"));
    }

    #[test]
    fn test_id_is_case_sensitive() {
        let (method, node) = locate_in("<button id=\"submitBtn\"></button>", ElementReference::Id("submitbtn".into()));
        assert_eq!(method, MatchMethod::NotFound);
        assert!(node.is_none());
    }

    #[test]
    fn test_locate_by_name() {
        let (method, node) = locate_in(
            "<form><input name=\"user\"><input name=\"searchBox\"></form>",
            ElementReference::Name("searchBox".into()),
        );
        assert_eq!(method, MatchMethod::Name);
        assert_eq!(node.unwrap().get_attribute("name").unwrap().as_str(), Some("searchBox"));
    }

    #[test]
    fn test_class_subset_first_in_document_order() {
        let html = r#"
            <span class="btn">only btn</span>
            <span class="primary">only primary</span>
            <a class="large primary btn">first</a>
            <button class="btn primary">second</button>
        "#;
        let (method, node) = locate_in(html, ElementReference::Class("btn primary".into()));
        assert_eq!(method, MatchMethod::Class);
        assert_eq!(node.unwrap().text_content, "first");
    }

    #[test]
    fn test_blank_class_is_not_found() {
        let (method, _) = locate_in("<div class=\"x\"></div>", ElementReference::Class("  ".into()));
        assert_eq!(method, MatchMethod::NotFound);
    }

    #[test]
    fn test_exact_text_beats_earlier_contains() {
        let html = "<p>Welcome back</p><h1>Welcome</h1>";
        let (method, node) = locate_in(html, ElementReference::Text("Welcome".into()));
        assert_eq!(method, MatchMethod::TextExact);
        assert!(node.unwrap().is_tag("h1"));
    }

    #[test]
    fn test_text_contains_fallback() {
        let html = "<section><p>Welcome back, user</p></section>";
        let (method, node) = locate_in(html, ElementReference::Text("Welcome back".into()));
        assert_eq!(method, MatchMethod::TextContains);
        // the section comes first in document order and contains the text too
        assert!(node.unwrap().is_tag("section"));
    }

    #[test]
    fn test_hinted_reference_searches_text() {
        let (method, node) = locate_in(
            "<button>Submit Order</button>",
            ElementReference::Hinted { hint: "button".into(), text: "Submit Order".into() },
        );
        assert_eq!(method, MatchMethod::TextExact);
        assert!(node.unwrap().is_tag("button"));
    }

    #[test]
    fn test_xpath_is_never_resolved() {
        let (method, node) = locate_in("<div id=\"main\"><a>x</a></div>", ElementReference::XPath("//div".into()));
        assert_eq!(method, MatchMethod::NotFound);
        assert!(node.is_none());
    }

    #[test]
    fn test_empty_reference_and_empty_document() {
        let tree = DomTree::parse("<div>content</div>");
        assert_eq!(locate(&tree, None), MatchResult::not_found());

        let empty = DomTree::parse("");
        let result = locate(&empty, Some(&ElementReference::Text("anything".into())));
        assert!(!result.is_found());
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(MatchMethod::NotFound.label(), "not found");
        assert_eq!(MatchMethod::TextContains.to_string(), "text_contains");
        assert_eq!(MatchMethod::from_label("not found"), Some(MatchMethod::NotFound));
        assert_eq!(MatchMethod::from_label("class"), Some(MatchMethod::Class));
        assert_eq!(MatchMethod::from_label("css"), None);
        assert_eq!(serde_json::to_value(MatchMethod::NotFound).unwrap(), "not_found");
    }
}
