//! Extraction of element references from free-text test steps
//!
//! Rules are tried in a fixed order and the first one that matches wins, so
//! the order of [`RULES`] is part of the observable behavior.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Structured hint about which element a test step refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementReference {
    /// Exact `id` attribute
    Id(String),
    /// Exact `name` attribute
    Name(String),
    /// One or more space-separated class tokens
    Class(String),
    /// Visible text of the element
    Text(String),
    /// XPath expression; recognized but never resolved
    #[serde(rename = "xpath")]
    XPath(String),
    /// Tag-ish hint word followed by free text
    #[serde(rename = "element")]
    Hinted {
        #[serde(rename = "type")]
        hint: String,
        text: String,
    },
}

impl ElementReference {
    /// Short label of the reference kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Name(_) => "name",
            Self::Class(_) => "class",
            Self::Text(_) => "text",
            Self::XPath(_) => "xpath",
            Self::Hinted { .. } => "element",
        }
    }

    /// Visible text to search for, if this reference carries one
    pub fn text_target(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Hinted { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    Id,
    Name,
    Class,
    Text,
    XPath,
}

impl RuleKind {
    fn reference(self, value: String) -> ElementReference {
        match self {
            Self::Id => ElementReference::Id(value),
            Self::Name => ElementReference::Name(value),
            Self::Class => ElementReference::Class(value),
            Self::Text => ElementReference::Text(value),
            Self::XPath => ElementReference::XPath(value),
        }
    }
}

/// Ordered extraction rules. Values of id/name/class may be quoted, text and
/// xpath values must be.
static RULES: LazyLock<Vec<(RuleKind, Regex)>> = LazyLock::new(|| {
    vec![
        (RuleKind::Id, Regex::new(r#"(?i)\bwith\s+id\s+['"]?([\w\-:]+)['"]?"#).unwrap()),
        (RuleKind::Name, Regex::new(r#"(?i)\bwith\s+name\s+['"]?([\w\-:]+)['"]?"#).unwrap()),
        (RuleKind::Class, Regex::new(r#"(?i)\bwith\s+class\s+['"]?([\w\-: ]+)['"]?"#).unwrap()),
        (RuleKind::Text, Regex::new(r#"(?i)\btext\s*['"]([^'"]+)['"]"#).unwrap()),
        (RuleKind::Text, Regex::new(r#"(?i)\bwith\s+text\s+['"]([^'"]+)['"]"#).unwrap()),
        (RuleKind::Text, Regex::new(r#"(?i)\bwhere\s+text\s+is\s+['"]([^'"]+)['"]"#).unwrap()),
        (RuleKind::XPath, Regex::new(r#"(?i)\bxpath\s+['"]([^'"]+)['"]"#).unwrap()),
    ]
});

/// Last-resort rule: `button|input|element` followed by a phrase
static HINT_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(button|input|element)\s+["']?([\w\-\s]+)["']?"#).unwrap());

/// Extract an element reference from a step description.
///
/// Returns `None` when no rule matches; that is a normal outcome and every
/// locator attempt for the step ends as `not_found`.
pub fn extract_reference(step: &str) -> Option<ElementReference> {
    for (kind, pattern) in RULES.iter() {
        if let Some(caps) = pattern.captures(step) {
            return Some(kind.reference(caps[1].trim().to_string()));
        }
    }

    HINT_RULE.captures(step).map(|caps| ElementReference::Hinted {
        hint: caps[1].trim().to_string(),
        text: caps[2].trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_id() {
        assert_eq!(
            extract_reference("Click the button with id submitBtn"),
            Some(ElementReference::Id("submitBtn".to_string()))
        );
        assert_eq!(
            extract_reference("Click the link WITH ID 'nav:home-1'"),
            Some(ElementReference::Id("nav:home-1".to_string()))
        );
    }

    #[test]
    fn test_extract_name() {
        assert_eq!(
            extract_reference("Type 'foo' in the input with name searchBox"),
            Some(ElementReference::Name("searchBox".to_string()))
        );
    }

    #[test]
    fn test_extract_class_keeps_multiple_tokens() {
        assert_eq!(
            extract_reference("Click on the element with class btn-primary"),
            Some(ElementReference::Class("btn-primary".to_string()))
        );
        assert_eq!(
            extract_reference("Click the div with class \"btn primary\""),
            Some(ElementReference::Class("btn primary".to_string()))
        );
    }

    #[test]
    fn test_extract_text_variants() {
        let expected = Some(ElementReference::Text("Welcome".to_string()));

        assert_eq!(extract_reference("Verify the text 'Welcome' is visible"), expected);
        assert_eq!(extract_reference("Click the link with text \"Welcome\""), expected);
        assert_eq!(extract_reference("Find the row where text is 'Welcome'"), expected);
        assert_eq!(extract_reference("Check text\"Welcome\""), expected);
    }

    #[test]
    fn test_text_requires_quotes() {
        assert_eq!(extract_reference("Verify the text Welcome is visible"), None);
    }

    #[test]
    fn test_extract_xpath() {
        assert_eq!(
            extract_reference("Click the node at xpath '//div[@id=main]/a'"),
            Some(ElementReference::XPath("//div[@id=main]/a".to_string()))
        );
    }

    #[test]
    fn test_id_wins_over_text() {
        assert_eq!(
            extract_reference("Verify text 'Hello' in the span with id greeting"),
            Some(ElementReference::Id("greeting".to_string()))
        );
    }

    #[test]
    fn test_hinted_fallback() {
        assert_eq!(
            extract_reference("Click the Button Submit Order"),
            Some(ElementReference::Hinted {
                hint: "Button".to_string(),
                text: "Submit Order".to_string(),
            })
        );
        assert_eq!(
            extract_reference("Click the button 'Sign in'"),
            Some(ElementReference::Hinted {
                hint: "button".to_string(),
                text: "Sign in".to_string(),
            })
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_reference("Wait five seconds"), None);
        assert_eq!(extract_reference(""), None);
    }

    #[test]
    fn test_text_target() {
        assert_eq!(ElementReference::Text("a".into()).text_target(), Some("a"));
        assert_eq!(
            ElementReference::Hinted { hint: "input".into(), text: "b".into() }.text_target(),
            Some("b")
        );
        assert_eq!(ElementReference::Id("c".into()).text_target(), None);
    }

    #[test]
    fn test_reference_json_shape() {
        let id = serde_json::to_value(ElementReference::Id("submitBtn".into())).unwrap();
        assert_eq!(id, serde_json::json!({"id": "submitBtn"}));

        let xpath = serde_json::to_value(ElementReference::XPath("//a".into())).unwrap();
        assert_eq!(xpath, serde_json::json!({"xpath": "//a"}));

        let hinted = serde_json::to_value(ElementReference::Hinted {
            hint: "button".into(),
            text: "Go".into(),
        })
        .unwrap();
        assert_eq!(hinted, serde_json::json!({"element": {"type": "button", "text": "Go"}}));
    }
}
