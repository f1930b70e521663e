use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of an HTML attribute
///
/// Whitespace-separated attributes such as `class` keep their tokens as an
/// ordered list; everything else is a single string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AttributeValue {
    Single(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// Returns the raw string of a single-valued attribute
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Individual tokens of the value
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => value.split_whitespace().collect(),
            Self::List(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Check whether the attribute equals `expected`.
    ///
    /// A list matches when any single token equals `expected` or when the
    /// space-joined list does.
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            Self::Single(value) => value == expected,
            Self::List(values) => {
                values.iter().any(|v| v == expected) || values.join(" ") == expected
            }
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => f.write_str(value),
            Self::List(values) => f.write_str(&values.join(" ")),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Represents an element of a parsed HTML document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementNode {
    /// HTML tag name (e.g., "div", "button", "input")
    pub tag_name: String,

    /// Element attributes in document order
    #[serde(default)]
    pub attributes: IndexMap<String, AttributeValue>,

    /// Whitespace-trimmed concatenation of all descendant text
    #[serde(default)]
    pub text_content: String,

    /// Child elements
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    /// Create a new ElementNode
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            text_content: String::new(),
            children: Vec::new(),
        }
    }

    /// Builder method: set attributes
    pub fn with_attributes(mut self, attributes: IndexMap<String, AttributeValue>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Builder method: add a single attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Builder method: set text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = text.into();
        self
    }

    /// Builder method: set children
    pub fn with_children(mut self, children: Vec<ElementNode>) -> Self {
        self.children = children;
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a child element
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Check if the attribute `key` equals `value`
    pub fn attribute_matches(&self, key: &str, value: &str) -> bool {
        self.get_attribute(key).is_some_and(|attr| attr.matches(value))
    }

    /// Class tokens of the element, in attribute order
    pub fn classes(&self) -> Vec<&str> {
        self.get_attribute("class")
            .map(AttributeValue::tokens)
            .unwrap_or_default()
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().contains(&class_name)
    }

    /// Check if element carries every class in `class_names`
    pub fn has_all_classes<S: AsRef<str>>(&self, class_names: &[S]) -> bool {
        let classes = self.classes();
        class_names.iter().all(|c| classes.contains(&c.as_ref()))
    }

    /// Get element ID
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id").and_then(AttributeValue::as_str)
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Convert to a simplified string representation
    pub fn to_simple_string(&self) -> String {
        let mut parts = vec![format!("<{}", self.tag_name)];

        if let Some(id) = self.id() {
            parts.push(format!(" id=\"{}\"", id));
        }

        if let Some(class) = self.get_attribute("class") {
            parts.push(format!(" class=\"{}\"", class));
        }

        if let Some(name) = self.get_attribute("name") {
            parts.push(format!(" name=\"{}\"", name));
        }

        parts.push(">".to_string());

        if !self.text_content.is_empty() {
            parts.push(self.text_content.clone());
        }

        parts.join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_node_creation() {
        let element = ElementNode::new("button")
            .with_attribute("id", "test-id")
            .with_attribute("class", vec!["btn", "primary"])
            .with_text("Click me");

        assert_eq!(element.tag_name, "button");
        assert_eq!(element.id(), Some("test-id"));
        assert_eq!(element.text_content, "Click me");
        assert_eq!(element.classes(), vec!["btn", "primary"]);
    }

    #[test]
    fn test_has_class() {
        let mut element = ElementNode::new("div");
        element.add_attribute("class", vec!["container", "main", "active"]);

        assert!(element.has_class("container"));
        assert!(element.has_class("active"));
        assert!(!element.has_class("hidden"));
        assert!(element.has_all_classes(&["main", "container"]));
        assert!(!element.has_all_classes(&["main", "hidden"]));
    }

    #[test]
    fn test_single_valued_class_is_tokenized() {
        let element = ElementNode::new("div").with_attribute("class", "a  b");
        assert!(element.has_all_classes(&["a", "b"]));
    }

    #[test]
    fn test_attribute_matches() {
        let element = ElementNode::new("a")
            .with_attribute("name", "searchBox")
            .with_attribute("rel", vec!["nofollow", "noopener"]);

        assert!(element.attribute_matches("name", "searchBox"));
        assert!(!element.attribute_matches("name", "searchbox"));
        assert!(element.attribute_matches("rel", "noopener"));
        assert!(element.attribute_matches("rel", "nofollow noopener"));
        assert!(!element.attribute_matches("missing", "x"));
    }

    #[test]
    fn test_attribute_value_serialization() {
        let single = serde_json::to_value(AttributeValue::from("x")).unwrap();
        let list = serde_json::to_value(AttributeValue::from(vec!["a", "b"])).unwrap();

        assert_eq!(single, serde_json::json!("x"));
        assert_eq!(list, serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_serialization() {
        let element = ElementNode::new("button")
            .with_attribute("id", "go")
            .with_text("Click")
            .with_children(vec![ElementNode::new("span").with_text("Click")]);

        let json = serde_json::to_string(&element).unwrap();
        let deserialized: ElementNode = serde_json::from_str(&json).unwrap();

        assert_eq!(element, deserialized);
    }

    #[test]
    fn test_to_simple_string() {
        let element = ElementNode::new("button")
            .with_attribute("id", "my-btn")
            .with_attribute("class", vec!["btn", "primary"])
            .with_text("Submit");

        let simple = element.to_simple_string();
        assert_eq!(simple, "<button id=\"my-btn\" class=\"btn primary\">Submit");
    }
}
