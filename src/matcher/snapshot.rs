use crate::dom::{AttributeValue, ElementNode};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Detached copy of a matched element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub tag: String,
    pub attributes: IndexMap<String, AttributeValue>,
    pub text: String,
}

impl ElementSnapshot {
    /// Copy the essential fields of `node`
    pub fn capture(node: &ElementNode) -> Self {
        Self {
            tag: node.tag_name.clone(),
            attributes: node.attributes.clone(),
            text: node.text_content.clone(),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// Serialize an optional node; a missing node yields `None`, which goes over
/// the wire as an empty object
pub fn snapshot(node: Option<&ElementNode>) -> Option<ElementSnapshot> {
    node.map(ElementSnapshot::capture)
}

/// Serde adapter writing `None` as `{}` and reading `{}` back as `None`
pub(crate) mod empty_object {
    use super::*;
    use serde::ser::SerializeMap;

    pub fn serialize<S>(value: &Option<ElementSnapshot>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(snapshot) => snapshot.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ElementSnapshot>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
