use crate::dom::AttributeValue;
use crate::matcher::{ElementSnapshot, MatchMethod, StepMatchRecord};
use serde::{Deserialize, Serialize};

/// Locator strategy derived for one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorSummary {
    pub step_index: usize,
    pub step_description: String,
    pub locator: String,
}

impl From<&StepMatchRecord> for LocatorSummary {
    fn from(record: &StepMatchRecord) -> Self {
        Self {
            step_index: record.step_index,
            step_description: record.step_description.clone(),
            locator: locator_strategy(record),
        }
    }
}

/// Human-readable locator for a match record, in Selenium `By` terms.
///
/// Attribute matches produce a `By` locator; text matches and misses produce
/// a `#` comment since no stable attribute identifies the element.
pub fn locator_strategy(record: &StepMatchRecord) -> String {
    let Some(element) = &record.matched_element else {
        return format!(
            "# Element not found; locate manually for step: {}",
            record.step_description
        );
    };

    let by_attribute = match record.method() {
        MatchMethod::Id => single_attribute(element, "id").map(|id| format!("By.ID, {}", quote(id))),
        MatchMethod::Name => single_attribute(element, "name").map(|name| format!("By.NAME, {}", quote(name))),
        MatchMethod::Class => class_locator(element),
        MatchMethod::TextExact | MatchMethod::TextContains | MatchMethod::NotFound => None,
    };

    by_attribute.unwrap_or_else(|| text_comment(element))
}

fn single_attribute<'a>(element: &'a ElementSnapshot, key: &str) -> Option<&'a str> {
    element.attribute(key).and_then(AttributeValue::as_str)
}

fn class_locator(element: &ElementSnapshot) -> Option<String> {
    let classes = element.attribute("class")?.tokens();
    match classes.as_slice() {
        [] => None,
        [single] => Some(format!("By.CLASS_NAME, {}", quote(single))),
        many => {
            let selector = format!("{}.{}", element.tag, many.join("."));
            Some(format!("By.CSS_SELECTOR, {}", quote(&selector)))
        }
    }
}

fn text_comment(element: &ElementSnapshot) -> String {
    format!(
        "# No stable attribute; locate <{}> by visible text '{}'",
        element.tag, element.text
    )
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
