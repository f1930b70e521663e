//! Matching of test steps to document elements
//!
//! Each step runs through three stages independently of its siblings:
//! - [`reference::extract_reference`]: step text to [`ElementReference`]
//! - [`locator::locate`]: reference to the first matching element
//! - [`snapshot::snapshot`]: element to a detached [`ElementSnapshot`]
//!
//! [`match_all`] parses the document once and returns one
//! [`StepMatchRecord`] per step, in input order.

pub mod locator;
pub mod reference;
pub mod snapshot;

pub use locator::{MatchMethod, MatchResult, locate};
pub use reference::{ElementReference, extract_reference};
pub use snapshot::{ElementSnapshot, snapshot};

use crate::dom::DomTree;
use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A natural-language test step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TestStep {
    /// Description of the step, e.g. "Click the button with id submitBtn"
    pub description: String,
}

impl TestStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<&str> for TestStep {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for TestStep {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}

/// Match outcome for one test step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepMatchRecord {
    /// Position of the step in the input
    pub step_index: usize,
    /// Step description, verbatim
    pub step_description: String,
    /// Matched element; `{}` on the wire when nothing matched
    #[serde(with = "snapshot::empty_object")]
    pub matched_element: Option<ElementSnapshot>,
    /// Method label, or `not found`
    pub match_method: String,
}

impl StepMatchRecord {
    /// Parsed match method
    pub fn method(&self) -> MatchMethod {
        MatchMethod::from_label(&self.match_method).unwrap_or(MatchMethod::NotFound)
    }

    pub fn is_found(&self) -> bool {
        self.matched_element.is_some()
    }
}

/// Match a single step against an already-parsed document
pub fn match_step(tree: &DomTree, step_index: usize, step: &TestStep) -> StepMatchRecord {
    let reference = extract_reference(&step.description);
    let result = locate(tree, reference.as_ref());

    match (&reference, result.element) {
        (Some(reference), Some(node)) => log::debug!(
            "step {} matched {} reference via {}: {}",
            step_index,
            reference.kind(),
            result.method,
            node.to_simple_string()
        ),
        (Some(reference), None) => log::debug!(
            "step {} {} reference found no element",
            step_index,
            reference.kind()
        ),
        (None, _) => log::debug!("step {} has no recognizable element reference", step_index),
    }

    StepMatchRecord {
        step_index,
        step_description: step.description.clone(),
        matched_element: snapshot(result.element),
        match_method: result.method.label().to_string(),
    }
}

/// Match every step against `html`, preserving order
pub fn match_all(html: &str, steps: &[TestStep]) -> Vec<StepMatchRecord> {
    let tree = DomTree::parse(html);
    match_all_in(&tree, steps)
}

/// Like [`match_all`] for raw bytes; fails only on non-UTF-8 input
pub fn match_all_bytes(html: &[u8], steps: &[TestStep]) -> Result<Vec<StepMatchRecord>> {
    let tree = DomTree::parse_bytes(html)?;
    Ok(match_all_in(&tree, steps))
}

/// Match every step against an already-parsed document
pub fn match_all_in(tree: &DomTree, steps: &[TestStep]) -> Vec<StepMatchRecord> {
    let records: Vec<_> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| match_step(tree, index, step))
        .collect();

    log::debug!(
        "matched {} of {} steps against {} elements",
        records.iter().filter(|r| r.is_found()).count(),
        records.len(),
        tree.count_elements()
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_preserves_order_and_length() {
        let steps = vec![
            TestStep::new("Click the button with id go"),
            TestStep::new("Wait five seconds"),
            TestStep::new("Verify the text 'Done' is visible"),
        ];
        let records = match_all("<button id=\"go\">Go</button><p>Done</p>", &steps);

        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.step_index, i);
            assert_eq!(record.step_description, steps[i].description);
        }
        assert_eq!(records[0].method(), MatchMethod::Id);
        assert_eq!(records[1].match_method, "not found");
        assert!(records[1].matched_element.is_none());
        assert_eq!(records[2].method(), MatchMethod::TextExact);
    }

    #[test]
    fn test_record_wire_shape_for_miss() {
        let records = match_all("<div></div>", &[TestStep::new("Wait five seconds")]);
        let json = serde_json::to_value(&records[0]).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "step_index": 0,
                "step_description": "Wait five seconds",
                "matched_element": {},
                "match_method": "not found"
            })
        );
    }

    #[test]
    fn test_match_all_bytes() {
        let steps = [TestStep::from("Click the input with name q")];
        let records = match_all_bytes(b"<input name=\"q\">", &steps).unwrap();
        assert_eq!(records[0].method(), MatchMethod::Name);

        assert!(match_all_bytes(&[0xff, 0xfe], &steps).is_err());
    }

    #[test]
    fn test_no_steps() {
        assert!(match_all("<div>x</div>", &[]).is_empty());
    }

    #[test]
    fn test_record_roundtrips_through_json() {
        let records = match_all(
            "<button id=\"submitBtn\" class=\"primary\">Submit</button>",
            &[TestStep::new("Click the button with id submitBtn")],
        );
        let json = serde_json::to_string(&records).unwrap();
        let back: Vec<StepMatchRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);
    }
}
