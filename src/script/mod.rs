//! Automation script generation
//!
//! Match records are projected to locator strings, assembled into a prompt,
//! and handed to a [`TextGenerator`]. The generator's output is returned as
//! an opaque string.

pub mod generator;
pub mod prompt;
pub mod strategy;

pub use generator::{OpenAiGenerator, TextGenerator};
pub use prompt::build_prompt;
pub use strategy::{LocatorSummary, locator_strategy};

use crate::error::Result;
use crate::matcher::{StepMatchRecord, TestStep, match_all};
use serde::{Deserialize, Serialize};

/// Generated script plus the locators it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedScript {
    pub script: String,
    pub locators: Vec<LocatorSummary>,
}

/// Project match records to locator summaries, keeping step order
pub fn summarize(records: &[StepMatchRecord]) -> Vec<LocatorSummary> {
    records.iter().map(LocatorSummary::from).collect()
}

/// Match `steps` against `html` and derive one locator per step
pub fn locator_summary(html: &str, steps: &[TestStep]) -> Vec<LocatorSummary> {
    summarize(&match_all(html, steps))
}

/// Match, build the prompt and ask `generator` for a script
pub async fn generate_script(
    generator: &dyn TextGenerator,
    html: &str,
    steps: &[TestStep],
) -> Result<GeneratedScript> {
    let locators = locator_summary(html, steps);
    let prompt = build_prompt(&locators);
    let script = generator.generate(&prompt).await?;

    Ok(GeneratedScript { script, locators })
}
