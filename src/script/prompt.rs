use crate::script::strategy::LocatorSummary;
use std::fmt::Write;

const INSTRUCTIONS: &str = "You are an expert test automation engineer. \
Write a complete Selenium WebDriver script in Python that performs the test steps below, in order. \
Use the given locator for each step; where the locator is a comment, choose a robust locator \
that fits the description. Return only the code.";

/// Build the script-generation prompt from per-step locators
pub fn build_prompt(summaries: &[LocatorSummary]) -> String {
    let mut prompt = String::from(INSTRUCTIONS);
    prompt.push_str("\n\nTest steps:\n");

    for summary in summaries {
        let _ = writeln!(
            prompt,
            "{}. {}\n   Locator: {}",
            summary.step_index + 1,
            summary.step_description,
            summary.locator
        );
    }

    prompt
}
