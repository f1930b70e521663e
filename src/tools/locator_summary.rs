use crate::error::Result;
use crate::matcher::{TestStep, match_all_in};
use crate::script::summarize;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the locator_summary tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocatorSummaryParams {
    /// HTML source to search
    pub html: String,

    /// Test steps to derive locators for
    pub test_steps: Vec<TestStep>,
}

/// Tool deriving a Selenium locator strategy for every step
#[derive(Default)]
pub struct LocatorSummaryTool;

impl Tool for LocatorSummaryTool {
    type Params = LocatorSummaryParams;

    fn name(&self) -> &str {
        "locator_summary"
    }

    fn execute_typed(&self, params: LocatorSummaryParams, context: &mut ToolContext) -> Result<ToolResult> {
        let dom = context.load_document(&params.html);
        let records = match_all_in(dom, &params.test_steps);

        Ok(ToolResult::success_with(serde_json::json!({
            "locators": summarize(&records)
        })))
    }
}
