use crate::error::Result;
use crate::matcher::{TestStep, match_all_in};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the match_steps tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchStepsParams {
    /// HTML source to search
    pub html: String,

    /// Test steps referencing elements of the page
    pub test_steps: Vec<TestStep>,
}

/// Tool matching every test step to an element of the page
#[derive(Default)]
pub struct MatchStepsTool;

impl Tool for MatchStepsTool {
    type Params = MatchStepsParams;

    fn name(&self) -> &str {
        "match_steps"
    }

    fn execute_typed(&self, params: MatchStepsParams, context: &mut ToolContext) -> Result<ToolResult> {
        let dom = context.load_document(&params.html);
        let elements = match_all_in(dom, &params.test_steps);

        Ok(ToolResult::success_with(serde_json::json!({
            "elements": elements
        })))
    }
}
