use crate::error::Result;
use crate::matcher::extract_reference;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the extract_reference tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractReferenceParams {
    /// Test step description to analyze
    pub step: String,
}

/// Tool exposing the element reference found in a step description
#[derive(Default)]
pub struct ExtractReferenceTool;

impl Tool for ExtractReferenceTool {
    type Params = ExtractReferenceParams;

    fn name(&self) -> &str {
        "extract_reference"
    }

    fn execute_typed(&self, params: ExtractReferenceParams, _context: &mut ToolContext) -> Result<ToolResult> {
        let reference = extract_reference(&params.step);

        Ok(ToolResult::success_with(serde_json::json!({
            "step": params.step,
            "reference": reference
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reference_tool() {
        let mut context = ToolContext::new();
        let params = ExtractReferenceParams {
            step: "Type 'foo' in the input with name searchBox".to_string(),
        };

        let result = ExtractReferenceTool.execute_typed(params, &mut context).unwrap();
        let data = result.data.unwrap();
        assert_eq!(data["reference"], serde_json::json!({"name": "searchBox"}));
    }

    #[test]
    fn test_extract_reference_tool_miss() {
        let mut context = ToolContext::new();
        let params = ExtractReferenceParams {
            step: "Wait five seconds".to_string(),
        };

        let result = ExtractReferenceTool.execute_typed(params, &mut context).unwrap();
        assert!(result.success);
        assert!(result.data.unwrap()["reference"].is_null());
    }
}
