//! MCP (Model Context Protocol) server implementation for step matching
//!
//! This module provides rmcp-compatible tools by wrapping the registry tools.

pub mod handler;
pub use handler::StepLocatorServer;

use crate::tools::{
    ExtractReferenceParams, LocatorSummaryParams, MatchStepsParams, ToolResult as InternalToolResult,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    tool, tool_router,
};

/// Convert internal ToolResult to MCP CallToolResult
fn convert_result(result: InternalToolResult) -> Result<CallToolResult, McpError> {
    if result.success {
        let text = if let Some(data) = result.data {
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string())
        } else {
            "Success".to_string()
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    } else {
        let error_msg = result.error.unwrap_or_else(|| "Unknown error".to_string());
        Err(McpError::internal_error(error_msg, None))
    }
}

fn to_value<T: serde::Serialize>(params: T) -> Result<serde_json::Value, McpError> {
    serde_json::to_value(params).map_err(|e| McpError::invalid_params(e.to_string(), None))
}

#[tool_router]
impl StepLocatorServer {
    /// Match test steps to page elements
    #[tool(description = "Match each natural-language test step to the element of the given HTML it refers to. Returns one record per step, in order, with the matched element and the match method (id, name, class, text_exact, text_contains or 'not found').")]
    fn match_steps(&self, params: Parameters<MatchStepsParams>) -> Result<CallToolResult, McpError> {
        let result = self
            .run_tool("match_steps", to_value(params.0)?)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        convert_result(result)
    }

    /// Show the element reference extracted from a step
    #[tool(description = "Extract the structured element reference (id, name, class, text, xpath or element hint) from a single test step description")]
    fn extract_reference(&self, params: Parameters<ExtractReferenceParams>) -> Result<CallToolResult, McpError> {
        let result = self
            .run_tool("extract_reference", to_value(params.0)?)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        convert_result(result)
    }

    /// Derive locator strategies for test steps
    #[tool(description = "Derive a Selenium locator strategy (By.ID, By.NAME, By.CLASS_NAME, By.CSS_SELECTOR or a descriptive comment) for each test step against the given HTML")]
    fn locator_summary(&self, params: Parameters<LocatorSummaryParams>) -> Result<CallToolResult, McpError> {
        let result = self
            .run_tool("locator_summary", to_value(params.0)?)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        convert_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::TestStep;

    #[test]
    fn test_convert_success() {
        let result = convert_result(InternalToolResult::success_with(serde_json::json!({"a": 1}))).unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_convert_failure() {
        let result = convert_result(InternalToolResult::failure("bad"));
        assert!(result.is_err());
    }

    #[test]
    fn test_match_steps_tool() {
        let server = StepLocatorServer::new();
        let params = MatchStepsParams {
            html: "<button id=\"go\">Go</button>".to_string(),
            test_steps: vec![TestStep::new("Click the button with id go")],
        };

        let result = server.match_steps(Parameters(params)).unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_server_registry() {
        let server = StepLocatorServer::default();
        assert!(server.registry().contains("locator_summary"));
    }
}
