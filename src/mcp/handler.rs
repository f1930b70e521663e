use crate::tools::{ToolContext, ToolRegistry, ToolResult};
use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

/// MCP server exposing the step-matching tools
#[derive(Clone)]
pub struct StepLocatorServer {
    registry: Arc<ToolRegistry>,
    tool_router: ToolRouter<Self>,
}

impl StepLocatorServer {
    /// Create a server backed by the default tool registry
    pub fn new() -> Self {
        Self::with_registry(ToolRegistry::with_defaults())
    }

    /// Create a server backed by a custom registry
    pub fn with_registry(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            tool_router: Self::tool_router(),
        }
    }

    /// Get the tool registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run a registry tool with a fresh per-call context
    pub(crate) fn run_tool(&self, name: &str, params: serde_json::Value) -> crate::error::Result<ToolResult> {
        let mut context = ToolContext::new();
        self.registry.execute(name, params, &mut context)
    }
}

impl Default for StepLocatorServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for StepLocatorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Match natural-language test steps to elements of an HTML page and derive \
                 Selenium locator strategies. Call match_steps with the page HTML and the \
                 ordered test steps."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
