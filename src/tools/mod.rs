//! Typed tools over the matching engine
//!
//! Each tool declares a parameter struct (with a JSON schema for MCP
//! clients) and returns a [`ToolResult`]. Tools are looked up by name in a
//! [`ToolRegistry`].

pub mod extract_reference;
pub mod locator_summary;
pub mod match_steps;

pub use extract_reference::{ExtractReferenceParams, ExtractReferenceTool};
pub use locator_summary::{LocatorSummaryParams, LocatorSummaryTool};
pub use match_steps::{MatchStepsParams, MatchStepsTool};

use crate::dom::DomTree;
use crate::error::{LocatorError, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Result returned by a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    /// Successful result without payload
    pub fn success() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Successful result with a JSON payload
    pub fn success_with(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed result with a message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Per-call state shared by the tools of one request
#[derive(Debug, Default)]
pub struct ToolContext {
    document: Option<DomTree>,
}

impl ToolContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `html` and keep it as the current document
    pub fn load_document(&mut self, html: &str) -> &DomTree {
        self.document.insert(DomTree::parse(html))
    }

    /// The document loaded for this call
    pub fn get_dom(&self) -> Result<&DomTree> {
        self.document
            .as_ref()
            .ok_or_else(|| LocatorError::InvalidArgument("No HTML document loaded".to_string()))
    }
}

/// A named operation with typed parameters
pub trait Tool: Send + Sync {
    type Params: DeserializeOwned + JsonSchema;

    fn name(&self) -> &str;

    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext) -> Result<ToolResult>;

    /// JSON schema of the parameters
    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or(Value::Null)
    }

    /// Deserialize `params` and execute
    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let typed: Self::Params = serde_json::from_value(params)
            .map_err(|e| LocatorError::InvalidArgument(format!("{}: {}", self.name(), e)))?;
        self.execute_typed(typed, context)
    }
}

/// Object-safe view of a [`Tool`]
trait DynTool: Send + Sync {
    fn execute_value(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult>;
    fn schema(&self) -> Value;
}

impl<T: Tool> DynTool for T {
    fn execute_value(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        self.execute(params, context)
    }

    fn schema(&self) -> Value {
        self.parameters_schema()
    }
}

/// Registry of tools by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in tool
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MatchStepsTool);
        registry.register(ExtractReferenceTool);
        registry.register(LocatorSummaryTool);
        registry
    }

    /// Register a tool under its own name, replacing any previous one
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Parameter schema of a tool
    pub fn schema(&self, name: &str) -> Option<Value> {
        self.tools.get(name).map(|tool| tool.schema())
    }

    /// Execute a tool by name
    pub fn execute(&self, name: &str, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| LocatorError::UnknownTool(name.to_string()))?;
        tool.execute_value(params, context)
    }
}
