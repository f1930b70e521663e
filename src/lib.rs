//! # step-locator
//!
//! Match natural-language UI test steps ("Click the button with id submitBtn")
//! to elements of an HTML page and derive locator strategies for automation
//! script generation.
//!
//! ## Features
//!
//! - **Reference extraction**: ordered lexical rules turn a step into an id,
//!   name, class, text or xpath reference
//! - **Element location**: a fixed priority cascade over the parsed page,
//!   first match in document order wins
//! - **Snapshots**: matched elements are copied out as plain tag/attributes/text
//! - **Script generation**: locator strategies per step, fed to an external
//!   text-generation service
//! - **Surfaces**: MCP server, HTTP API and CLI
//!
//! ## Library Usage
//!
//! ```rust
//! use step_locator::{TestStep, match_all};
//!
//! let html = r#"<button id="submitBtn" class="primary">Submit</button>"#;
//! let steps = vec![TestStep::new("Click the button with id submitBtn")];
//!
//! let records = match_all(html, &steps);
//! assert_eq!(records[0].match_method, "id");
//! assert_eq!(records[0].matched_element.as_ref().unwrap().text, "Submit");
//! ```
//!
//! ### Locator strategies
//!
//! ```rust
//! use step_locator::TestStep;
//! use step_locator::script::locator_summary;
//!
//! let summaries = locator_summary(
//!     r#"<input name="searchBox">"#,
//!     &[TestStep::new("Type 'foo' in the input with name searchBox")],
//! );
//! assert_eq!(summaries[0].locator, r#"By.NAME, "searchBox""#);
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: HTML parsing and the element tree
//! - [`matcher`]: reference extraction, element location, snapshots and the
//!   per-step orchestrator
//! - [`script`]: locator projection, prompt building and text generation
//! - [`tools`]: typed tools over the matcher (used by the MCP server)
//! - [`config`]: server and generator options
//! - [`error`]: Error types and result aliases
//! - [`mcp`]: Model Context Protocol server (requires `mcp-handler` feature)
//! - `http`: HTTP API (requires `http-api` feature)

pub mod config;
pub mod dom;
pub mod error;
pub mod matcher;
pub mod script;
pub mod tools;

#[cfg(feature = "http-api")]
pub mod http;

#[cfg(feature = "mcp-handler")]
pub mod mcp;

pub use config::{GeneratorOptions, ServerOptions};
pub use dom::{AttributeValue, DomTree, ElementNode};
pub use error::{LocatorError, Result};
pub use matcher::{
    ElementReference, ElementSnapshot, MatchMethod, MatchResult, StepMatchRecord, TestStep, extract_reference, locate,
    match_all, match_all_bytes,
};
pub use script::{GeneratedScript, LocatorSummary, OpenAiGenerator, TextGenerator};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};

#[cfg(feature = "mcp-handler")]
pub use mcp::StepLocatorServer;
#[cfg(feature = "mcp-handler")]
pub use rmcp::ServiceExt;
