use thiserror::Error;

/// Errors raised by the locator engine and its surrounding surfaces.
///
/// Unmatched steps are never errors: an empty reference or a `not_found`
/// match is a regular [`crate::matcher::StepMatchRecord`].
#[derive(Error, Debug)]
pub enum LocatorError {
    /// The HTML input could not be decoded as text
    #[error("Failed to parse HTML document: {0}")]
    DocumentParseFailed(String),

    /// Tool parameters did not match the expected shape
    #[error("Invalid arguments: {0}")]
    InvalidArgument(String),

    /// No tool registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// No text-generation service is configured
    #[error("Script generator is not configured")]
    GeneratorUnavailable,

    /// The text-generation service returned an error or an unusable response
    #[error("Script generation failed: {0}")]
    GenerationFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LocatorError>;
