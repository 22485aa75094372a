use thiserror::Error;

/// Errors that can occur when converting a custom user format into a reconflow `Workflow`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowConversionError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' does not name a tool")]
    MissingToolName { node_id: String },

    #[error("The workflow document list is empty")]
    EmptyDocumentList,

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while saving or loading a compiled `Plan`.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Could not access plan file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Plan serialization failed: {0}")]
    Encode(String),

    #[error("Plan deserialization failed: {0}")]
    Decode(String),
}

/// Errors a single dispatched command can end in.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("Request to execution endpoint failed: {0}")]
    Request(String),

    #[error("Execution endpoint answered with HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode execution response: {0}")]
    Decode(String),

    #[error("Command timed out after {timeout_ms}ms: {command}")]
    Timeout { command: String, timeout_ms: u64 },
}

/// Errors raised while loading a `FlowConfig`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    Parse(String),
}
