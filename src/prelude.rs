//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to build, plan and dispatch a workflow.
//!
//! # Example
//!
//! ```rust,no_run
//! use reconflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/workflows.json")?;
//! let workflow = WorkflowDocument::from_json(&json)?.into_workflow()?;
//!
//! let plan = Planner::builder(workflow).build().plan();
//! plan.save("path/to/plan.bin")?;
//! # Ok(())
//! # }
//! ```

// Planning
pub use crate::order::order;
pub use crate::planner::{Plan, PlannedCommand, Planner};
pub use crate::tools::{CommandTemplate, Synthesizer, ToolConfig, ToolKind, synthesize};

// Workflow model
pub use crate::workflow::{
    ConfigMap, ConfigValue, Connection, IdGenerator, IntoWorkflow, SequentialIds, ToolNode,
    UuidIds, Workflow, WorkflowDocument,
};

// Dispatch and configuration
pub use crate::config::{DispatchConfig, FlowConfig};
pub use crate::dispatch::{
    DispatchReport, Dispatcher, ExecutionOutput, Executor, FailurePolicy, HttpExecutor,
    StepOutcome,
};

// Error types
pub use crate::error::{ConfigError, DispatchError, PlanError, WorkflowConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
