use super::definition::Workflow;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a reconflow `Workflow`.
///
/// This is the extension point for feeding pipelines from any editor or storage
/// format. Implement it on your own structs to provide the translation layer;
/// the planner only ever sees the resulting `Workflow`.
///
/// # Example
///
/// ```rust,no_run
/// use reconflow::error::WorkflowConversionError;
/// use reconflow::workflow::{ConfigMap, IntoWorkflow, ToolNode, Workflow};
///
/// // 1. Define your custom structs for parsing your format.
/// struct Step { key: String, tool: String }
/// struct Pipeline { steps: Vec<Step> }
///
/// // 2. Implement `IntoWorkflow` for your top-level struct.
/// impl IntoWorkflow for Pipeline {
///     fn into_workflow(self) -> Result<Workflow, WorkflowConversionError> {
///         let mut workflow = Workflow::new();
///         let mut previous: Option<String> = None;
///         for step in self.steps {
///             if let Some(prev) = previous.take() {
///                 workflow.connect(prev, step.key.clone());
///             }
///             previous = Some(step.key.clone());
///             workflow.nodes.push(ToolNode::new(step.key, step.tool, ConfigMap::new()));
///         }
///         Ok(workflow)
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a plannable workflow.
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError>;
}

impl IntoWorkflow for Workflow {
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError> {
        Ok(self)
    }
}
