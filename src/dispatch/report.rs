use crate::error::DispatchError;
use serde::{Deserialize, Serialize};

const ENDPOINT_MISSING_NOTE: &str =
    "Note: Backend API endpoint /api/execute-command not configured.";
const ENDPOINT_MISSING_HINT: &str =
    "To enable command execution, implement the API endpoint in your backend.";

/// What the execution endpoint answered for one command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(
        default,
        rename = "exitCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_code: Option<i32>,
}

impl ExecutionOutput {
    /// A missing exit code counts as success.
    pub fn succeeded(&self) -> bool {
        self.exit_code.is_none_or(|code| code == 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Completed(ExecutionOutput),
    /// The command ran but reported a non-zero exit code.
    Failed(ExecutionOutput),
    Errored(DispatchError),
    /// Not attempted because an earlier step failed under `FailurePolicy::Abort`.
    Skipped,
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, StepOutcome::Failed(_) | StepOutcome::Errored(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub node_id: String,
    pub tool: String,
    pub command: String,
    pub outcome: StepOutcome,
}

/// The result of dispatching a whole plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DispatchReport {
    pub steps: Vec<StepReport>,
    /// Set when dispatch stopped early because of a failure.
    pub aborted: bool,
}

impl DispatchReport {
    pub fn succeeded(&self) -> bool {
        !self.aborted && self.steps.iter().all(|s| !s.outcome.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| s.outcome.is_failure())
    }

    /// Terminal-style transcript of the run.
    pub fn lines(&self) -> Vec<String> {
        if self.steps.is_empty() {
            return vec!["No workflow commands to execute.".to_string()];
        }

        let total = self.steps.len();
        let mut lines = vec![format!("Executing {} workflow command(s)...", total)];
        for (i, step) in self.steps.iter().enumerate() {
            let position = format!("[{}/{}]", i + 1, total);
            match &step.outcome {
                StepOutcome::Skipped => {
                    lines.push(format!("{} Skipped: {}", position, step.command));
                }
                StepOutcome::Errored(e) if Self::endpoint_missing(e) => {
                    lines.push(format!("{} Executing: {}", position, step.command));
                    lines.push(format!("Command: {}", step.command));
                    lines.push(ENDPOINT_MISSING_NOTE.to_string());
                    lines.push(ENDPOINT_MISSING_HINT.to_string());
                }
                StepOutcome::Errored(e) => {
                    lines.push(format!("{} Executing: {}", position, step.command));
                    lines.push(format!("Error executing command: {}", e));
                }
                StepOutcome::Completed(out) | StepOutcome::Failed(out) => {
                    lines.push(format!("{} Executing: {}", position, step.command));
                    Self::push_output(&mut lines, out);
                }
            }
        }

        if self.aborted {
            lines.push("Workflow execution aborted.".to_string());
        } else {
            lines.push("Workflow execution complete.".to_string());
        }
        lines
    }

    /// An unreachable backend, or one without the execute route.
    fn endpoint_missing(error: &DispatchError) -> bool {
        matches!(
            error,
            DispatchError::Request(_) | DispatchError::Status { status: 404, .. }
        )
    }

    fn push_output(lines: &mut Vec<String>, out: &ExecutionOutput) {
        if let Some(text) = out.output.as_deref().filter(|t| !t.is_empty()) {
            lines.push(text.to_string());
        }
        if let Some(text) = out.error.as_deref().filter(|t| !t.is_empty()) {
            lines.push(text.to_string());
        }
        if let Some(code) = out.exit_code.filter(|code| *code != 0) {
            lines.push(format!("Command exited with code {}", code));
        }
    }
}
