//! Sequential dispatch of a plan to an external executor.
//!
//! Later tools may consume artifacts written by earlier ones, so steps are
//! awaited strictly one after another in plan order.

use crate::config::DispatchConfig;
use crate::error::DispatchError;
use crate::planner::Plan;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

mod http;
mod report;

pub use http::{EXECUTE_COMMAND_PATH, HttpExecutor};
pub use report::{DispatchReport, ExecutionOutput, StepOutcome, StepReport};

/// Runs one synthesized command somewhere and reports what happened.
pub trait Executor: Send + Sync {
    fn execute<'a>(&'a self, command: &'a str)
    -> BoxFuture<'a, Result<ExecutionOutput, DispatchError>>;
}

/// What to do with the remaining steps once one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Keep dispatching the remaining steps.
    #[default]
    Continue,
    /// Stop at the first failure and mark the remaining steps as skipped.
    Abort,
}

pub struct Dispatcher {
    executor: Box<dyn Executor>,
    policy: FailurePolicy,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(executor: Box<dyn Executor>) -> Self {
        Self {
            executor,
            policy: FailurePolicy::default(),
            timeout: None,
        }
    }

    pub fn from_config(executor: Box<dyn Executor>, config: &DispatchConfig) -> Self {
        Self {
            executor,
            policy: config.failure_policy,
            timeout: config.timeout(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Per-step time limit. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub async fn run(&self, plan: &Plan) -> DispatchReport {
        let total = plan.len();
        let mut report = DispatchReport::default();

        for (i, step) in plan.steps.iter().enumerate() {
            let outcome = if report.aborted {
                StepOutcome::Skipped
            } else {
                info!(step = i + 1, total, tool = %step.tool, command = %step.command, "Dispatching command");
                let outcome = self.run_step(&step.command).await;
                if outcome.is_failure() {
                    warn!(step = i + 1, tool = %step.tool, outcome = ?outcome, "Workflow step failed");
                    if self.policy == FailurePolicy::Abort {
                        report.aborted = true;
                    }
                }
                outcome
            };

            report.steps.push(StepReport {
                node_id: step.node_id.clone(),
                tool: step.tool.clone(),
                command: step.command.clone(),
                outcome,
            });
        }

        if report.aborted {
            warn!(
                skipped = report
                    .steps
                    .iter()
                    .filter(|s| s.outcome == StepOutcome::Skipped)
                    .count(),
                "Workflow aborted after failure"
            );
        } else {
            info!(total, "Workflow execution complete");
        }
        report
    }

    async fn run_step(&self, command: &str) -> StepOutcome {
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.executor.execute(command)).await
            {
                Ok(result) => result,
                Err(_) => Err(DispatchError::Timeout {
                    command: command.to_string(),
                    timeout_ms: limit.as_millis() as u64,
                }),
            },
            None => self.executor.execute(command).await,
        };

        match result {
            Ok(out) if out.succeeded() => StepOutcome::Completed(out),
            Ok(out) => StepOutcome::Failed(out),
            Err(e) => StepOutcome::Errored(e),
        }
    }
}
