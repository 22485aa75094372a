use crate::order::order;
use crate::tools::{CommandTemplate, Synthesizer};
use crate::workflow::Workflow;
use tracing::debug;

mod artifact;

pub use artifact::{Plan, PlannedCommand};

/// Turns a workflow snapshot into an ordered `Plan` of commands.
pub struct Planner {
    workflow: Workflow,
    synthesizer: Synthesizer,
}

pub struct PlannerBuilder {
    workflow: Workflow,
    synthesizer: Synthesizer,
}

impl PlannerBuilder {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            synthesizer: Synthesizer::default(),
        }
    }

    /// Renders nodes named `user_tool_name` with the built-in template `builtin_name`.
    pub fn with_tool_alias(mut self, user_tool_name: &str, builtin_name: &str) -> Self {
        self.synthesizer = self.synthesizer.with_alias(user_tool_name, builtin_name);
        self
    }

    pub fn with_template(mut self, template: Box<dyn CommandTemplate>) -> Self {
        self.synthesizer = self.synthesizer.with_template(template);
        self
    }

    pub fn build(self) -> Planner {
        Planner {
            workflow: self.workflow,
            synthesizer: self.synthesizer,
        }
    }
}

impl Planner {
    pub fn builder(workflow: Workflow) -> PlannerBuilder {
        PlannerBuilder::new(workflow)
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn plan(&self) -> Plan {
        let ordered = order(&self.workflow.nodes, &self.workflow.connections);
        let steps: Vec<PlannedCommand> = ordered
            .into_iter()
            .map(|node| {
                if !self.synthesizer.knows(&node.name) {
                    debug!(node_id = %node.id, tool = %node.name, "no template registered for tool");
                }
                PlannedCommand {
                    node_id: node.id.clone(),
                    tool: node.name.clone(),
                    command: self.synthesizer.synthesize(node),
                }
            })
            .collect();
        debug!(steps = steps.len(), "planned workflow");
        Plan::new(steps)
    }
}
