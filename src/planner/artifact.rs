use crate::error::PlanError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;

/// One node of the workflow, rendered and placed in execution order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlannedCommand {
    pub node_id: String,
    pub tool: String,
    pub command: String,
}

/// The ordered list of commands produced from a workflow.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub steps: Vec<PlannedCommand>,
}

impl Plan {
    pub fn new(steps: Vec<PlannedCommand>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.command.as_str())
    }

    /// Human-readable listing, one line per step: `[1] Nmap: nmap -sS ...`.
    pub fn listing(&self) -> Vec<String> {
        if self.steps.is_empty() {
            return vec!["No workflow commands generated. Add tools to your workflow.".to_string()];
        }
        let mut lines = Vec::with_capacity(self.steps.len() + 1);
        lines.push(format!(
            "Generated {} command(s) from workflow:",
            self.steps.len()
        ));
        lines.extend(
            self.steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("[{}] {}: {}", i + 1, step.tool, step.command)),
        );
        lines
    }

    /// Saves the plan to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), PlanError> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|source| PlanError::Io {
            path: path.to_string(),
            source,
        })
    }

    /// Loads a plan from a file.
    pub fn from_file(path: &str) -> Result<Self, PlanError> {
        let bytes = fs::read(path).map_err(|source| PlanError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PlanError> {
        encode_to_vec(self, standard()).map_err(|e| PlanError::Encode(e.to_string()))
    }

    /// Deserializes a plan from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PlanError> {
        decode_from_slice(bytes, standard())
            .map(|(plan, _)| plan) // bincode 2 returns (value, bytes_read)
            .map_err(|e| PlanError::Decode(e.to_string()))
    }
}
