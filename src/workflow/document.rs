//! Saved canvas documents.
//!
//! The editor persists workflows as a JSON list of
//! `{ id, name, nodes, edges, createdAt }` objects, where each node carries the
//! tool it was dropped from and the configuration entered for it.

use super::conversion::IntoWorkflow;
use super::definition::{Connection, ToolNode, Workflow};
use super::value::ConfigMap;
use crate::error::WorkflowConversionError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<CanvasNode>,
    #[serde(default)]
    pub edges: Vec<CanvasEdge>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasNode {
    pub id: String,
    #[serde(default)]
    pub data: CanvasNodeData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CanvasNodeData {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub tool: Option<CanvasTool>,
    #[serde(default)]
    pub config: ConfigMap,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasTool {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CanvasEdge {
    pub source: String,
    pub target: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentSet {
    Many(Vec<WorkflowDocument>),
    One(WorkflowDocument),
}

impl WorkflowDocument {
    /// Parses either a single document or the saved-workflows list.
    /// For a list, the most recently saved (last) document is returned.
    pub fn from_json(json: &str) -> Result<Self, WorkflowConversionError> {
        let set: DocumentSet = serde_json::from_str(json)
            .map_err(|e| WorkflowConversionError::JsonParseError(e.to_string()))?;
        match set {
            DocumentSet::One(doc) => Ok(doc),
            DocumentSet::Many(docs) => docs
                .into_iter()
                .last()
                .ok_or(WorkflowConversionError::EmptyDocumentList),
        }
    }
}

impl IntoWorkflow for WorkflowDocument {
    fn into_workflow(self) -> Result<Workflow, WorkflowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|node| -> Result<ToolNode, WorkflowConversionError> {
                let CanvasNodeData {
                    label,
                    tool,
                    config,
                } = node.data;
                let name = tool
                    .map(|t| t.name)
                    .or(label)
                    .filter(|name| !name.trim().is_empty())
                    .ok_or_else(|| WorkflowConversionError::MissingToolName {
                        node_id: node.id.clone(),
                    })?;
                Ok(ToolNode::new(node.id, name, config))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let connections = self
            .edges
            .into_iter()
            .map(|edge| Connection::new(edge.source, edge.target))
            .collect();

        Ok(Workflow { nodes, connections })
    }
}
