use super::ids::IdGenerator;
use super::value::ConfigMap;
use serde::{Deserialize, Serialize};

/// One configured tool step on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub config: ConfigMap,
}

impl ToolNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, config: ConfigMap) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            config,
        }
    }
}

/// A directed dependency: `from` must run before `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The complete snapshot of a tool pipeline, ready for planning.
/// This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<ToolNode>,
    pub connections: Vec<Connection>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node whose id is minted by `ids` and returns it.
    pub fn add_node(
        &mut self,
        ids: &mut dyn IdGenerator,
        name: impl Into<String>,
        config: ConfigMap,
    ) -> &ToolNode {
        let node = ToolNode::new(ids.next_id(), name, config);
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    /// Removes a node together with every connection touching it.
    /// Returns `false` if no node had that id.
    pub fn remove_node(&mut self, node_id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != node_id);
        self.connections
            .retain(|c| c.from != node_id && c.to != node_id);
        self.nodes.len() != before
    }

    /// Appends a connection. Ids are not validated; dangling connections are legal.
    pub fn connect(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.connections.push(Connection::new(from, to));
    }

    /// Replaces the configuration of a node. Returns `false` if no node had that id.
    pub fn set_config(&mut self, node_id: &str, config: ConfigMap) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == node_id) {
            Some(node) => {
                node.config = config;
                true
            }
            None => false,
        }
    }

    pub fn node(&self, node_id: &str) -> Option<&ToolNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
