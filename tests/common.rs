//! Common test utilities for building workflows.
use reconflow::prelude::*;

/// Builds a `ConfigMap` from key/value pairs.
#[allow(dead_code)]
pub fn config(pairs: &[(&str, ConfigValue)]) -> ConfigMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[allow(dead_code)]
pub fn node(id: &str, name: &str) -> ToolNode {
    ToolNode::new(id, name, ConfigMap::new())
}

#[allow(dead_code)]
pub fn ids(ordered: &[&ToolNode]) -> Vec<String> {
    ordered.iter().map(|n| n.id.clone()).collect()
}

/// A typical recon pipeline.
///
/// Shape: `subfinder -> nmap -> dirsearch -> ghauri`, with the nodes listed
/// in reverse so ordering has work to do.
#[allow(dead_code)]
pub fn create_recon_workflow() -> Workflow {
    Workflow {
        nodes: vec![
            ToolNode::new(
                "dndnode_3",
                "Ghauri",
                config(&[
                    ("url", ConfigValue::from("http://target.local/item.php?id=4")),
                    ("method", ConfigValue::from("POST")),
                    ("data", ConfigValue::from("id=4")),
                    ("level", ConfigValue::from("3 (High)")),
                    ("risk", ConfigValue::from("2")),
                ]),
            ),
            ToolNode::new(
                "dndnode_2",
                "Dirsearch",
                config(&[
                    ("url", ConfigValue::from("https://target.local")),
                    ("extensions", ConfigValue::from("php,html")),
                ]),
            ),
            ToolNode::new(
                "dndnode_1",
                "Nmap",
                config(&[
                    ("target", ConfigValue::from("target.local")),
                    ("timing", ConfigValue::from("T4 (Aggressive)")),
                ]),
            ),
            ToolNode::new(
                "dndnode_0",
                "Subfinder",
                config(&[
                    ("domain", ConfigValue::from("target.local")),
                    ("threads", ConfigValue::from(10_i64)),
                ]),
            ),
        ],
        connections: vec![
            Connection::new("dndnode_0", "dndnode_1"),
            Connection::new("dndnode_1", "dndnode_2"),
            Connection::new("dndnode_2", "dndnode_3"),
        ],
    }
}

/// A saved-workflows list as the canvas writes it to storage.
#[allow(dead_code)]
pub const SAVED_WORKFLOWS_JSON: &str = r##"[
  {
    "id": "1717000000000",
    "name": "old",
    "nodes": [],
    "edges": [],
    "createdAt": "2024-05-29T16:26:40.000Z"
  },
  {
    "id": "1717000100000",
    "name": "external recon",
    "nodes": [
      {
        "id": "dndnode_0",
        "type": "toolNode",
        "position": { "x": 120, "y": 80 },
        "data": {
          "label": "Subfinder",
          "tool": { "name": "Subfinder", "icon": "subfinder", "color": "#1F7BFF" },
          "config": { "domain": "example.com", "recursive": true }
        }
      },
      {
        "id": "dndnode_1",
        "type": "toolNode",
        "position": { "x": 420, "y": 80 },
        "data": {
          "label": "Nmap",
          "tool": { "name": "Nmap", "icon": "nmap", "color": "#FF6D1F" },
          "config": { "target": "example.com", "output": "XML" }
        }
      }
    ],
    "edges": [
      {
        "id": "reactflow__edge-dndnode_0-dndnode_1",
        "source": "dndnode_0",
        "sourceHandle": null,
        "target": "dndnode_1",
        "targetHandle": null
      }
    ],
    "createdAt": "2024-05-29T16:28:20.000Z"
  }
]"##;
