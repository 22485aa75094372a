//! Execution ordering for tool graphs.
//!
//! The canvas never stops a user from drawing a cycle, so ordering must always
//! produce an answer: a Kahn-style topological pass resolves everything it can,
//! and whatever is left (nodes whose in-degree never reaches zero) is appended
//! afterwards in the order the caller supplied the nodes.

use crate::workflow::{Connection, ToolNode, Workflow};
use ahash::AHashMap;
use std::collections::VecDeque;
use tracing::debug;

/// Orders `nodes` so that, for every connection `from -> to` between two
/// resolvable nodes, `from` comes first whenever the graph allows it.
///
/// The result is always a permutation of `nodes`: every node appears exactly
/// once. Connections pointing at unknown ids are ignored during relaxation, and
/// nodes trapped in cycles are appended in input order.
pub fn order<'a>(nodes: &'a [ToolNode], connections: &[Connection]) -> Vec<&'a ToolNode> {
    if nodes.is_empty() {
        return Vec::new();
    }

    // A connection resolves to the first node bearing its target id.
    let mut position: AHashMap<&str, usize> = AHashMap::with_capacity(nodes.len());
    for (index, node) in nodes.iter().enumerate() {
        position.entry(node.id.as_str()).or_insert(index);
    }

    let mut in_degree: AHashMap<&str, i64> = nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
    let mut outgoing: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for connection in connections {
        *in_degree.entry(connection.to.as_str()).or_insert(0) += 1;
        outgoing
            .entry(connection.from.as_str())
            .or_default()
            .push(connection.to.as_str());
    }

    let mut queue: VecDeque<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| in_degree.get(n.id.as_str()).copied().unwrap_or(0) == 0)
        .map(|(index, _)| index)
        .collect();

    let mut emitted = vec![false; nodes.len()];
    let mut ordered = Vec::with_capacity(nodes.len());

    while let Some(index) = queue.pop_front() {
        if emitted[index] {
            continue;
        }
        emitted[index] = true;
        let node = &nodes[index];
        ordered.push(node);

        let Some(targets) = outgoing.get(node.id.as_str()) else {
            continue;
        };
        for &target in targets {
            let Some(&target_index) = position.get(target) else {
                continue;
            };
            if let Some(degree) = in_degree.get_mut(target) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(target_index);
                }
            }
        }
    }

    if ordered.len() < nodes.len() {
        debug!(
            unresolved = nodes.len() - ordered.len(),
            "appending nodes left unresolved by cycles in input order"
        );
        ordered.extend(
            nodes
                .iter()
                .zip(&emitted)
                .filter(|(_, done)| !**done)
                .map(|(node, _)| node),
        );
    }

    ordered
}

/// Convenience wrapper ordering a whole `Workflow`.
pub fn order_workflow(workflow: &Workflow) -> Vec<&ToolNode> {
    order(&workflow.nodes, &workflow.connections)
}
