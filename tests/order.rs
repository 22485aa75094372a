//! Tests for execution ordering.
mod common;
use common::*;
use reconflow::prelude::*;

fn position(ordered: &[&ToolNode], id: &str) -> usize {
    ordered
        .iter()
        .position(|n| n.id == id)
        .unwrap_or_else(|| panic!("node {} missing from order", id))
}

fn assert_permutation(nodes: &[ToolNode], ordered: &[&ToolNode]) {
    assert_eq!(ordered.len(), nodes.len());
    for original in nodes {
        let hits = ordered
            .iter()
            .filter(|n| std::ptr::eq(**n, original))
            .count();
        assert_eq!(hits, 1, "node {} must appear exactly once", original.id);
    }
}

#[test]
fn test_empty_input_yields_empty_order() {
    assert!(order(&[], &[]).is_empty());
}

#[test]
fn test_chain_is_ordered_by_dependencies() {
    let workflow = create_recon_workflow();
    let ordered = order(&workflow.nodes, &workflow.connections);

    assert_permutation(&workflow.nodes, &ordered);
    assert_eq!(
        ids(&ordered),
        vec!["dndnode_0", "dndnode_1", "dndnode_2", "dndnode_3"]
    );
}

#[test]
fn test_dag_respects_every_edge() {
    let nodes = vec![
        node("e", "nmap"),
        node("d", "nmap"),
        node("c", "nmap"),
        node("b", "nmap"),
        node("a", "nmap"),
    ];
    let connections = vec![
        Connection::new("a", "b"),
        Connection::new("a", "c"),
        Connection::new("b", "d"),
        Connection::new("c", "d"),
        Connection::new("d", "e"),
        Connection::new("a", "e"),
    ];
    let ordered = order(&nodes, &connections);

    assert_permutation(&nodes, &ordered);
    for c in &connections {
        assert!(
            position(&ordered, &c.from) < position(&ordered, &c.to),
            "{} should precede {}",
            c.from,
            c.to
        );
    }
}

#[test]
fn test_independent_nodes_keep_input_order() {
    let nodes = vec![node("z", "nmap"), node("y", "nmap"), node("x", "nmap")];
    assert_eq!(ids(&order(&nodes, &[])), vec!["z", "y", "x"]);
}

#[test]
fn test_two_node_cycle_is_tolerated() {
    let nodes = vec![node("a", "nmap"), node("b", "subfinder")];
    let connections = vec![Connection::new("a", "b"), Connection::new("b", "a")];
    let ordered = order(&nodes, &connections);

    assert_permutation(&nodes, &ordered);
    assert_eq!(ids(&ordered), vec!["a", "b"]);
}

#[test]
fn test_cyclic_nodes_follow_resolved_nodes_in_input_order() {
    let nodes = vec![
        node("loop_b", "nmap"),
        node("root", "subfinder"),
        node("loop_a", "nmap"),
        node("leaf", "dirsearch"),
    ];
    let connections = vec![
        Connection::new("root", "leaf"),
        Connection::new("root", "loop_a"),
        Connection::new("loop_a", "loop_b"),
        Connection::new("loop_b", "loop_a"),
    ];
    let ordered = order(&nodes, &connections);

    assert_eq!(ids(&ordered), vec!["root", "leaf", "loop_b", "loop_a"]);
}

#[test]
fn test_dangling_connections_do_not_affect_order() {
    let nodes = vec![node("b", "nmap"), node("a", "subfinder")];
    let clean = vec![Connection::new("a", "b")];
    let mut dangling = clean.clone();
    dangling.push(Connection::new("a", "ghost"));
    dangling.push(Connection::new("ghost", "phantom"));

    assert_eq!(ids(&order(&nodes, &clean)), vec!["a", "b"]);
    assert_eq!(ids(&order(&nodes, &dangling)), vec!["a", "b"]);
}

#[test]
fn test_parallel_edges_are_all_counted() {
    let nodes = vec![node("b", "nmap"), node("a", "subfinder")];
    let connections = vec![Connection::new("a", "b"), Connection::new("a", "b")];
    assert_eq!(ids(&order(&nodes, &connections)), vec!["a", "b"]);
}

#[test]
fn test_self_loop_pushes_node_to_the_tail() {
    let nodes = vec![node("a", "nmap"), node("b", "nmap")];
    let connections = vec![Connection::new("a", "a")];
    assert_eq!(ids(&order(&nodes, &connections)), vec!["b", "a"]);
}

#[test]
fn test_duplicate_ids_stay_a_permutation() {
    let nodes = vec![node("x", "nmap"), node("x", "subfinder"), node("y", "ghauri")];
    let connections = vec![Connection::new("y", "x")];
    let ordered = order(&nodes, &connections);
    assert_permutation(&nodes, &ordered);
    assert!(std::ptr::eq(ordered[0], &nodes[2]));
}
