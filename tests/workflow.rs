//! Tests for the workflow model: editing, id generation and saved documents.
mod common;
use common::*;
use reconflow::prelude::*;

#[test]
fn test_sequential_ids_use_canvas_prefix() {
    let mut ids = SequentialIds::new();
    assert_eq!(ids.next_id(), "dndnode_0");
    assert_eq!(ids.next_id(), "dndnode_1");
}

#[test]
fn test_sequential_ids_resume_after_loaded_nodes() {
    let loaded = vec![
        node("dndnode_4", "nmap"),
        node("dndnode_11", "nmap"),
        node("imported-7", "nmap"),
        node("dndnode_x", "nmap"),
    ];
    let mut ids = SequentialIds::new().resume_after(&loaded);
    assert_eq!(ids.next_id(), "dndnode_12");
}

#[test]
fn test_sequential_ids_resume_after_largest_suffix() {
    let loaded = vec![
        node("dndnode_0", "nmap"),
        node("dndnode_18446744073709551615", "nmap"),
    ];
    let mut ids = SequentialIds::new().resume_after(&loaded);
    assert_eq!(ids.next_id(), "dndnode_18446744073709551616");
    assert_eq!(ids.next_id(), "dndnode_18446744073709551617");
}

#[test]
fn test_uuid_ids_are_unique() {
    let mut ids = UuidIds;
    let a = ids.next_id();
    let b = ids.next_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}

#[test]
fn test_add_connect_and_remove_nodes() {
    let mut ids = SequentialIds::with_prefix("step-");
    let mut workflow = Workflow::new();

    let a = workflow.add_node(&mut ids, "Subfinder", ConfigMap::new()).id.clone();
    let b = workflow.add_node(&mut ids, "Nmap", ConfigMap::new()).id.clone();
    let c = workflow.add_node(&mut ids, "Dirsearch", ConfigMap::new()).id.clone();
    assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("step-0", "step-1", "step-2"));

    workflow.connect(&a, &b);
    workflow.connect(&b, &c);
    workflow.connect(&a, &c);

    assert!(workflow.remove_node(&b));
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.connections, vec![Connection::new(&a, &c)]);
    assert!(!workflow.remove_node("missing"));
}

#[test]
fn test_set_config_replaces_node_configuration() {
    let mut workflow = create_recon_workflow();
    let updated = config(&[("target", "192.168.1.1".into())]);

    assert!(workflow.set_config("dndnode_1", updated.clone()));
    assert_eq!(workflow.node("dndnode_1").map(|n| &n.config), Some(&updated));
    assert!(!workflow.set_config("nope", ConfigMap::new()));
}

#[test]
fn test_saved_list_uses_latest_document() {
    let document = WorkflowDocument::from_json(SAVED_WORKFLOWS_JSON).expect("valid document list");
    assert_eq!(document.name.as_deref(), Some("external recon"));

    let workflow = document.into_workflow().expect("convertible document");
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.nodes[0].name, "Subfinder");
    assert_eq!(
        workflow.nodes[0].config.get("recursive"),
        Some(&ConfigValue::Bool(true))
    );
    assert_eq!(
        workflow.connections,
        vec![Connection::new("dndnode_0", "dndnode_1")]
    );

    let plan = Planner::builder(workflow).build().plan();
    assert_eq!(
        plan.commands().collect::<Vec<_>>(),
        vec![
            "subfinder -d example.com -recursive",
            "nmap -sS -T3 1-1000 example.com -oX output",
        ]
    );
}

#[test]
fn test_single_document_and_label_fallback() {
    let json = r#"{
        "name": "single",
        "nodes": [{ "id": "n1", "data": { "label": "Ghauri", "config": {} } }],
        "edges": []
    }"#;
    let workflow = WorkflowDocument::from_json(json)
        .and_then(|d| d.into_workflow())
        .expect("label is enough to name the tool");
    assert_eq!(workflow.nodes[0].name, "Ghauri");
    assert!(workflow.nodes[0].config.is_empty());
}

#[test]
fn test_document_errors() {
    assert!(matches!(
        WorkflowDocument::from_json("[]"),
        Err(WorkflowConversionError::EmptyDocumentList)
    ));
    assert!(matches!(
        WorkflowDocument::from_json("{ not json"),
        Err(WorkflowConversionError::JsonParseError(_))
    ));

    let nameless = r#"{ "nodes": [{ "id": "n9", "data": {} }] }"#;
    let result = WorkflowDocument::from_json(nameless).and_then(|d| d.into_workflow());
    match result {
        Err(WorkflowConversionError::MissingToolName { node_id }) => assert_eq!(node_id, "n9"),
        other => panic!("Expected MissingToolName error, got {:?}", other),
    }
}

#[test]
fn test_integral_numbers_render_without_fraction() {
    assert_eq!(ConfigValue::Number(10.0).to_string(), "10");
    assert_eq!(ConfigValue::Number(-3.0).to_string(), "-3");
    assert_eq!(ConfigValue::Number(2.5).to_string(), "2.5");
}

#[test]
fn test_large_numbers_render_every_digit() {
    assert_eq!(
        ConfigValue::Number(1e20).to_string(),
        "100000000000000000000"
    );
    assert_eq!(
        ConfigValue::Number(-1e20).to_string(),
        "-100000000000000000000"
    );
    assert_eq!(
        ConfigValue::Number(9_007_199_254_740_991.0).to_string(),
        "9007199254740991"
    );
}

#[test]
fn test_cleared_values_are_not_set() {
    assert!(!ConfigValue::Bool(false).is_set());
    assert!(!ConfigValue::Number(0.0).is_set());
    assert!(!ConfigValue::Text(String::new()).is_set());
    assert!(ConfigValue::Text("0".to_string()).is_set());
    assert!(ConfigValue::Text("false".to_string()).is_set());
}

#[test]
fn test_config_map_deserializes_mixed_json_values() {
    let map: ConfigMap =
        serde_json::from_str(r#"{"threads": 10, "recursive": true, "domain": "a.io"}"#).unwrap();
    assert_eq!(map.get("threads"), Some(&ConfigValue::Number(10.0)));
    assert_eq!(map.get("recursive"), Some(&ConfigValue::Bool(true)));
    assert_eq!(map.get("domain"), Some(&ConfigValue::from("a.io")));
}
