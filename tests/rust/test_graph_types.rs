use super::*;

#[test]
fn test_role_classified_at_construction() {
    let task = DomainNode::new(1, "train", "COMPLETED");
    let param = DomainNode::new(2, ":parameter:5", "COMPLETED");
    assert_eq!(task.role, NodeRole::Task);
    assert_eq!(param.role, NodeRole::Parameter);
    assert!(!is_parameter(&task));
    assert!(is_parameter(&param));
}

#[test]
fn test_marker_anywhere_in_name_is_parameter() {
    assert_eq!(NodeRole::classify("x:parameter:y"), NodeRole::Parameter);
    assert_eq!(NodeRole::classify("parameter"), NodeRole::Task);
    assert_eq!(NodeRole::classify(":param:"), NodeRole::Task);
}

#[test]
fn test_classification_is_pure() {
    let n = DomainNode::new(7, ":parameter:lr", "NEW_OBJECT");
    assert_eq!(is_parameter(&n), is_parameter(&n));
    assert_eq!(NodeRole::classify(&n.name), n.role);
}

#[test]
fn test_display_name_task_unchanged() {
    let n = DomainNode::new(1, "load_data", "COMPLETED");
    assert_eq!(display_name(&n), "load_data");
}

#[test]
fn test_display_name_parameter_trims_marker() {
    let n = DomainNode::new(1, ":parameter:5", "COMPLETED");
    assert_eq!(display_name(&n), "5");
}

#[test]
fn test_display_name_trims_character_set_not_substring() {
    // Trailing 'e' of "size" belongs to the marker's character set.
    let n = DomainNode::new(2, ":parameter:batch_size:parameter:", "COMPLETED");
    assert_eq!(n.display_name(), "batch_siz");
    // Inner occurrences are left alone.
    let n = DomainNode::new(3, ":parameter:1:parameter:2", "COMPLETED");
    assert_eq!(n.display_name(), "1:parameter:2");
}

#[test]
fn test_status_default_and_passthrough() {
    assert_eq!(Status::default().as_str(), "NEW_OBJECT");
    let s = Status::from("SOMETHING_NEW");
    assert_eq!(s.to_string(), "SOMETHING_NEW");
}

#[test]
fn test_node_id_display() {
    assert_eq!(NodeId(42).to_string(), "42");
    assert_eq!(NodeId::from(3u64), NodeId(3));
}

#[test]
fn test_builder_preserves_order() {
    let g = DomainGraph::builder()
        .node(3, "c")
        .node(1, "a")
        .node(2, "b")
        .link(1, 2, "x")
        .link(1, 2, "x")
        .build();
    let ids: Vec<u64> = g.nodes.iter().map(|n| n.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    // Parallel links are not merged.
    assert_eq!(g.links.len(), 2);
}

#[test]
fn test_builder_ignores_duplicate_ids() {
    let g = GraphBuilder::new()
        .node(1, "first")
        .node_with_status(1, "second", "FAILED")
        .build();
    assert_eq!(g.nodes.len(), 1);
    assert_eq!(g.nodes[0].name, "first");
}

#[test]
fn test_from_json_bare_graph() {
    let g = DomainGraph::from_json(
        r#"{"nodes": [{"id": 0, "name": "a", "status": "RUNNING"}],
            "links": [{"source": 0, "target": 1, "edge_name": "e"}]}"#,
    )
    .unwrap();
    assert_eq!(g.nodes.len(), 1);
    assert_eq!(g.nodes[0].status.as_str(), "RUNNING");
    assert_eq!(g.links[0].edge_name, "e");
    assert!(g.links[0].param_type.is_none());
}

#[test]
fn test_from_json_result_document() {
    let doc = r#"{
        "dispatch_id": "abc",
        "status": "COMPLETED",
        "graph": {
            "links": [{"edge_name": "data", "param_type": "kwarg", "source": 0, "target": 1}],
            "nodes": [
                {"name": "load_data", "id": 0, "status": "COMPLETED",
                 "function_string": "def load_data(): ...", "output": ["1"], "error": null},
                {"name": ":parameter:3", "id": 1}
            ]
        }
    }"#;
    let g = DomainGraph::from_json(doc).unwrap();
    assert_eq!(g.nodes.len(), 2);
    assert_eq!(g.nodes[1].role, NodeRole::Parameter);
    assert_eq!(g.nodes[1].status, Status::default());
    assert_eq!(g.links[0].param_type.as_deref(), Some("kwarg"));
    assert_eq!(g.node(NodeId(0)).map(|n| n.name.as_str()), Some("load_data"));
}

#[test]
fn test_from_json_missing_edge_name_defaults_empty() {
    let g = DomainGraph::from_json(r#"{"nodes": [], "links": [{"source": 1, "target": 2}]}"#)
        .unwrap();
    assert_eq!(g.links[0].edge_name, "");
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(DomainGraph::from_json("not json").is_err());
    assert!(DomainGraph::from_json(r#"{"nodes": [{"name": "no id"}]}"#).is_err());
}

#[test]
fn test_empty_graph() {
    let g = DomainGraph::default();
    assert!(g.is_empty());
    assert!(g.node(NodeId(0)).is_none());
}
