use pathtree::{Tree, TreeError};
use std::sync::Arc;

fn telemetry_tree() -> Tree<u64> {
    let tree = Tree::new(1000);
    tree.update(&["interfaces", "interface", "eth0", "state", "counters", "in-octets"], 10);
    tree.update(&["interfaces", "interface", "eth0", "state", "counters", "out-octets"], 20);
    tree.update(&["interfaces", "interface", "eth1", "state", "oper-status"], 1);
    tree.update(&["system", "state", "hostname"], 7);
    tree
}

#[test]
fn deep_paths_share_ancestors() {
    let tree = telemetry_tree();
    assert_eq!(tree.root_segments(), vec!["interfaces", "system"]);
    assert_eq!(tree.children(&["interfaces", "interface"]).unwrap(), vec!["eth0", "eth1"]);
    assert_eq!(
        tree.children(&["interfaces", "interface", "eth0", "state", "counters"]).unwrap(),
        vec!["in-octets", "out-octets"]
    );
    // 6 + 1 + 3 + 3 distinct prefixes
    assert_eq!(tree.len(), 13);
}

#[test]
fn every_prefix_is_gettable() {
    let tree = telemetry_tree();
    let path = ["interfaces", "interface", "eth0", "state", "counters", "in-octets"];
    for depth in 1..=path.len() {
        let node = tree.get(&path[..depth]).unwrap();
        assert_eq!(node.path(), &path[..depth]);
    }
}

#[test]
fn latest_value_and_history_walk() {
    let tree = telemetry_tree();
    let path = ["system", "state", "hostname"];
    tree.update(&path, 8);
    tree.update(&path, 9);

    let node = tree.get(&path).unwrap();
    assert_eq!(node.peek(), Some(9));
    assert_eq!(node.history(), vec![7, 8, 9]);
    assert_eq!(node.recent(2), vec![9, 8]);
}

#[test]
fn deleting_subtree_leaves_other_roots() {
    let tree = telemetry_tree();
    let removed = tree.delete(&["interfaces", "interface", "eth0"]).unwrap();
    assert_eq!(removed.path(), &["interfaces", "interface", "eth0"]);

    assert!(matches!(
        tree.get(&["interfaces", "interface", "eth0", "state", "counters", "in-octets"]),
        Err(TreeError::NotFound { .. })
    ));
    assert_eq!(
        tree.get(&["interfaces", "interface", "eth1", "state", "oper-status"])
            .unwrap()
            .peek(),
        Some(1)
    );
    assert_eq!(tree.children(&["interfaces", "interface"]).unwrap(), vec!["eth1"]);
    assert_eq!(tree.get(&["system", "state", "hostname"]).unwrap().peek(), Some(7));
}

#[test]
fn delete_root_then_descendant_is_not_found() {
    let tree = Tree::new(0);
    tree.update(&["foo", "bar"], 42);
    let removed = tree.delete(&["foo"]).unwrap();
    assert_eq!(removed.peek(), None);
    assert!(tree.root_segments().is_empty());
    assert!(!tree.keys().contains(&"foo".to_string()));
    assert!(matches!(tree.get(&["foo", "bar"]), Err(TreeError::NotFound { .. })));
}

#[test]
fn idempotent_delete_keeps_structure() {
    let tree = telemetry_tree();
    let roots = tree.root_segments();
    let keys = tree.keys();
    assert!(tree.delete(&["interfaces", "missing"]).is_none());
    assert!(tree.delete(&["nothing"]).is_none());
    assert_eq!(tree.root_segments(), roots);
    assert_eq!(tree.keys(), keys);
}

#[test]
fn owned_string_paths_work() {
    let tree = Tree::new(0);
    let path: Vec<String> = "/a/b/c"
        .split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    let node = tree.update(&path, "up".to_string()).unwrap();
    let found = tree.get(&path).unwrap();
    assert!(Arc::ptr_eq(&node, &found));
    assert_eq!(found.peek().as_deref(), Some("up"));
}

#[test]
fn get_errors_are_typed() {
    let tree: Tree<u8> = Tree::default();
    let empty: Vec<String> = Vec::new();
    assert_eq!(tree.get(&empty).unwrap_err(), TreeError::InvalidArgument);
    assert_eq!(
        tree.get(&["a", "b"]).unwrap_err().to_string(),
        "path /a/b not found"
    );
}
