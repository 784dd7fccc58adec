use pathtree::{ConfigLoader, Tree};
use std::fs;
use tempfile::TempDir;

#[test]
fn tree_built_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pathtree.toml");
    fs::write(&path, "capacity = 256\nhistory_capacity = 4\n").unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    let tree: Tree<u32> = Tree::with_config(&config).unwrap();
    assert_eq!(tree.capacity(), 256);
    assert_eq!(tree.history_capacity(), 4);

    for v in 0..10 {
        tree.update(&["sensor"], v);
    }
    assert_eq!(tree.get(&["sensor"]).unwrap().history(), vec![6, 7, 8, 9]);
}

#[test]
fn default_config_builds_default_tree() {
    let tree: Tree<u32> = Tree::with_config(&ConfigLoader::default()).unwrap();
    assert_eq!(tree.history_capacity(), 100);
    assert_eq!(tree.capacity(), 0);
}
