// ABOUTME: Drives a whole editing session through AppState, the way the window does.
// ABOUTME: Covers restore, edits, file commands and the autosave on shutdown.

use bst_app::{AppState, StatusKind};
use bst_core::{Color, ColorRole, Config, DataDir, TraversalOrder, TreeKind};

#[test]
fn session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataDir::new(dir.path().join("BSTVisualizer"));
    let config = Config::default();

    let mut state = AppState::restore(&config, data.clone());
    assert!(state.tree().is_empty());
    assert_eq!(state.properties().height, -1);

    state.insert("50 30 70 20 40 60 80");
    state.delete("30");
    // Two children: the successor 40 takes 30's place
    assert_eq!(
        state.tree().traversal(TraversalOrder::PreOrder),
        vec![50, 40, 20, 70, 60, 80]
    );

    let props = state.properties();
    assert_eq!(props.node_count, 6);
    assert_eq!(props.leaf_count, 3);
    assert_eq!(props.internal_count, 3);

    state.recolor(ColorRole::Text, Color::rgb(0xaa, 0xbb, 0xcc));
    assert_eq!(state.shutdown().kind, StatusKind::Info);

    let saved = std::fs::read_to_string(data.last_tree_path()).unwrap();
    assert_eq!(saved, "50 40 20 70 60 80");
    let settings = std::fs::read_to_string(data.settings_path()).unwrap();
    assert!(settings.contains("text-color:#aabbcc"));

    let restored = AppState::restore(&config, data);
    assert_eq!(restored.properties(), props);
    assert_eq!(restored.theme().text, Color::rgb(0xaa, 0xbb, 0xcc));
}

#[test]
fn user_files_resolve_inside_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(&Config::default(), DataDir::new(dir.path()));

    state.insert("10 5 15");
    assert!(!state.save_input("mine.txt").is_error());
    assert!(!state.save_input("mine.jpg").is_error());
    assert!(dir.path().join("mine.txt").exists());
    assert!(dir.path().join("mine.jpg").exists());

    state.reset();
    state.insert("1");
    let absolute = dir.path().join("mine.txt");
    assert!(!state.load_input(absolute.to_str().unwrap()).is_error());
    assert_eq!(state.tree().traversal(TraversalOrder::InOrder), vec![5, 10, 15]);
}

#[test]
fn corrupt_settings_keep_defaults_after_bad_entry() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataDir::new(dir.path());
    std::fs::write(
        data.settings_path(),
        "node-color:#000000\nbackground-color:#zzzzzz\ntext-color:#ffffff\n",
    )
    .unwrap();

    let state = AppState::restore(&Config::default(), data);
    assert_eq!(state.theme().node, Color::BLACK);
    assert_eq!(state.theme().background, Color::WHITE);
    assert_eq!(state.theme().text, Color::BLACK);
}

#[test]
fn corrupt_autosave_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataDir::new(dir.path());
    std::fs::write(data.last_tree_path(), "1 2 three").unwrap();

    let state = AppState::restore(&Config::default(), data);
    assert!(state.tree().is_empty());
}

#[test]
fn long_chain_export_is_refused_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = AppState::new(&Config::default(), DataDir::new(dir.path()));

    let keys: Vec<String> = (0..20_000).map(|k| k.to_string()).collect();
    assert!(!state.insert(&keys.join(" ")).is_error());
    assert_eq!(state.properties().height, 19_999);

    let status = state.save_input("chain.png");
    assert!(status.is_error());
    assert!(status.message.contains("Image was not saved"));
    assert!(!dir.path().join("chain.png").exists());

    // The text save still works for the same tree
    assert!(!state.save_input("chain.txt").is_error());
}

#[test]
fn configured_kind_applies_to_restore_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let data = DataDir::new(dir.path().join("data"));
    let config_path = dir.path().join("config.toml");
    std::fs::create_dir_all(data.root()).unwrap();
    std::fs::write(data.last_tree_path(), "1 2 3 4 5 6 7").unwrap();

    let mut config = Config::default();
    config.tree_kind = TreeKind::Avl;
    let mut state = AppState::restore(&config, data.clone()).with_config_path(&config_path);
    assert_eq!(state.properties().height, 2);

    state.set_kind(TreeKind::RedBlack);
    assert!(!state.shutdown().is_error());

    let config = Config::load(&config_path).unwrap();
    assert_eq!(config.tree_kind, TreeKind::RedBlack);
    let restored = AppState::restore(&config, data);
    assert_eq!(restored.tree().kind(), TreeKind::RedBlack);
    assert_eq!(restored.properties().node_count, 7);
}
