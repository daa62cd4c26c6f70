// ABOUTME: Application state and the command handlers behind every control.
// ABOUTME: Handlers never fail outright; each one reports back through a Status.

use std::fmt;
use std::path::{Path, PathBuf};

use bst_core::storage::{format_keys, load_tree, save_tree};
use bst_core::{
    BinarySearchTree, Color, ColorRole, Config, DataDir, SearchPath, Theme, TraversalOrder,
    TreeKind,
};
use bst_layout::{TreeLayout, Zoom};
use bst_renderer::export_image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line message shown in the bottom bar after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::info("")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Snapshot of the tree's statistics and traversals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub height: i32,
    pub node_count: usize,
    pub leaf_count: usize,
    pub internal_count: usize,
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub in_order: Vec<i32>,
    pub pre_order: Vec<i32>,
    pub post_order: Vec<i32>,
}

impl Properties {
    pub fn of(tree: &BinarySearchTree) -> Self {
        Self {
            height: tree.height(),
            node_count: tree.node_count(),
            leaf_count: tree.leaf_count(),
            internal_count: tree.internal_count(),
            min: tree.min(),
            max: tree.max(),
            in_order: tree.traversal(TraversalOrder::InOrder),
            pre_order: tree.traversal(TraversalOrder::PreOrder),
            post_order: tree.traversal(TraversalOrder::PostOrder),
        }
    }

    pub fn traversal(&self, order: TraversalOrder) -> &[i32] {
        match order {
            TraversalOrder::InOrder => &self.in_order,
            TraversalOrder::PreOrder => &self.pre_order,
            TraversalOrder::PostOrder => &self.post_order,
        }
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Node Count: {}", self.node_count)?;
        writeln!(f, "Leaf Nodes: {}", self.leaf_count)?;
        writeln!(f, "Internal Nodes: {}", self.internal_count)?;
        writeln!(f, "Minimum: {}", key_or_dash(self.min))?;
        writeln!(f, "Maximum: {}", key_or_dash(self.max))?;
        for order in TraversalOrder::all() {
            writeln!(f, "{}: {}", order.label(), format_keys(self.traversal(*order)))?;
        }
        Ok(())
    }
}

pub fn key_or_dash(key: Option<i32>) -> String {
    key.map_or_else(|| "-".to_string(), |k| k.to_string())
}

/// Parse exactly one key out of a text field
fn parse_single(input: &str, action: &str) -> Result<i32, Status> {
    let mut tokens = input.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (None, _) => Err(Status::error(format!("Enter a value to {}", action))),
        (Some(token), None) => token
            .parse()
            .map_err(|_| Status::error(format!("Not an integer: {}", token))),
        (Some(_), Some(_)) => Err(Status::error(format!("Enter a single value to {}", action))),
    }
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

/// Keys highlighted one more at a time on every `step`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Playback {
    keys: Vec<i32>,
    shown: usize,
}

/// Everything the window shows, plus the files it reads and writes
pub struct AppState {
    tree: BinarySearchTree,
    theme: Theme,
    zoom: Zoom,
    layout: TreeLayout,
    data: DataDir,
    config: Config,
    /// Config as last read or written, to skip saving when nothing changed
    saved_config: Config,
    config_path: Option<PathBuf>,
    search: Option<SearchPath>,
    playback: Option<Playback>,
    status: Status,
}

impl AppState {
    /// Empty tree of the configured kind and default colors
    pub fn new(config: &Config, data: DataDir) -> Self {
        let tree = BinarySearchTree::with_kind(config.tree_kind);
        let layout = bst_layout::layout(&tree, &config.layout);
        Self {
            tree,
            theme: Theme::default(),
            zoom: Zoom::new(config.zoom),
            layout,
            data,
            config: config.clone(),
            saved_config: config.clone(),
            config_path: None,
            search: None,
            playback: None,
            status: Status::default(),
        }
    }

    /// Write the config back to `path` on shutdown when it changed
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Start from the tree and colors autosaved in `data`, when present
    pub fn restore(config: &Config, data: DataDir) -> Self {
        let mut state = Self::new(config, data);
        if let Err(e) = state.data.ensure() {
            tracing::warn!(
                "Could not create data directory {}: {}",
                state.data.root().display(),
                e
            );
        }

        let tree_path = state.data.last_tree_path();
        if tree_path.exists() {
            match load_tree(&tree_path, state.tree.kind()) {
                Ok(tree) => {
                    tracing::info!(
                        "Restored {} node(s) from {}",
                        tree.node_count(),
                        tree_path.display()
                    );
                    state.replace_tree(tree);
                }
                Err(e) => tracing::warn!("Could not restore {}: {}", tree_path.display(), e),
            }
        }

        let settings_path = state.data.settings_path();
        if settings_path.exists() {
            match Theme::load(&settings_path) {
                Ok((theme, report)) => {
                    tracing::debug!("Loaded settings: {:?}", report);
                    state.theme = theme;
                }
                Err(e) => tracing::warn!("Could not read {}: {}", settings_path.display(), e),
            }
        }

        state
    }

    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    /// Layout of the current tree, kept in sync by every mutating command
    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    pub fn data_dir(&self) -> &DataDir {
        &self.data
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search(&self) -> Option<&SearchPath> {
        self.search.as_ref()
    }

    /// Keys revealed so far by the running search or traversal
    pub fn highlight(&self) -> &[i32] {
        self.playback
            .as_ref()
            .map(|p| &p.keys[..p.shown])
            .unwrap_or(&[])
    }

    /// True while `step` still has keys to reveal
    pub fn is_playing(&self) -> bool {
        self.playback
            .as_ref()
            .is_some_and(|p| p.shown < p.keys.len())
    }

    /// Reveal the next key of the playback. False once everything is shown.
    pub fn step(&mut self) -> bool {
        match self.playback.as_mut() {
            Some(p) if p.shown < p.keys.len() => {
                p.shown += 1;
                true
            }
            _ => false,
        }
    }

    fn report(&mut self, status: Status) -> Status {
        tracing::debug!("{:?}: {}", status.kind, status.message);
        self.status = status.clone();
        status
    }

    fn relayout(&mut self) {
        self.search = None;
        self.playback = None;
        self.layout = bst_layout::layout(&self.tree, &self.config.layout);
    }

    fn replace_tree(&mut self, tree: BinarySearchTree) {
        self.tree = tree;
        self.relayout();
    }

    /// Insert every whitespace-separated integer in `input`
    pub fn insert(&mut self, input: &str) -> Status {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.is_empty() {
            return self.report(Status::error("Enter a value to insert"));
        }

        let mut inserted = 0;
        let mut duplicates = Vec::new();
        let mut invalid = Vec::new();
        for token in &tokens {
            match token.parse::<i32>() {
                Ok(key) if self.tree.insert(key) => inserted += 1,
                Ok(key) => duplicates.push(key),
                Err(_) => invalid.push(*token),
            }
        }
        if inserted > 0 {
            self.relayout();
        }

        let status = if tokens.len() == 1 {
            if inserted == 1 {
                Status::info("Value inserted")
            } else if !duplicates.is_empty() {
                Status::error("Duplicate value")
            } else {
                Status::error(format!("Not an integer: {}", tokens[0]))
            }
        } else {
            let mut message = format!("Inserted {} of {} values", inserted, tokens.len());
            if !duplicates.is_empty() {
                message.push_str(&format!("; duplicates: {}", format_keys(&duplicates)));
            }
            if !invalid.is_empty() {
                message.push_str(&format!("; not integers: {}", invalid.join(" ")));
            }
            if inserted == 0 {
                Status::error(message)
            } else {
                Status::info(message)
            }
        };
        self.report(status)
    }

    pub fn delete(&mut self, input: &str) -> Status {
        let key = match parse_single(input, "delete") {
            Ok(key) => key,
            Err(status) => return self.report(status),
        };
        let status = if self.tree.delete(key) {
            self.relayout();
            Status::info("Value deleted")
        } else {
            Status::error("Value not present in tree")
        };
        self.report(status)
    }

    /// Record the search path for `input` and start revealing it from the
    /// root, one node per `step`
    pub fn find(&mut self, input: &str) -> Status {
        let key = match parse_single(input, "find") {
            Ok(key) => key,
            Err(status) => return self.report(status),
        };
        let path = self.tree.search_path(key);
        let status = if path.found {
            Status::info(format!("Found {} at depth {}", key, path.visited.len() - 1))
        } else {
            Status::error(format!("{} is not in the tree", key))
        };
        self.playback = Some(Playback {
            shown: path.visited.len().min(1),
            keys: path.visited.clone(),
        });
        self.search = Some(path);
        self.report(status)
    }

    /// Reveal the keys of `order` one per `step`, starting with none
    pub fn traverse(&mut self, order: TraversalOrder) -> Status {
        if self.tree.is_empty() {
            return self.report(Status::error("Tree is empty"));
        }
        self.search = None;
        self.playback = Some(Playback {
            keys: self.tree.traversal(order),
            shown: 0,
        });
        self.report(Status::info(order.label()))
    }

    /// Rebuild the tree as `kind` by replaying its pre-order
    pub fn set_kind(&mut self, kind: TreeKind) -> Status {
        if self.tree.kind() == kind {
            return self.status.clone();
        }
        let tree = self.tree.rebuild(kind);
        tracing::info!("Rebuilt {} node(s) as {}", tree.node_count(), kind);
        self.replace_tree(tree);
        self.config.tree_kind = kind;
        self.report(Status::info(format!("Switched to {}", kind.label())))
    }

    pub fn zoom_in(&mut self) -> Status {
        let status = if self.zoom.zoom_in() {
            Status::info(format!("Zoom {:.0}%", self.zoom.scale() * 100.0))
        } else {
            Status::error("Maximum zoom reached")
        };
        self.report(status)
    }

    pub fn reset_zoom(&mut self) -> Status {
        self.zoom.reset();
        self.report(Status::info("Zoom 100%"))
    }

    /// Remember the window size so the next start opens at it
    pub fn set_window_size(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.config.window.width = width;
            self.config.window.height = height;
        }
    }

    pub fn zoom_out(&mut self) -> Status {
        let status = if self.zoom.zoom_out() {
            Status::info(format!("Zoom {:.0}%", self.zoom.scale() * 100.0))
        } else {
            Status::error("Minimum zoom reached")
        };
        self.report(status)
    }

    /// Replace the tree with a save file. On failure the tree is untouched.
    pub fn load(&mut self, path: &Path) -> Status {
        let status = match load_tree(path, self.tree.kind()) {
            Ok(tree) => {
                tracing::info!("Loaded {} node(s) from {}", tree.node_count(), path.display());
                self.replace_tree(tree);
                Status::info("File successfully opened")
            }
            Err(e) => {
                tracing::warn!("Could not open {}: {}", path.display(), e);
                Status::error(format!("Could not open file: {}", e))
            }
        };
        self.report(status)
    }

    /// Save as pre-order text for `.txt`, otherwise export an image at the
    /// current zoom
    pub fn save(&mut self, path: &Path) -> Status {
        let status = if is_text_file(path) {
            match save_tree(&self.tree, path) {
                Ok(()) => {
                    tracing::info!("Saved tree to {}", path.display());
                    Status::info("File successfully saved")
                }
                Err(e) => {
                    tracing::warn!("Could not save {}: {}", path.display(), e);
                    Status::error(format!("File was not saved: {}", e))
                }
            }
        } else {
            let scale = self.zoom.scale() as f32;
            let max_pixels = self.config.export.max_pixels;
            let highlight = self.highlight();
            match export_image(&self.layout, &self.theme, scale, highlight, max_pixels, path) {
                Ok(()) => Status::info("Image saved"),
                Err(e) => {
                    tracing::warn!("Could not export {}: {}", path.display(), e);
                    Status::error(format!("Image was not saved: {}", e))
                }
            }
        };
        self.report(status)
    }

    /// `load` a path typed by the user, relative to the data directory
    pub fn load_input(&mut self, input: &str) -> Status {
        if input.trim().is_empty() {
            return self.report(Status::error("Enter a file path"));
        }
        let path = self.data.resolve(input);
        self.load(&path)
    }

    /// `save` to a path typed by the user, relative to the data directory
    pub fn save_input(&mut self, input: &str) -> Status {
        if input.trim().is_empty() {
            return self.report(Status::error("Enter a file path"));
        }
        let path = self.data.resolve(input);
        self.save(&path)
    }

    pub fn reset(&mut self) -> Status {
        self.replace_tree(BinarySearchTree::with_kind(self.tree.kind()));
        self.report(Status::info("Reset tree"))
    }

    pub fn recolor(&mut self, role: ColorRole, color: Color) -> Status {
        if self.theme.get(role) == color {
            return self.status.clone();
        }
        self.theme.set(role, color);
        self.report(Status::info(format!("{} set to {}", role.label(), color)))
    }

    pub fn properties(&self) -> Properties {
        Properties::of(&self.tree)
    }

    /// Autosave the tree and the colors into the data directory, and the
    /// config when it changed
    pub fn shutdown(&mut self) -> Status {
        let mut failures = Vec::new();
        if let Err(e) = save_tree(&self.tree, &self.data.last_tree_path()) {
            tracing::error!("Failed to autosave tree: {}", e);
            failures.push(format!("tree: {}", e));
        }
        if let Err(e) = self.theme.save(&self.data.settings_path()) {
            tracing::error!("Failed to autosave settings: {}", e);
            failures.push(format!("settings: {}", e));
        }
        if let Some(path) = &self.config_path {
            if self.config != self.saved_config {
                match self.config.save(path) {
                    Ok(()) => self.saved_config = self.config.clone(),
                    Err(e) => {
                        tracing::error!("Failed to save config: {}", e);
                        failures.push(format!("config: {}", e));
                    }
                }
            }
        }

        let status = if failures.is_empty() {
            tracing::info!("Saved session to {}", self.data.root().display());
            Status::info("Session saved")
        } else {
            Status::error(format!("Autosave failed ({})", failures.join("; ")))
        };
        self.report(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(&Config::default(), DataDir::new(dir.path()));
        (dir, state)
    }

    #[test]
    fn insert_reports_each_kind_of_token() {
        let (_dir, mut state) = state();
        assert_eq!(state.insert("5").message, "Value inserted");
        assert_eq!(state.insert("5").message, "Duplicate value");
        assert_eq!(state.insert("five").message, "Not an integer: five");

        let status = state.insert("3 8 5 x 1");
        assert!(!status.is_error());
        assert_eq!(
            status.message,
            "Inserted 3 of 5 values; duplicates: 5; not integers: x"
        );
        assert_eq!(state.tree().traversal(TraversalOrder::InOrder), vec![1, 3, 5, 8]);
        assert_eq!(state.layout().nodes().len(), 4);
    }

    #[test]
    fn blank_input_is_rejected() {
        let (_dir, mut state) = state();
        assert!(state.insert("   ").is_error());
        assert!(state.delete("").is_error());
        assert!(state.find("1 2").is_error());
        assert!(state.tree().is_empty());
    }

    #[test]
    fn delete_missing_value_leaves_tree() {
        let (_dir, mut state) = state();
        state.insert("5 3 8");
        assert_eq!(state.delete("4").message, "Value not present in tree");
        assert_eq!(state.delete("3").message, "Value deleted");
        assert_eq!(state.tree().node_count(), 2);
        assert_eq!(state.layout().nodes().len(), 2);
    }

    #[test]
    fn find_highlights_path_until_tree_changes() {
        let (_dir, mut state) = state();
        state.insert("50 30 70 40");
        let status = state.find("40");
        assert_eq!(status.message, "Found 40 at depth 2");
        assert_eq!(state.highlight(), &[50]);
        assert!(state.is_playing());
        assert!(state.step());
        assert!(state.step());
        assert_eq!(state.highlight(), &[50, 30, 40]);
        assert!(!state.step());
        assert!(!state.is_playing());

        let status = state.find("45");
        assert!(status.is_error());
        while state.step() {}
        assert_eq!(state.highlight(), &[50, 30, 40]);
        assert!(!state.search().unwrap().found);

        state.insert("10");
        assert!(state.highlight().is_empty());
        assert!(state.search().is_none());
    }

    #[test]
    fn traversal_playback_reveals_one_key_per_step() {
        let (_dir, mut state) = state();
        assert!(state.traverse(TraversalOrder::InOrder).is_error());

        state.insert("2 1 3");
        state.traverse(TraversalOrder::PostOrder);
        assert!(state.highlight().is_empty());
        let mut seen = Vec::new();
        while state.step() {
            seen.push(state.highlight().to_vec());
        }
        assert_eq!(seen, vec![vec![1], vec![1, 3], vec![1, 3, 2]]);

        state.delete("3");
        assert!(!state.is_playing());
        assert!(state.highlight().is_empty());
    }

    #[test]
    fn switching_kind_rebuilds_and_keeps_keys() {
        let (_dir, mut state) = state();
        state.insert("1 2 3 4 5 6 7");
        assert_eq!(state.properties().height, 6);

        let status = state.set_kind(TreeKind::Avl);
        assert_eq!(status.message, "Switched to AVL tree");
        assert_eq!(state.tree().kind(), TreeKind::Avl);
        assert_eq!(state.properties().height, 2);
        assert_eq!(state.config().tree_kind, TreeKind::Avl);
        assert_eq!(state.layout().nodes().len(), 7);

        state.set_kind(TreeKind::RedBlack);
        assert_eq!(state.layout().kind(), TreeKind::RedBlack);
        assert_eq!(
            state.tree().traversal(TraversalOrder::InOrder),
            (1..=7).collect::<Vec<_>>()
        );

        // New keys go through the balanced insert, reset keeps the kind
        state.insert("8 9 10");
        assert!(state.properties().height <= 5);
        state.reset();
        assert_eq!(state.tree().kind(), TreeKind::RedBlack);
    }

    #[test]
    fn reset_zoom_returns_to_full_size() {
        let (_dir, mut state) = state();
        state.zoom_in();
        state.zoom_in();
        assert!(state.zoom().scale() > 1.0);
        assert_eq!(state.reset_zoom().message, "Zoom 100%");
        assert_eq!(state.zoom().scale(), 1.0);
    }

    #[test]
    fn oversized_export_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.export.max_pixels = 100;
        let mut state = AppState::new(&config, DataDir::new(dir.path()));
        state.insert("2 1 3");

        let status = state.save_input("tree.png");
        assert!(status.is_error());
        assert!(status.message.starts_with("Image was not saved"));
        assert!(!dir.path().join("tree.png").exists());
    }

    #[test]
    fn shutdown_writes_changed_config_only() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut state = AppState::new(&Config::default(), DataDir::new(dir.path()))
            .with_config_path(&config_path);

        assert!(!state.shutdown().is_error());
        assert!(!config_path.exists());

        state.set_kind(TreeKind::Avl);
        state.set_window_size(1024.0, 700.0);
        state.set_window_size(f32::NAN, 10.0);
        assert!(!state.shutdown().is_error());

        let saved = Config::load(&config_path).unwrap();
        assert_eq!(saved.tree_kind, TreeKind::Avl);
        assert_eq!((saved.window.width, saved.window.height), (1024.0, 700.0));
    }

    #[test]
    fn zoom_stops_at_bounds() {
        let (_dir, mut state) = state();
        let mut steps = 0;
        while !state.zoom_in().is_error() {
            steps += 1;
        }
        assert_eq!(state.status().message, "Maximum zoom reached");
        assert!(steps > 0);
        for _ in 0..steps {
            assert!(!state.zoom_out().is_error());
        }
        assert_eq!(state.zoom().scale(), 1.0);
    }

    #[test]
    fn failed_load_keeps_tree() {
        let (dir, mut state) = state();
        state.insert("5 3 8");
        std::fs::write(dir.path().join("bad.txt"), "4 2 oops").unwrap();

        assert!(state.load_input("bad.txt").is_error());
        assert!(state.load_input("missing.txt").is_error());
        assert!(state.load_input("").is_error());
        assert_eq!(state.tree().traversal(TraversalOrder::PreOrder), vec![5, 3, 8]);
    }

    #[test]
    fn save_then_load_restores_shape() {
        let (_dir, mut state) = state();
        state.insert("50 30 70 20 40 60 80");
        assert_eq!(state.save_input("tree.txt").message, "File successfully saved");

        state.reset();
        assert!(state.tree().is_empty());

        assert_eq!(state.load_input("tree.txt").message, "File successfully opened");
        assert_eq!(
            state.tree().traversal(TraversalOrder::PreOrder),
            vec![50, 30, 20, 40, 70, 60, 80]
        );
        assert_eq!(state.properties().height, 2);
    }

    #[test]
    fn non_text_save_exports_an_image() {
        let (dir, mut state) = state();
        state.insert("2 1 3");
        assert_eq!(state.save_input("tree.png").message, "Image saved");
        assert!(dir.path().join("tree.png").exists());

        assert!(state.save_input("tree.xyz").is_error());
        assert!(!dir.path().join("tree.xyz").exists());
    }

    #[test]
    fn recolor_updates_theme() {
        let (_dir, mut state) = state();
        let status = state.recolor(ColorRole::Node, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(status.message, "Node color set to #123456");
        assert_eq!(state.theme().node, Color::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn properties_display_lists_everything() {
        let tree: BinarySearchTree = [2, 1, 3].into_iter().collect();
        let text = Properties::of(&tree).to_string();
        assert!(text.contains("Height: 1\n"));
        assert!(text.contains("Leaf Nodes: 2\n"));
        assert!(text.contains("Internal Nodes: 1\n"));
        assert!(text.contains("Minimum: 1\n"));
        assert!(text.contains("Maximum: 3\n"));
        assert!(text.contains("Inorder Traversal: 1 2 3\n"));
        assert!(text.contains("Preorder Traversal: 2 1 3\n"));
        assert!(text.contains("Postorder Traversal: 1 3 2\n"));

        let empty = Properties::of(&BinarySearchTree::new()).to_string();
        assert!(empty.contains("Minimum: -\n"));
    }

    #[test]
    fn shutdown_and_restore_round_trip_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDir::new(dir.path().join("data"));
        let config = Config::default();

        let mut state = AppState::restore(&config, data.clone());
        assert!(data.root().is_dir());
        state.insert("8 4 12 2");
        state.recolor(ColorRole::Background, Color::rgb(0, 0, 0));
        assert!(!state.shutdown().is_error());

        let restored = AppState::restore(&config, data);
        assert_eq!(
            restored.tree().traversal(TraversalOrder::PreOrder),
            vec![8, 4, 2, 12]
        );
        assert_eq!(restored.theme().background, Color::BLACK);
        assert_eq!(restored.theme().node, Color::SKY);
    }
}
