// ABOUTME: Tree save files and the on-disk data directory.
// ABOUTME: Trees are stored as whitespace-separated pre-order keys.

use std::path::{Path, PathBuf};

use crate::tree::{BinarySearchTree, TraversalOrder, TreeKind};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid key {token:?} on line {line}")]
    InvalidKey { token: String, line: usize },

    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Parse whitespace-separated integer keys. Any bad token fails the whole parse.
pub fn parse_keys(content: &str) -> Result<Vec<i32>, StorageError> {
    let mut keys = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        for token in line.split_whitespace() {
            let key = token.parse::<i32>().map_err(|_| StorageError::InvalidKey {
                token: token.to_string(),
                line: idx + 1,
            })?;
            keys.push(key);
        }
    }
    Ok(keys)
}

/// Space-separated keys on a single line
pub fn format_keys(keys: &[i32]) -> String {
    keys.iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read the keys of a tree save file without touching any tree
pub fn load_keys(path: &Path) -> Result<Vec<i32>, StorageError> {
    let content = std::fs::read_to_string(path)?;
    parse_keys(&content)
}

/// Build a tree of `kind` from a save file. Duplicate keys in the file are
/// skipped.
pub fn load_tree(path: &Path, kind: TreeKind) -> Result<BinarySearchTree, StorageError> {
    let keys = load_keys(path)?;
    let total = keys.len();
    let mut tree = BinarySearchTree::with_kind(kind);
    tree.extend(keys);
    if tree.node_count() != total {
        tracing::warn!(
            "Skipped {} duplicate key(s) in {}",
            total - tree.node_count(),
            path.display()
        );
    }
    Ok(tree)
}

/// Write the tree's pre-order traversal, creating parent directories as needed
pub fn save_tree(tree: &BinarySearchTree, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = format_keys(&tree.traversal(TraversalOrder::PreOrder));
    std::fs::write(path, text)?;
    Ok(())
}

/// Directory holding the autosaved tree and the color settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub const LAST_TREE_FILE: &'static str = "last_bst.txt";
    pub const SETTINGS_FILE: &'static str = "settings.txt";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/Documents/BSTVisualizer`, or the local data dir when there is no
    /// documents folder
    pub fn default_path() -> Option<PathBuf> {
        dirs::document_dir()
            .or_else(dirs::data_local_dir)
            .map(|p| p.join("BSTVisualizer"))
    }

    pub fn at_default() -> Result<Self, StorageError> {
        Self::default_path().map(Self::new).ok_or(StorageError::NoDataDir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory if it does not exist yet
    pub fn ensure(&self) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    pub fn last_tree_path(&self) -> PathBuf {
        self.root.join(Self::LAST_TREE_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(Self::SETTINGS_FILE)
    }

    /// Resolve a user-entered path: relative paths land inside the data dir
    pub fn resolve(&self, input: &str) -> PathBuf {
        let path = Path::new(input.trim());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
