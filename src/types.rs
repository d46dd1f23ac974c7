use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// What the digest shows for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Content {
    /// Directories carry no content.
    None,
    /// The file's bytes, read verbatim.
    Text(String),
    /// The file exceeded the single-file size limit and was not opened.
    TooLarge,
    /// The file was classified as binary.
    Binary,
    /// The file passed classification but could not be read.
    Unreadable,
}

impl Content {
    /// Text that counts toward the token estimate. Sentinels contribute nothing.
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Content::TooLarge | Content::Binary | Content::Unreadable
        )
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::None => Ok(()),
            Content::Text(text) => f.write_str(text),
            Content::TooLarge => f.write_str("[File too large]"),
            Content::Binary => f.write_str("[Binary file]"),
            Content::Unreadable => f.write_str("[Error reading file]"),
        }
    }
}

/// One file or directory in a finished scan.
///
/// Directory sizes and counts cover the whole recorded subtree. Children are kept
/// in display order: directories first, then case-insensitively by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Final path component.
    pub name: String,
    /// Absolute path.
    pub path: PathBuf,
    pub is_dir: bool,
    /// Own size for files, recorded subtree total for directories.
    pub size: u64,
    /// Distance from the scan root, which sits at 0.
    pub depth: usize,
    pub content: Content,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    pub file_count: usize,
    pub dir_count: usize,
}

impl Node {
    pub(crate) fn file(name: String, path: PathBuf, size: u64, depth: usize) -> Self {
        Self {
            name,
            path,
            is_dir: false,
            size,
            depth,
            content: Content::None,
            children: Vec::new(),
            file_count: 0,
            dir_count: 0,
        }
    }

    pub(crate) fn directory(name: String, path: PathBuf, depth: usize) -> Self {
        Self {
            name,
            path,
            is_dir: true,
            size: 0,
            depth,
            content: Content::None,
            children: Vec::new(),
            file_count: 0,
            dir_count: 0,
        }
    }

    /// Takes ownership of a finished child and folds its totals into this node.
    pub(crate) fn adopt(&mut self, child: Node) {
        self.size += child.size;
        if child.is_dir {
            self.file_count += child.file_count;
            self.dir_count += child.dir_count + 1;
        } else {
            self.file_count += 1;
        }
        self.children.push(child);
    }

    pub(crate) fn sort_children(&mut self) {
        self.children.sort_by(display_order);
    }

    /// Characters of readable file content in this subtree.
    pub fn char_count(&self) -> usize {
        if !self.is_dir {
            return self.content.text().map_or(0, |t| t.chars().count());
        }
        self.children.iter().map(Node::char_count).sum()
    }
}

/// Directories before files, then case-insensitive name, then raw name bytes.
pub fn display_order(a: &Node, b: &Node) -> Ordering {
    entry_order((a.is_dir, a.name.as_str()), (b.is_dir, b.name.as_str()))
}

pub(crate) fn entry_order(a: (bool, &str), b: (bool, &str)) -> Ordering {
    b.0.cmp(&a.0)
        .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
        .then_with(|| a.1.as_bytes().cmp(b.1.as_bytes()))
}
