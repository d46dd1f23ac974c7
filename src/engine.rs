use crate::content::load_content;
use crate::error::DigestError;
use crate::options::DigestOptions;
use crate::selector::Selector;
use crate::types::{Content, Node, entry_order};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Running totals shared by one whole walk, not reset per directory.
#[derive(Debug, Default)]
struct Budget {
    files: usize,
    bytes: u64,
}
impl Budget {
    fn admits(&self, size: u64, options: &DigestOptions) -> bool {
        if self.files >= options.max_files {
            return false;
        }
        self.bytes.saturating_add(size) <= options.max_total_size
    }
    fn charge(&mut self, size: u64) {
        self.files += 1;
        self.bytes = self.bytes.saturating_add(size);
    }
}
struct Walker<'a> {
    options: &'a DigestOptions,
    selector: Selector,
    budget: Budget,
    /// Canonical paths of the directories currently being expanded, root first.
    ancestors: Vec<PathBuf>,
}
impl<'a> Walker<'a> {
    fn new(options: &'a DigestOptions, root: &Path) -> Self {
        Self {
            options,
            selector: Selector::from(options).rooted_at(root),
            budget: Budget::default(),
            ancestors: Vec::new(),
        }
    }
    /// Lists the direct entries of `dir` in display order.
    ///
    /// Only a failure to open the directory itself is an error; entries the walker
    /// cannot describe are logged and dropped.
    fn list_dir(&self, dir: &Path) -> Result<Vec<DirEntry>, DigestError> {
        fs::read_dir(dir).map_err(|e| DigestError::io(dir, e))?;
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .git_ignore(self.options.respect_gitignore)
            .parents(self.options.respect_gitignore)
            .require_git(false)
            .follow_links(self.options.follow_links)
            .max_depth(Some(1));
        let mut entries = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) if entry.depth() == 0 => {}
                Ok(entry) => entries.push(entry),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping entry in {}: {}", dir.display(), _e);
                }
            }
        }
        entries.sort_by(|a, b| {
            let a_name = a.file_name().to_string_lossy();
            let b_name = b.file_name().to_string_lossy();
            entry_order((is_dir_entry(a), &*a_name), (is_dir_entry(b), &*b_name))
        });
        Ok(entries)
    }
    /// Fills in `node`'s children, returning the completed subtree.
    ///
    /// A directory deeper than the depth limit is kept but left unexpanded. A
    /// directory that resolves to one of its own ancestors (a followed symlink
    /// loop) is an error, so the caller drops that subtree.
    fn walk_dir(&mut self, node: Node) -> Result<Node, DigestError> {
        if node.depth > self.options.max_depth {
            return Ok(node);
        }
        let real = fs::canonicalize(&node.path).map_err(|e| DigestError::io(&node.path, e))?;
        if self.ancestors.contains(&real) {
            return Err(DigestError::Walk(format!(
                "{} loops back to {}",
                node.path.display(),
                real.display()
            )));
        }
        self.ancestors.push(real);
        let result = self.expand(node);
        self.ancestors.pop();
        result
    }
    fn expand(&mut self, mut node: Node) -> Result<Node, DigestError> {
        for entry in self.list_dir(&node.path)? {
            let path = entry.path().to_path_buf();
            if !self.selector.is_included(&path) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let depth = node.depth + 1;
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Cannot stat {}: {}", path.display(), _e);
                    continue;
                }
            };
            if metadata.is_dir() {
                match self.walk_dir(Node::directory(name, path, depth)) {
                    Ok(child) => node.adopt(child),
                    Err(_e) => {
                        #[cfg(feature = "logging")]
                        tracing::warn!("Skipping subtree: {}", _e);
                    }
                }
            } else if let Some(child) = self.visit_file(name, path, metadata.len(), depth) {
                node.adopt(child);
            }
        }
        node.sort_children();
        Ok(node)
    }
    fn visit_file(&mut self, name: String, path: PathBuf, size: u64, depth: usize) -> Option<Node> {
        if !self.budget.admits(size, self.options) {
            #[cfg(feature = "logging")]
            tracing::debug!("Budget exhausted, omitting {}", path.display());
            return None;
        }
        let content = match load_content(&path, size, self.options) {
            Ok(content) => content,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("{}", _e);
                Content::Unreadable
            }
        };
        self.budget.charge(size);
        let mut node = Node::file(name, path, size, depth);
        node.content = content;
        Some(node)
    }
}
fn is_dir_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_dir())
}
/// Name shown for a scan root: its final component, or the whole path when
/// there is none (`/`, or a path ending in `..`).
fn root_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => fs::canonicalize(path)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| path.display().to_string()),
    }
}
/// Scans a file or directory and returns the finished tree.
///
/// A missing root, a root that cannot be stat-ed, a root directory that cannot be
/// listed, or a root file that cannot be read is an error. Everything below the
/// root degrades instead: unreadable subtrees are dropped and unreadable files
/// are recorded as [`Content::Unreadable`].
pub fn process(path: impl AsRef<Path>, options: &DigestOptions) -> Result<Node, DigestError> {
    let path = path.as_ref();
    #[cfg(feature = "logging")]
    tracing::debug!("Starting digest of {}", path.display());
    let metadata = fs::metadata(path).map_err(|e| DigestError::io(path, e))?;
    let absolute = std::path::absolute(path).map_err(|e| DigestError::io(path, e))?;
    let name = root_name(&absolute);
    if metadata.is_dir() {
        let root = Node::directory(name, absolute.clone(), 0);
        return Walker::new(options, &absolute).walk_dir(root);
    }
    let content = load_content(&absolute, metadata.len(), options)?;
    let mut node = Node::file(name, absolute, metadata.len(), 0);
    node.content = content;
    Ok(node)
}
