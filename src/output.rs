//! Rendering of scanned trees into the digest text.
//!
//! Every function here is pure over a finished [`Node`]: the same tree always
//! renders to the same bytes. Writing the result to disk is left to
//! [`write_output`].

use crate::tree::format_tree;
use crate::{DigestError, Node};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Boundary line used between file blocks and between roots.
pub const SEPARATOR: &str = "================================================";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Summary, tree and contents as plain text.
    Text,
    /// The scanned trees serialized as JSON.
    Json,
}

/// The three sections rendered for one scanned root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub summary: String,
    pub tree: String,
    pub contents: String,
}

impl Digest {
    /// Joins the sections as `summary`, blank line, `tree`, blank line, `contents`.
    pub fn render(&self) -> String {
        let mut out =
            String::with_capacity(self.summary.len() + self.tree.len() + self.contents.len() + 2);
        out.push_str(&self.summary);
        out.push('\n');
        out.push_str(&self.tree);
        out.push('\n');
        out.push_str(&self.contents);
        out
    }
}

pub fn format_digest(root: &Node) -> Digest {
    Digest {
        summary: format_summary(root),
        tree: format_tree(root),
        contents: format_contents(root),
    }
}

/// Renders several digests, with a separator line between consecutive roots.
pub fn render_all(digests: &[Digest]) -> String {
    let mut out = String::new();
    for (i, digest) in digests.iter().enumerate() {
        if i > 0 {
            let _ = write!(out, "\n{SEPARATOR}\n\n");
        }
        out.push_str(&digest.render());
    }
    out
}

/// Renders scanned roots in the requested format.
pub fn format_roots(roots: &[Node], format: OutputFormat) -> Result<String, DigestError> {
    match format {
        OutputFormat::Text => {
            let digests: Vec<Digest> = roots.iter().map(format_digest).collect();
            Ok(render_all(&digests))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(roots)?),
    }
}

/// Writes rendered output, creating missing parent directories first.
pub fn write_output(path: impl AsRef<Path>, content: &str) -> Result<(), DigestError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DigestError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| DigestError::io(path, e))
}

pub fn format_summary(root: &Node) -> String {
    let mut out = String::new();
    if root.is_dir {
        let _ = writeln!(out, "Directory: {}\n", root.name);
        let _ = writeln!(out, "Files analyzed: {}", root.file_count);
        let _ = writeln!(out, "Total size: {}", format_size(root.size));
    } else {
        let lines = root.content.text().map_or(0, |t| t.matches('\n').count()) + 1;
        let _ = writeln!(out, "File: {}\n", root.name);
        let _ = writeln!(out, "Size: {}", format_size(root.size));
        let _ = writeln!(out, "Lines: {lines}");
    }
    let tokens = estimate_tokens(root);
    if tokens > 0 {
        let _ = writeln!(out, "\nEstimated tokens: {}", format_token_count(tokens));
    }
    out
}

pub fn format_contents(root: &Node) -> String {
    let mut out = String::new();
    if root.is_dir {
        for child in &root.children {
            push_blocks(child, "", &mut out);
        }
    } else {
        push_file_block(root, "", &mut out);
    }
    out
}

/// Walks a subtree pre-order; `parent_dir` is the header prefix for `node`.
fn push_blocks(node: &Node, parent_dir: &str, out: &mut String) {
    if !node.is_dir {
        push_file_block(node, parent_dir, out);
        return;
    }
    let dir = format!("{}/", node.name);
    for child in &node.children {
        push_blocks(child, &dir, out);
    }
}

fn push_file_block(node: &Node, parent_dir: &str, out: &mut String) {
    let _ = write!(
        out,
        "{SEPARATOR}\nFILE: {parent_dir}{}\n{SEPARATOR}\n{}\n\n",
        node.name, node.content
    );
}

/// Roughly one token per four characters of readable content.
pub fn estimate_tokens(root: &Node) -> usize {
    root.char_count() / 4
}

/// Formats a byte count with base-1024 units, e.g. `512 B` or `1.5 KB`.
pub fn format_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];
    if size < UNIT {
        return format!("{size} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}B", size as f64 / div as f64, UNITS[exp])
}

/// Formats a token count compactly: `999`, `1.5k`, `2.0M`.
pub fn format_token_count(count: usize) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 1_000_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    }
}
