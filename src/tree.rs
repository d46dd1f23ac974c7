//! Box-drawing rendering of a scanned tree.

use crate::types::Node;
use std::fmt::Write;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// Renders the `Directory structure:` section.
///
/// A directory root is drawn as the last (and only) entry of an empty prefix, so
/// it starts with `└── `. A file root is a single line.
pub fn format_tree(root: &Node) -> String {
    let mut out = String::from("Directory structure:\n");
    if root.is_dir {
        draw(root, "", true, &mut out);
    } else {
        let _ = writeln!(out, "{LAST_BRANCH}{}", root.name);
    }
    out
}

fn draw(node: &Node, prefix: &str, is_last: bool, out: &mut String) {
    let connector = if is_last { LAST_BRANCH } else { BRANCH };
    let slash = if node.is_dir { "/" } else { "" };
    let _ = writeln!(out, "{prefix}{connector}{}{slash}", node.name);

    if node.children.is_empty() {
        return;
    }
    let child_prefix = format!("{prefix}{}", if is_last { BLANK } else { PIPE });
    let last = node.children.len() - 1;
    for (i, child) in node.children.iter().enumerate() {
        draw(child, &child_prefix, i == last, out);
    }
}
