//! # dirdigest
//!
//! `dirdigest` walks a file or directory and renders a single text *digest* of it:
//! a short summary, a tree diagram of the structure, and the concatenated contents
//! of every included file. The result is meant to be read by a person, or fed to a
//! tool that consumes plain text, to review a codebase at a glance.
//!
//! Scanning and rendering are separate steps. [`process`] builds an owned [`Node`]
//! tree, applying include/exclude patterns and the traversal limits in
//! [`DigestOptions`]. [`format_digest`] turns a finished tree into its three
//! sections without touching the filesystem.
//!
//! # Features
//!
//! - `logging` (default): reports skipped entries and unreadable files via `tracing`.
//!
//! # Example
//!
//! ```no_run
//! use dirdigest::{DigestBuilder, format_digest, process};
//!
//! let options = DigestBuilder::new()
//!     .include_patterns(vec!["*.rs".into(), "*.toml".into()])
//!     .max_file_size(1024 * 1024)
//!     .build();
//!
//! let root = process(".", &options).expect("Failed to scan directory");
//! let digest = format_digest(&root);
//!
//! println!("{}", digest.render());
//! ```

mod content;
mod engine;
mod error;
mod options;
pub mod output;
mod selector;
mod tree;
mod types;

pub use content::{is_binary, load_content};
pub use engine::process;
pub use error::DigestError;
pub use options::{
    BinaryDetection, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES,
    DEFAULT_MAX_TOTAL_SIZE, DEFAULT_OUTPUT_FILE, DigestBuilder, DigestOptions,
};
pub use output::{Digest, OutputFormat, SEPARATOR, format_digest};
pub use selector::{Selector, default_exclude_patterns, parse_patterns};
pub use tree::format_tree;
pub use types::{Content, Node, display_order};
