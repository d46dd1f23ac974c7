use crate::selector::default_exclude_patterns;
use serde::{Deserialize, Serialize};

/// Largest file whose content is read, in bytes (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
/// Deepest directory level whose entries are still enumerated.
pub const DEFAULT_MAX_DEPTH: usize = 20;
/// Maximum number of files recorded across one walk.
pub const DEFAULT_MAX_FILES: usize = 10_000;
/// Maximum cumulative size of recorded files across one walk (500 MiB).
pub const DEFAULT_MAX_TOTAL_SIZE: u64 = 500 * 1024 * 1024;
/// Output file used by the command-line tool when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "digest.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte in the first 512 bytes marks the file as binary.
    Simple,
    /// Runs `content_inspector` over the first 512 bytes.
    Accurate,
    /// Only the extension list is consulted.
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestOptions {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub max_file_size: u64,
    pub max_depth: usize,
    pub max_files: usize,
    pub max_total_size: u64,
    pub binary_detection: BinaryDetection,
    pub respect_gitignore: bool,
    pub follow_links: bool,
}
impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            include_patterns: Vec::new(),
            exclude_patterns: default_exclude_patterns(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            max_files: DEFAULT_MAX_FILES,
            max_total_size: DEFAULT_MAX_TOTAL_SIZE,
            binary_detection: BinaryDetection::Simple,
            respect_gitignore: false,
            follow_links: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct DigestBuilder {
    options: DigestOptions,
}
impl DigestBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    /// Appends to the exclude list; the built-in defaults stay in place.
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns.extend(patterns);
        self
    }
    /// Replaces the whole exclude list, built-in defaults included.
    pub fn replace_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.options.max_file_size = bytes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn max_files(mut self, count: usize) -> Self {
        self.options.max_files = count;
        self
    }
    pub fn max_total_size(mut self, bytes: u64) -> Self {
        self.options.max_total_size = bytes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> DigestOptions {
        self.options
    }
}
