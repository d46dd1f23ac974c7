//! Include/exclude policy applied to every candidate path before the walker
//! descends into it or reads it.

use globset::{GlobBuilder, GlobMatcher};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Patterns excluded unless the caller explicitly replaces the list.
///
/// A fresh vector is returned on every call, so callers may extend their copy freely.
pub fn default_exclude_patterns() -> Vec<String> {
    [
        // Version control
        ".git", ".git/", ".svn", ".svn/", ".hg", ".hg/",
        ".gitignore", ".gitattributes", ".gitmodules",
        // Dependencies and build output
        "node_modules", "node_modules/",
        "vendor", "vendor/",
        "dist", "dist/",
        "build", "build/",
        // Binaries and archives
        "*.exe", "*.dll", "*.so", "*.dylib",
        "*.o", "*.obj", "*.a", "*.lib",
        "*.jar", "*.war", "*.ear", "*.zip",
        "*.tar.gz", "*.rar",
        // IDE
        ".idea", ".idea/", ".vscode", ".vscode/", ".vs", ".vs/",
        "*.swp", "*.swo",
        // Temp, caches and OS artifacts
        "*.tmp", "*.temp",
        ".cache", ".cache/", ".sass-cache", ".sass-cache/",
        ".DS_Store", "Thumbs.db",
        // Logs
        "*.log",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

/// Splits a comma-separated list, trimming whitespace and dropping empty items.
pub fn parse_patterns(patterns: &str) -> Vec<String> {
    patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
struct Pattern {
    /// Shell glob tested against the final path component. `None` when the
    /// pattern failed to compile, which makes it match nothing.
    glob: Option<GlobMatcher>,
    /// Set for patterns with a trailing separator, tested as a path prefix.
    prefix: Option<PathBuf>,
}

impl Pattern {
    fn compile(raw: &str) -> Self {
        let glob = match GlobBuilder::new(raw).literal_separator(true).build() {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Ignoring malformed pattern '{}': {}", raw, _e);
                None
            }
        };
        let prefix = if raw.ends_with(['/', MAIN_SEPARATOR]) {
            let trimmed = raw.trim_end_matches(['/', MAIN_SEPARATOR]);
            (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
        } else {
            None
        };
        Self { glob, prefix }
    }

    /// `relative` is `path` with the scan root stripped, when a root is known.
    fn matches(&self, path: &Path, relative: Option<&Path>) -> bool {
        if let Some(glob) = &self.glob {
            let base = path.file_name().map(Path::new).unwrap_or(path);
            if glob.is_match(base) {
                return true;
            }
        }
        self.prefix.as_deref().is_some_and(|prefix| {
            path.starts_with(prefix) || relative.is_some_and(|rel| rel.starts_with(prefix))
        })
    }
}

/// Compiled include and exclude pattern sets.
///
/// Exclusion always wins: a path matched by any exclude pattern is never included,
/// whatever the include set says. An empty include set admits every path that is
/// not excluded.
///
/// Directory patterns such as `docs/` are prefix-matched against the path as given
/// and, once [`Selector::rooted_at`] has been called, against the path relative to
/// the scan root.
#[derive(Debug, Clone)]
pub struct Selector {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    root: Option<PathBuf>,
}

impl Selector {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            include: include
                .into_iter()
                .map(|p| Pattern::compile(p.as_ref()))
                .collect(),
            exclude: exclude
                .into_iter()
                .map(|p| Pattern::compile(p.as_ref()))
                .collect(),
            root: None,
        }
    }

    pub fn rooted_at(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn relative<'p>(&self, path: &'p Path) -> Option<&'p Path> {
        self.root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .filter(|rel| !rel.as_os_str().is_empty())
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        self.exclude.iter().any(|p| p.matches(path, relative))
    }

    pub fn is_included(&self, path: &Path) -> bool {
        if self.is_excluded(path) {
            return false;
        }
        let relative = self.relative(path);
        self.include.is_empty() || self.include.iter().any(|p| p.matches(path, relative))
    }
}

impl From<&crate::DigestOptions> for Selector {
    fn from(options: &crate::DigestOptions) -> Self {
        Selector::new(&options.include_patterns, &options.exclude_patterns)
    }
}
