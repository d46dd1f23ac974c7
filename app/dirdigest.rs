//! Command-line interface for dirdigest.
//!
//! Scans a directory (or an explicit list of files) and writes the digest to an
//! output file, `digest.txt` by default.

use clap::{Parser, ValueEnum};
use dirdigest::output::{self, OutputFormat};
use dirdigest::{
    BinaryDetection, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES,
    DEFAULT_MAX_TOTAL_SIZE, DEFAULT_OUTPUT_FILE, DigestBuilder, DigestOptions, Node,
    parse_patterns, process,
};
use std::path::{Path, PathBuf};
use std::process::exit;

/// dirdigest — turn a directory into a single reviewable text file
#[derive(Parser)]
#[command(name = "dirdigest", about, long_about = None, disable_version_flag = true)]
struct Cli {
    /// Source directory or file (default current dir)
    #[arg(default_value = ".")]
    source: PathBuf,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Patterns to include (comma-separated). Directories must match too, so
    /// `*.md` only finds top-level files; add a pattern such as `docs` to descend
    #[arg(short, long)]
    include: Option<String>,

    /// Patterns to exclude, added to the built-in defaults (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Specific files to analyze instead of SOURCE (comma-separated)
    #[arg(short, long)]
    files: Option<String>,

    /// Maximum file size to process in bytes
    #[arg(short, long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    size: u64,

    /// Deepest directory level whose entries are listed
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum number of files to include
    #[arg(long, default_value_t = DEFAULT_MAX_FILES)]
    max_files: usize,

    /// Maximum cumulative size of included files in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_TOTAL_SIZE)]
    max_total_size: u64,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the digest to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Show version information
    #[arg(short = 'v', long = "version")]
    version: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn options(&self) -> DigestOptions {
        let mut builder = DigestBuilder::new()
            .max_file_size(self.size)
            .max_depth(self.max_depth)
            .max_files(self.max_files)
            .max_total_size(self.max_total_size)
            .binary_detection(self.binary_detection)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links);
        if let Some(include) = &self.include {
            builder = builder.include_patterns(parse_patterns(include));
        }
        if let Some(exclude) = &self.exclude {
            builder = builder.exclude_patterns(parse_patterns(exclude));
        }
        builder.build()
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    if cli.version {
        println!("dirdigest version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    #[cfg(feature = "logging")]
    init_logging();

    let options = cli.options();
    let roots = match &cli.files {
        Some(files) => scan_files(&parse_patterns(files), &options),
        None => scan_source(&cli.source, &options),
    };

    let rendered = output::format_roots(&roots, cli.format.into()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1);
    });

    if cli.stdout {
        print!("{}", rendered);
        return;
    }
    if let Err(e) = output::write_output(&cli.output, &rendered) {
        eprintln!("Error: Failed to write output file: {}", e);
        exit(1);
    }
    println!("Analysis complete! Output written to: {}", cli.output.display());
}

fn scan_source(source: &Path, options: &DigestOptions) -> Vec<Node> {
    if !source.exists() {
        eprintln!("Error: Source '{}' does not exist", source.display());
        exit(1);
    }
    match process(source, options) {
        Ok(root) => vec![root],
        Err(e) => {
            eprintln!("Error: Failed to process '{}': {}", source.display(), e);
            exit(1);
        }
    }
}

fn scan_files(files: &[String], options: &DigestOptions) -> Vec<Node> {
    let mut roots = Vec::with_capacity(files.len());
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() {
            eprintln!("Error: File '{}' does not exist", file);
            continue;
        }
        match process(&path, options) {
            Ok(root) => roots.push(root),
            Err(e) => eprintln!("Error: Failed to process '{}': {}", file, e),
        }
    }
    if roots.is_empty() {
        eprintln!("Error: No valid files were found to process");
        exit(1);
    }
    roots
}
