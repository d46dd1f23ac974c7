//! Text/binary classification and content loading for a single file.

use crate::error::DigestError;
use crate::options::{BinaryDetection, DigestOptions};
use crate::types::Content;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Bytes inspected when sniffing for binary content.
const PROBE_LEN: u64 = 512;

const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "dylib", "obj", "o", "a", "lib", "bin", "dat", "db", "sqlite", "jpg",
    "jpeg", "png", "gif", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip", "tar", "gz",
    "rar", "7z",
];

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            BINARY_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Reads up to [`PROBE_LEN`] bytes from the start of the file.
fn probe(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(PROBE_LEN as usize);
    file.take(PROBE_LEN).read_to_end(&mut head)?;
    Ok(head)
}

/// Decides whether a file should be treated as binary.
///
/// The extension list is checked first, so a text file named `notes.bin` is
/// reported as binary. A file that cannot be probed is also treated as binary.
pub fn is_binary(path: &Path, detection: BinaryDetection) -> bool {
    if has_binary_extension(path) {
        return true;
    }
    if detection == BinaryDetection::None {
        return false;
    }
    let head = match probe(path) {
        Ok(head) => head,
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Could not probe {}: {}", path.display(), _e);
            return true;
        }
    };
    match detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&head).is_binary(),
        BinaryDetection::None => false,
    }
}

/// Produces the content recorded for a file of the given size.
///
/// Oversized files are not opened at all. A failure to read a file that passed
/// classification is returned as an error so the caller can record
/// [`Content::Unreadable`] and carry on.
pub fn load_content(
    path: &Path,
    size: u64,
    options: &DigestOptions,
) -> Result<Content, DigestError> {
    if size > options.max_file_size {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "File too large ({} > {}), skipping content: {}",
            size,
            options.max_file_size,
            path.display()
        );
        return Ok(Content::TooLarge);
    }
    if is_binary(path, options.binary_detection) {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Ok(Content::Binary);
    }
    let bytes = fs::read(path).map_err(|e| DigestError::io(path, e))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    Ok(Content::Text(text))
}
