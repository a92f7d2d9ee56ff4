//! Documentation discovery for the documentation-backed prompt.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Default directory scanned for `.mdx` documentation files.
pub const DEFAULT_DOCS_DIR: &str = "deepgram-docs/fern/docs";

const DOC_EXTENSION: &str = "mdx";

/// Read every `.mdx` file directly inside `dir`.
///
/// Returns a map from file stem to file contents. A missing or unreadable
/// directory yields an empty map. Hidden files and files that cannot be read
/// as UTF-8 are skipped, the latter with a warning.
pub fn read_documentation_files(dir: impl AsRef<Path>) -> BTreeMap<String, String> {
    let dir = dir.as_ref();
    let mut documentation = BTreeMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("No documentation directory at {}: {}", dir.display(), e);
            return documentation;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(DOC_EXTENSION) {
            continue;
        }
        // Hidden files are skipped, matching shell glob semantics
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                documentation.insert(key.to_string(), content);
            }
            Err(e) => warn!("Error reading {}: {}", path.display(), e),
        }
    }

    debug!(
        "Loaded {} documentation files from {}",
        documentation.len(),
        dir.display()
    );
    documentation
}

/// Summarize the available documentation topics for the prompt.
///
/// Empty when no documentation was found.
pub fn documentation_summary(documentation: &BTreeMap<String, String>) -> String {
    if documentation.is_empty() {
        return String::new();
    }
    let topics = documentation.keys().map(String::as_str).collect::<Vec<_>>();
    format!("Available documentation topics: {}", topics.join(", "))
}
