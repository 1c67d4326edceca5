use std::path::Path;
use walkdir::WalkDir;

use super::classifier;
use super::descriptor::{self, FileDescriptor};

/// Recursively scan `root` for code files, pruning ignored directories
/// before descending into them.
///
/// Scanning is best-effort: unreadable entries are skipped, and an
/// unreadable or empty root yields an empty list rather than an error.
/// Every accepted file appears exactly once.
pub fn scan_folder<P: AsRef<Path>>(root: P) -> Vec<FileDescriptor> {
    let root = root.as_ref();
    let mut found = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        // Prune ignored directories at the directory level so their
        // subtrees are never visited at all. The root itself is exempt so
        // a user can point the scanner directly at e.g. a folder named
        // "build".
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        !classifier::is_ignored_dir(&entry.file_name().to_string_lossy())
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !classifier::is_valid_file(&entry.file_name().to_string_lossy()) {
            continue;
        }
        if let Some(desc) = descriptor::describe(entry.path()) {
            found.push(desc);
        }
    }

    tracing::info!("scan of {} found {} code files", root.display(), found.len());
    found
}
