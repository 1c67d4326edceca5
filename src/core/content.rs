use std::path::Path;

/// Read/write seam for file content. The orchestrator only talks to this
/// trait, so tests can substitute an in-memory store and count writes.
///
/// Both operations are deliberately infallible at the type level: the
/// pipeline never aborts on I/O trouble, it degrades (sentinel content on
/// read, `false` on write).
pub trait ContentStore: Send + Sync {
    /// Read a file as text. Invalid byte sequences are replaced rather than
    /// rejected, and an unreadable file yields a sentinel error string as
    /// content — what the model receives and what the user sees are the
    /// same channel.
    fn load(&self, path: &Path) -> String;

    /// Overwrite `path` with `content` as strict UTF-8. Returns false on
    /// any I/O failure, never panics or propagates.
    fn save(&self, path: &Path, content: &str) -> bool;
}

/// Filesystem-backed store used outside of tests.
pub struct FsStore;

impl ContentStore for FsStore {
    fn load(&self, path: &Path) -> String {
        match std::fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                format!("Error reading file: {}", e)
            }
        }
    }

    fn save(&self, path: &Path, content: &str) -> bool {
        match std::fs::write(path, content) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("failed to save {}: {}", path.display(), e);
                false
            }
        }
    }
}
