use serde::{Deserialize, Serialize};
use std::path::Path;

/// Metadata record for one discovered code file. Built once per scan or
/// selection, handed to the presentation layer, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// File name without directory components
    pub name: String,

    /// Absolute path as given by the caller/scanner
    pub path: String,

    /// Size in bytes
    pub size: u64,

    /// Human-readable language label inferred from the extension; advisory
    /// only, never gates analysis
    pub language: String,
}

/// Build the descriptor for `path`, or `None` if the entry cannot be stat'd
/// (broken symlink, permission error, deleted underneath us). Callers treat
/// `None` as "skip and move on".
pub fn describe<P: AsRef<Path>>(path: P) -> Option<FileDescriptor> {
    let path = path.as_ref();

    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("could not stat {}: {}", path.display(), e);
            return None;
        }
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Some(FileDescriptor {
        language: detect_language(&name),
        name,
        path: path.to_string_lossy().to_string(),
        size: metadata.len(),
    })
}

/// Static extension-to-label lookup. Unmapped extensions are "Unknown",
/// never an error.
pub fn detect_language(filename: &str) -> String {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    let label = match ext.as_str() {
        "py" => "Python",
        "js" => "JavaScript",
        "jsx" => "React",
        "ts" => "TypeScript",
        "tsx" => "TypeScript React",
        "java" => "Java",
        "cpp" => "C++",
        "c" => "C",
        "go" => "Go",
        "rs" => "Rust",
        "php" => "PHP",
        "rb" => "Ruby",
        "swift" => "Swift",
        "kt" => "Kotlin",
        _ => "Unknown",
    };

    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language_known_and_unknown() {
        assert_eq!(detect_language("main.py"), "Python");
        assert_eq!(detect_language("App.TSX"), "TypeScript React");
        assert_eq!(detect_language("notes.txt"), "Unknown");
        assert_eq!(detect_language("Makefile"), "Unknown");
    }

    #[test]
    fn test_describe_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.rs");
        std::fs::write(&path, "fn main() {}").unwrap();

        let desc = describe(&path).unwrap();
        assert_eq!(desc.name, "hello.rs");
        assert_eq!(desc.size, 12);
        assert_eq!(desc.language, "Rust");
        assert_eq!(desc.path, path.to_string_lossy());
    }

    #[test]
    fn test_describe_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe(dir.path().join("nope.py")).is_none());
    }
}
