//! Extension-based file classification.
//!
//! Decides whether a filesystem entry is code worth analyzing. No content
//! inspection happens here: the allow-list of extensions is a closed set,
//! and directory pruning is by name only.

/// Extensions accepted for analysis (matched case-insensitively against the
/// final `.ext` segment).
pub const VALID_EXTENSIONS: &[&str] = &[
    "py", "js", "jsx", "ts", "tsx", "java", "cpp", "c", "go", "rs", "php", "rb", "swift", "kt",
];

/// Directory names never descended into during a scan. Pruning happens at the
/// directory level so a huge dependency tree is not walked at all.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".git",
    "venv",
    "env",
    "dist",
    "build",
];

/// True if the filename's extension is in the allow-list.
pub fn is_valid_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            VALID_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

/// True if a directory with this name must be pruned from traversal.
pub fn is_ignored_dir(dirname: &str) -> bool {
    IGNORED_DIRS.contains(&dirname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_extensions() {
        assert!(is_valid_file("main.py"));
        assert!(is_valid_file("app.jsx"));
        assert!(is_valid_file("server.go"));
        assert!(is_valid_file("lib.rs"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert!(is_valid_file("Main.PY"));
        assert!(is_valid_file("Widget.Tsx"));
        assert!(!is_valid_file("readme.TXT"));
    }

    #[test]
    fn test_rejects_non_code_files() {
        assert!(!is_valid_file("readme.md"));
        assert!(!is_valid_file("archive.tar.gz"));
        assert!(!is_valid_file("Makefile"));
        assert!(!is_valid_file(""));
    }

    #[test]
    fn test_only_final_extension_segment_counts() {
        assert!(is_valid_file("component.test.js"));
        assert!(!is_valid_file("script.py.bak"));
    }

    #[test]
    fn test_dotfiles_are_not_extensions() {
        // ".py" has no stem, so it is a hidden file, not a Python file
        assert!(!is_valid_file(".py"));
        assert!(!is_valid_file(".gitignore"));
    }

    #[test]
    fn test_ignored_dirs() {
        assert!(is_ignored_dir("node_modules"));
        assert!(is_ignored_dir(".git"));
        assert!(!is_ignored_dir("src"));
        // Ignore-list is exact-name, not case-folded
        assert!(!is_ignored_dir("Node_Modules"));
    }
}
