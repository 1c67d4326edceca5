mod analyzer;
mod classifier;
mod content;
mod descriptor;
mod scanner;

// LLM provider layer
mod llm;

pub use analyzer::{
    build_prompt, prepare_content, AnalysisResult, CodeAnalyzer, Finding, Severity,
    MAX_PROMPT_CHARS, TRUNCATION_MARKER,
};
pub use classifier::{is_ignored_dir, is_valid_file, IGNORED_DIRS, VALID_EXTENSIONS};
pub use content::{ContentStore, FsStore};
pub use descriptor::{describe, detect_language, FileDescriptor};
pub use llm::{ChatModel, GroqClient};
pub use scanner::scan_folder;
