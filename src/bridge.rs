use std::net::{SocketAddr, TcpStream};
use std::path::Path;
use std::time::Duration;

use crate::config::{self, Config};
use crate::core::{
    self, AnalysisResult, CodeAnalyzer, ContentStore, FileDescriptor, FsStore, GroqClient,
};

/// Address probed by [`Bridge::check_connection`] (Google public DNS).
const CONNECTIVITY_PROBE: (&str, u16) = ("8.8.8.8", 53);
const CONNECTIVITY_TIMEOUT: Duration = Duration::from_secs(3);

/// Dispatch surface exposed to the presentation layer. Owns the resolved
/// API key (read-only after construction) and the analysis pipeline; every
/// method returns plain values, never errors, so a frontend can call in
/// without a failure protocol of its own.
pub struct Bridge {
    api_key: String,
    store: FsStore,
    analyzer: CodeAnalyzer,
}

impl Bridge {
    /// Build a bridge with the key resolved from the standard key-file
    /// locations (see [`config::resolve_api_key`]).
    pub fn new(config: &Config) -> Self {
        Self::with_api_key(config, config::resolve_api_key())
    }

    /// Build a bridge with an explicit key. Tests and embedders use this to
    /// avoid touching filesystem key fixtures.
    pub fn with_api_key(config: &Config, api_key: String) -> Self {
        let model = GroqClient::new(&config.llm);
        Self {
            api_key,
            store: FsStore,
            analyzer: CodeAnalyzer::new(Box::new(model), Box::new(FsStore)),
        }
    }

    /// Recursively scan a folder for code files.
    pub fn scan_folder<P: AsRef<Path>>(&self, path: P) -> Vec<FileDescriptor> {
        core::scan_folder(path)
    }

    /// Describe a single user-selected file; `None` if it cannot be stat'd.
    pub fn describe_file<P: AsRef<Path>>(&self, path: P) -> Option<FileDescriptor> {
        core::describe(path)
    }

    /// Ingest a drag-and-drop payload: folders are scanned recursively,
    /// single files are gated by the classifier before being described.
    pub fn ingest_dropped<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<FileDescriptor> {
        let mut valid = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                valid.extend(core::scan_folder(path));
            } else if path.is_file() {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                if core::is_valid_file(&name) {
                    if let Some(desc) = core::describe(path) {
                        valid.push(desc);
                    }
                }
            }
        }

        valid
    }

    /// Run one analysis of `file_path` as the declared `language`. The API
    /// key is supplied internally from process-wide configuration.
    pub async fn analyze<P: AsRef<Path>>(&self, file_path: P, language: &str) -> AnalysisResult {
        self.analyzer
            .analyze(&self.api_key, file_path.as_ref(), language)
            .await
    }

    /// Pass-through write of a rendered report; false on any I/O failure.
    pub fn save_report<P: AsRef<Path>>(&self, path: P, content: &str) -> bool {
        self.store.save(path.as_ref(), content)
    }

    /// Validates the key format by prefix convention, without a live probe.
    pub fn check_api_key(&self) -> bool {
        config::is_plausible_key(&self.api_key)
    }

    /// Best-effort internet check: a short TCP connect to a well-known
    /// public resolver.
    pub fn check_connection(&self) -> bool {
        let addr: SocketAddr = match format!("{}:{}", CONNECTIVITY_PROBE.0, CONNECTIVITY_PROBE.1)
            .parse()
        {
            Ok(a) => a,
            Err(_) => return false,
        };
        TcpStream::connect_timeout(&addr, CONNECTIVITY_TIMEOUT).is_ok()
    }
}
