use serde::{Deserialize, Serialize};
use std::path::Path;

use super::content::ContentStore;
use super::llm::ChatModel;

/// Character budget for file content forwarded to the model. Bounds prompt
/// size, cost and latency deterministically regardless of file size.
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Marker appended after the cut when content exceeds the budget. Appended
/// after the cut point, never blended into the code.
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

const SYSTEM_PROMPT: &str =
    "You are an expert code analyzer. Always respond with valid JSON only.";

const DEFAULT_SUMMARY: &str = "Analysis complete";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    High,
    #[default]
    Medium,
    Low,
}

impl From<String> for Severity {
    /// The model is untrusted input; anything outside the documented set
    /// degrades to medium rather than failing the whole reply.
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

/// One issue reported by the model. Every field is defaulted so a sparse
/// reply still deserializes; order is insertion order as produced by the
/// model, with no reordering or deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    #[serde(default)]
    pub line: u32,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub severity: Severity,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub fix: String,
}

/// Outcome of one analysis invocation. Serializes to the wire shape the
/// presentation layer expects: `success` plus either the findings payload
/// or a human-readable `error` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Completed {
        success: bool,
        errors: Vec<Finding>,
        #[serde(rename = "fixedCode")]
        fixed_code: String,
        summary: String,
        truncated: bool,
    },
    Failed {
        success: bool,
        error: String,
    },
}

impl AnalysisResult {
    pub fn completed(
        errors: Vec<Finding>,
        fixed_code: String,
        summary: String,
        truncated: bool,
    ) -> Self {
        Self::Completed {
            success: true,
            errors,
            fixed_code,
            summary,
            truncated,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failed {
            success: false,
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Shape of the JSON object the model is instructed to return. Missing keys
/// degrade gracefully: absent `errors` means none found, absent `fixedCode`
/// falls back to the content that was sent (making auto-save a no-op), and
/// absent `summary` gets a generic placeholder.
#[derive(Debug, Deserialize)]
struct ModelReply {
    #[serde(default)]
    errors: Vec<Finding>,

    #[serde(rename = "fixedCode")]
    fixed_code: Option<String>,

    summary: Option<String>,
}

/// The analysis pipeline: load, truncate, prompt, call, interpret, auto-save.
///
/// One invocation is exactly one attempt against the provider — no retry on
/// transient failures; the caller may re-invoke.
pub struct CodeAnalyzer {
    model: Box<dyn ChatModel>,
    store: Box<dyn ContentStore>,
}

impl CodeAnalyzer {
    pub fn new(model: Box<dyn ChatModel>, store: Box<dyn ContentStore>) -> Self {
        Self { model, store }
    }

    /// Analyze one file with the declared language (the caller's declaration
    /// is authoritative for the prompt, whatever the extension says).
    pub async fn analyze(&self, api_key: &str, file_path: &Path, language: &str) -> AnalysisResult {
        if api_key.is_empty() {
            return AnalysisResult::failure("API Key is missing.");
        }

        let code = self.store.load(file_path);
        let (sent, truncated) = prepare_content(&code);

        let filename = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let prompt = build_prompt(language, &filename, &sent);

        let reply = match self.model.complete(api_key, SYSTEM_PROMPT, &prompt).await {
            Ok(text) => text,
            Err(e) => return AnalysisResult::failure(e.to_string()),
        };

        let parsed: ModelReply = match serde_json::from_str(&reply) {
            Ok(p) => p,
            Err(e) => {
                return AnalysisResult::failure(format!(
                    "{} Error: invalid JSON response: {}",
                    self.model.provider_name(),
                    e
                ));
            }
        };

        let fixed_code = parsed.fixed_code.unwrap_or_else(|| sent.clone());
        let summary = parsed.summary.unwrap_or_else(|| DEFAULT_SUMMARY.to_string());

        // Auto-save the fix when the model actually changed something. A
        // failed write is logged and ignored; the analysis itself already
        // succeeded.
        if !fixed_code.is_empty() && fixed_code != sent {
            if self.store.save(file_path, &fixed_code) {
                tracing::info!("auto-saved fixed code to {}", file_path.display());
            } else {
                tracing::warn!("could not auto-save fix to {}", file_path.display());
            }
        }

        AnalysisResult::completed(parsed.errors, fixed_code, summary, truncated)
    }
}

/// Apply the truncation budget: content at or under `MAX_PROMPT_CHARS`
/// characters passes through unmodified; longer content is cut at exactly
/// the budget (character count, so multi-byte text never splits a
/// codepoint) with the marker appended.
pub fn prepare_content(code: &str) -> (String, bool) {
    match code.char_indices().nth(MAX_PROMPT_CHARS) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
            truncated.push_str(&code[..cut]);
            truncated.push_str(TRUNCATION_MARKER);
            (truncated, true)
        }
        None => (code.to_string(), false),
    }
}

/// Build the single user prompt: declared language, filename, fenced code,
/// the issue categories to search for, and the strict three-key JSON output
/// directive.
pub fn build_prompt(language: &str, filename: &str, code: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are an elite code analyzer. Analyze this {} code thoroughly.\n\n",
        language
    ));
    prompt.push_str(&format!("FILE: {}\n", filename));
    prompt.push_str(&format!("LANGUAGE: {}\n\n", language));

    prompt.push_str("CODE:\n");
    prompt.push_str(&format!("```{}\n", language.to_lowercase()));
    prompt.push_str(code);
    prompt.push_str("\n```\n\n");

    prompt.push_str("Find ALL issues:\n");
    prompt.push_str("- Syntax errors\n");
    prompt.push_str("- Logic bugs\n");
    prompt.push_str("- Security vulnerabilities\n");
    prompt.push_str("- Performance issues\n");
    prompt.push_str("- Bad practices\n");
    prompt.push_str("- Type errors\n");
    prompt.push_str("- Missing error handling\n\n");

    prompt.push_str("Respond ONLY with valid JSON in this exact format:\n");
    prompt.push_str("{\n");
    prompt.push_str("  \"errors\": [\n");
    prompt.push_str("    {\n");
    prompt.push_str("      \"line\": <number>,\n");
    prompt.push_str("      \"type\": \"Error Type\",\n");
    prompt.push_str("      \"severity\": \"high/medium/low\",\n");
    prompt.push_str("      \"description\": \"What is wrong\",\n");
    prompt.push_str("      \"fix\": \"How to fix it\"\n");
    prompt.push_str("    }\n");
    prompt.push_str("  ],\n");
    prompt.push_str("  \"fixedCode\": \"The complete corrected code string\",\n");
    prompt.push_str("  \"summary\": \"Brief summary of issues found\"\n");
    prompt.push_str("}\n\n");
    prompt.push_str("Be thorough. If no issues found, return empty errors array.");

    prompt
}
