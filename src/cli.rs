use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::bridge::Bridge;
use crate::core::{detect_language, AnalysisResult};

#[derive(Parser)]
#[command(name = "wolfcheck")]
#[command(about = "LLM-backed code review with automatic fixes")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recursively list analyzable code files under a folder
    Scan {
        /// Folder to scan
        path: PathBuf,
    },

    /// Analyze one file and auto-apply the suggested fix
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Language to declare in the prompt (inferred from the extension
        /// when omitted)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Check API key format and network reachability
    Check,
}

impl Cli {
    pub async fn execute(self, bridge: Bridge) -> Result<()> {
        match self.command {
            Commands::Scan { path } => {
                let files = bridge.scan_folder(&path);
                println!("{}", serde_json::to_string_pretty(&files)?);
                Ok(())
            }
            Commands::Analyze { file, language } => {
                let language = language.unwrap_or_else(|| {
                    let name = file
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    detect_language(&name)
                });

                let result = bridge.analyze(&file, &language).await;
                if let AnalysisResult::Completed { fixed_code, .. } = &result {
                    if !fixed_code.is_empty() {
                        eprintln!("note: differing fixes are written back to {}", file.display());
                    }
                }
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(())
            }
            Commands::Check => {
                println!(
                    "api key:    {}",
                    if bridge.check_api_key() { "ok" } else { "missing or malformed" }
                );
                println!(
                    "connection: {}",
                    if bridge.check_connection() { "ok" } else { "offline" }
                );
                Ok(())
            }
        }
    }
}
