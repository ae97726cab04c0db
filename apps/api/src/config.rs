use anyhow::{Context, Result};

use crate::analysis::extractor::ExtractionOptions;
use crate::analysis::linguistics::AnalyzerMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default; unparsable values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Linguistic backend for the whole process lifetime ("rule" or "basic").
    pub analyzer_mode: AnalyzerMode,
    pub top_keywords: usize,
    pub min_word_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            analyzer_mode: env_or("ANALYZER_MODE", "rule")
                .parse::<AnalyzerMode>()
                .map_err(anyhow::Error::msg)
                .context("ANALYZER_MODE must be 'rule' or 'basic'")?,
            top_keywords: env_or("TOP_KEYWORDS", "100")
                .parse::<usize>()
                .context("TOP_KEYWORDS must be a non-negative integer")?,
            min_word_length: env_or("MIN_WORD_LENGTH", "3")
                .parse::<usize>()
                .context("MIN_WORD_LENGTH must be a non-negative integer")?,
        })
    }

    /// Extraction knobs in the shape the keyword extractor consumes.
    pub fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            min_word_length: self.min_word_length,
            top_n: self.top_keywords,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
