//! Parser configuration, optionally loaded from a TOML file.
//!
//! The config file is optional. A missing or empty file yields
//! `ParserConfig::default()`. Unknown keys are ignored by serde, though we
//! log a warning when the file contains potential typos.
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::lenient::DurationOverflow;

// ============================================================================
// Configuration Structs
// ============================================================================

/// Options that tune how lenient the parser is and how much it reports.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Record individual diagnostics. Counts are always kept.
    pub collect_diagnostics: bool,

    /// Capture the text content of unknown elements in their diagnostic.
    pub capture_unknown_text: bool,

    /// What to do with durations that have more than three `:` groups.
    pub duration_overflow: DurationOverflow,

    /// Largest document accepted, in bytes. 0 = unlimited.
    pub max_document_bytes: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            collect_diagnostics: true,
            capture_unknown_text: true,
            duration_overflow: DurationOverflow::default(),
            max_document_bytes: Self::DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

impl ParserConfig {
    /// 10 MB; large back catalogs stay well below this.
    pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1_048_576;

    /// SEC-014: Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 4] = [
        "collect_diagnostics",
        "capture_unknown_text",
        "duration_overflow",
        "max_document_bytes",
    ];

    /// Returns `(size, limit)` when `size` exceeds the configured limit.
    pub(crate) fn check_size(&self, size: u64) -> Option<(u64, u64)> {
        (self.max_document_bytes > 0 && size > self.max_document_bytes)
            .then_some((size, self.max_document_bytes))
    }

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(ParserConfig::default())`
    /// - Empty file → `Ok(ParserConfig::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let Some(content) = read_capped(path)? else {
            return Ok(Self::default());
        };
        let config = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            collect_diagnostics = config.collect_diagnostics,
            max_document_bytes = config.max_document_bytes,
            "Loaded parser configuration"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text, warning about unknown keys.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in unknown_keys(&raw) {
                tracing::warn!(key = %key, "Unknown key in config file, ignoring");
            }
        }
        Ok(toml::from_str(content)?)
    }
}

/// Top-level keys that no `ParserConfig` field reads; usually typos.
fn unknown_keys(raw: &toml::Table) -> Vec<&str> {
    raw.keys()
        .map(String::as_str)
        .filter(|key| !ParserConfig::KNOWN_KEYS.contains(key))
        .collect()
}

/// Reads the config file, or `None` when it is missing or blank.
fn read_capped(path: &Path) -> Result<Option<String>, ConfigError> {
    // SEC-014: Check file size before reading to prevent memory exhaustion
    // from a maliciously large or corrupted config file.
    let read = std::fs::metadata(path).and_then(|meta| {
        if meta.len() > ParserConfig::MAX_FILE_SIZE {
            return Ok(Err(meta.len()));
        }
        std::fs::read_to_string(path).map(Ok)
    });
    match read {
        Ok(Ok(content)) if content.trim().is_empty() => {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            Ok(None)
        }
        Ok(Ok(content)) => Ok(Some(content)),
        Ok(Err(size)) => Err(ConfigError::TooLarge(format!(
            "Config file is {size} bytes (max {} bytes)",
            ParserConfig::MAX_FILE_SIZE
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file found, using defaults");
            Ok(None)
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

// ============================================================================
// Tests
// ============================================================================
