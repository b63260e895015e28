//! Analysis configuration.
//!
//! All limits and detector thresholds live here. A config can be built in
//! code with `AnalysisConfig::default()` or loaded from a YAML file; every
//! field has a serde default so partial files are fine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EngineError;

/// Directory names skipped during discovery by default.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "vendor",
    "target",
    "build",
    "dist",
    "out",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".idea",
    ".vscode",
];

/// Configuration for a single analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Hard cap on file size; larger files are excluded entirely.
    pub max_file_size_mb: u64,
    /// Hard cap on directory depth below the root.
    pub max_depth: usize,
    /// Directory names excluded from the walk.
    pub excluded_dirs: Vec<String>,

    /// A function longer than this is flagged for refactoring.
    pub max_function_lines: usize,
    /// A function with more parameters than this is flagged for refactoring.
    pub max_parameters: usize,
    /// A function with higher cyclomatic complexity than this is flagged.
    pub max_complexity: u32,
    /// Control-structure nesting deeper than this produces a nesting issue.
    pub max_nesting_depth: usize,

    /// Minimum contiguous normalized lines for a duplicate group.
    pub min_duplicate_lines: usize,
    /// Sliding window size for duplicate fingerprinting.
    pub duplicate_window: usize,

    /// Identifiers shorter than this are naming violations (allowlist aside).
    pub min_identifier_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 2,
            max_depth: 20,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            max_function_lines: 50,
            max_parameters: 5,
            max_complexity: 10,
            max_nesting_depth: 3,
            min_duplicate_lines: 5,
            duplicate_window: 5,
            min_identifier_length: 3,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| EngineError::Config(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::parse(&content)
    }

    /// Parse a configuration from YAML text.
    pub fn parse(content: &str) -> Result<Self, EngineError> {
        let config: AnalysisConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Maximum file size in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Check whether a directory name is excluded from discovery.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.max_file_size_mb == 0 {
            return Err(EngineError::Config(
                "max_file_size_mb must be at least 1".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(EngineError::Config("max_depth must be at least 1".to_string()));
        }
        if self.duplicate_window == 0 || self.min_duplicate_lines == 0 {
            return Err(EngineError::Config(
                "duplicate_window and min_duplicate_lines must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_function_lines, 50);
        assert_eq!(config.max_parameters, 5);
        assert_eq!(config.max_complexity, 10);
        assert!(config.is_excluded_dir("node_modules"));
        assert!(!config.is_excluded_dir("src"));
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = AnalysisConfig::parse("max_file_size_mb: 5\nmax_depth: 3\n").unwrap();
        assert_eq!(config.max_file_size_mb, 5);
        assert_eq!(config.max_depth, 3);
        // Untouched fields keep their defaults
        assert_eq!(config.min_duplicate_lines, 5);
    }

    #[test]
    fn test_parse_rejects_zero_limits() {
        assert!(AnalysisConfig::parse("max_file_size_mb: 0\n").is_err());
        assert!(AnalysisConfig::parse("max_depth: 0\n").is_err());
    }

    #[test]
    fn test_max_file_size_bytes() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_file_size_bytes(), 2 * 1024 * 1024);
    }
}
