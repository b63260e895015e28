//! Run-level error types for the analysis engine.
//!
//! Per-file failures are not errors at this level: they are recorded on the
//! individual `FileAnalysisResult` and never abort a run. The variants here
//! cover the cases where no useful `DirectoryResult` can be produced at all.

use thiserror::Error;

/// Errors that abort an analysis run before or instead of producing a result.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be constructed because one or more language
    /// grammars failed to load. This is a configuration problem, not a
    /// transient one; callers should not retry.
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),

    /// The analysis root does not exist or is not a directory.
    #[error("invalid analysis root {path:?}: {reason}")]
    InvalidRoot { path: String, reason: String },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An I/O error outside the per-file scope (e.g. walking the root).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_distinct_from_invalid_root() {
        let unavailable = EngineError::Unavailable("missing grammar".to_string());
        assert!(unavailable.to_string().contains("analyzer unavailable"));

        let bad_root = EngineError::InvalidRoot {
            path: "/no/such/dir".to_string(),
            reason: "not found".to_string(),
        };
        assert!(bad_root.to_string().contains("invalid analysis root"));
    }
}
