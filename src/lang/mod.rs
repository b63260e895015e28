//! Language parser adapter layer.
//!
//! Maps a detected language to a tree-sitter grammar and a fact extractor.
//! Adding a language means adding a `Grammar` descriptor in `grammar.rs` and
//! a variant here; nothing else in the engine branches on extensions.

use std::path::Path;

pub mod adapter;
pub mod grammar;

pub use adapter::{ParsedFile, TreeSitterAdapter};

use crate::facts::FileFacts;

/// Languages the engine can parse.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    Java,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Go,
        Language::Rust,
        Language::Java,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Java => "java",
        }
    }

    /// Detect a language from a file extension (without the dot).
    /// Returns None for unsupported extensions; those files are skipped
    /// during discovery, not treated as failures.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "py" => Some(Language::Python),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" | "mts" => Some(Language::TypeScript),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "java" => Some(Language::Java),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability implemented once per language family.
///
/// Note: `tree_sitter::Parser` is not Sync, so implementations create
/// parsers per call rather than holding one.
pub trait LanguageAdapter: Send + Sync {
    /// The language this adapter handles.
    fn language(&self) -> Language;

    /// Parse source into a syntax tree. Fails when the tree contains
    /// syntax errors; the caller records this as a per-file failure.
    fn parse(&self, path: &Path, source: &str) -> anyhow::Result<ParsedFile>;

    /// Extract all structural facts from a parsed file in one walk.
    fn extract_facts(&self, parsed: &ParsedFile) -> anyhow::Result<FileFacts>;
}

/// Get an adapter for the given language.
pub fn adapter_for(language: Language) -> Box<dyn LanguageAdapter> {
    Box::new(TreeSitterAdapter::new(grammar::for_language(language)))
}

/// Verify that every registered grammar can be loaded into a parser.
///
/// Called once at engine construction; a failure here means the whole run
/// must be refused with an "unavailable" error rather than silently
/// degrading to partial-language operation.
pub fn verify_grammars() -> anyhow::Result<()> {
    for &language in Language::ALL {
        let grammar = grammar::for_language(language);
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&(grammar.ts_language)())
            .map_err(|e| anyhow::anyhow!("grammar for {} failed to load: {}", language, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("tsx"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("rb"), None);
        assert_eq!(Language::from_extension(""), None);
    }

    #[test]
    fn test_all_grammars_load() {
        verify_grammars().unwrap();
    }

    #[test]
    fn test_adapter_language() {
        let adapter = adapter_for(Language::Go);
        assert_eq!(adapter.language(), Language::Go);
    }
}
