//! Codescan - static analysis engine for multi-language codebases.
//!
//! Codescan walks a directory tree, parses every supported source file
//! with tree-sitter, and produces an immutable `DirectoryResult`: per-file
//! metrics and findings, plus cross-file passes that need whole-directory
//! visibility (dead code, duplicated blocks, a lexical call graph).
//!
//! # Architecture
//!
//! - `discovery`: directory walking and file filtering
//! - `lang`: language adapters over tree-sitter grammars
//! - `facts`: the structural facts one tree walk extracts per file
//! - `analyze`: per-file metrics and scoring
//! - `detect`: file-local detectors and directory-level passes
//! - `engine`: orchestration, parallel per-file analysis
//! - `result`: the immutable result and its query API
//! - `report`: output formatting (pretty, JSON)
//!
//! Per-file failures (unreadable or unparseable files) are recorded in
//! the result and never abort a run; a grammar that fails to load refuses
//! the whole run at `Engine::new` with `EngineError::Unavailable`.
//!
//! # Adding a New Language
//!
//! Add a `Grammar` descriptor in `lang/grammar.rs` and a variant in
//! `lang::Language`; nothing else branches on languages.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod detect;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod facts;
pub mod lang;
pub mod report;
pub mod result;
pub mod score;

pub use config::AnalysisConfig;
pub use detect::{CallGraph, Confidence, DeadCodeItem, DuplicateGroup, Severity};
pub use engine::Engine;
pub use error::EngineError;
pub use lang::Language;
pub use result::{DirectoryResult, FileAnalysisResult, Summary};
pub use score::RefactorPriority;
