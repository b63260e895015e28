//! Detection passes.
//!
//! File-local detectors (`security`, `magic_values`, `naming`, `nesting`,
//! `error_handling`, `structures`) read one file's facts. Directory-level
//! passes (`dead_code`, `duplicates`, `call_graph`) need cross-file
//! visibility and run after every file has been analyzed; each builds its
//! own pass-private index and holds no engine-lifetime state.

pub mod call_graph;
pub mod dead_code;
pub mod duplicates;
pub mod error_handling;
pub mod magic_values;
pub mod naming;
pub mod nesting;
pub mod security;
pub mod structures;
mod types;

pub use types::{
    CallGraph, CallGraphEdge, Confidence, DataStructureUse, DeadCodeItem, DuplicateGroup,
    DuplicateLocation, ErrorHandlingIssue, FileFindings, MagicValue, NamingIssue, NestingIssue,
    SecurityIssue, SecurityKind, Severity,
};
