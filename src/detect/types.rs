//! Shared finding types produced by the detectors.
//!
//! Every heuristic finding carries an explicit confidence or severity tag
//! rather than a boolean: consumers are expected to branch on these, not
//! treat all findings as equally actionable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::facts::SymbolKind;

/// Severity levels for findings that can be wrong in degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Confidence levels for findings that can be wrong in kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// A declared symbol with no detected reference anywhere in the scanned set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadCodeItem {
    pub file: String,
    pub line: usize,
    pub kind: SymbolKind,
    pub name: String,
    pub confidence: Confidence,
    pub reason: String,
}

/// One location of a duplicated block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateLocation {
    pub file: String,
    pub start_line: usize,
    pub end_line: usize,
}

/// Two or more locations whose normalized code matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub line_count: usize,
    pub locations: Vec<DuplicateLocation>,
    pub cross_file: bool,
    pub sample_snippet: String,
}

/// A lexical caller-to-callee edge. Callees are unresolved names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallGraphEdge {
    pub caller: String,
    pub callee: String,
    pub file: String,
    pub line: usize,
}

/// Caller name to outgoing edges, ordered for deterministic output.
pub type CallGraph = BTreeMap<String, Vec<CallGraphEdge>>;

/// A literal that should probably be a named constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagicValue {
    pub file: String,
    pub line: usize,
    pub value: String,
    pub suggested_name: String,
    pub context: String,
}

/// An identifier that breaks the file's dominant naming convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingIssue {
    pub file: String,
    pub line: usize,
    pub name: String,
    pub kind: SymbolKind,
    pub expected: String,
    pub message: String,
}

/// A function nested deeper than the configured limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestingIssue {
    pub file: String,
    pub line: usize,
    pub function: String,
    pub depth: usize,
    /// Construct kinds on the path to the deepest point.
    pub path: Vec<String>,
}

/// A defective exception handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingIssue {
    pub file: String,
    pub line: usize,
    pub severity: Severity,
    pub message: String,
}

/// Kind of security issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityKind {
    HardcodedCredential,
    DynamicEvaluation,
}

/// A security-relevant pattern match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityIssue {
    pub file: String,
    pub line: usize,
    pub severity: Severity,
    pub kind: SecurityKind,
    pub snippet: String,
}

/// A collection-literal usage site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataStructureUse {
    pub file: String,
    pub line: usize,
    pub kind: String,
}

/// All file-local findings for one file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFindings {
    pub magic_values: Vec<MagicValue>,
    pub naming: Vec<NamingIssue>,
    pub nesting: Vec<NestingIssue>,
    pub error_handling: Vec<ErrorHandlingIssue>,
    pub security: Vec<SecurityIssue>,
    pub data_structures: Vec<DataStructureUse>,
}
