//! Analysis results.
//!
//! `DirectoryResult` is the immutable outcome of one run: per-file results
//! in path order, directory-level findings, and a summary. All query
//! methods borrow from it; nothing mutates after construction, so two runs
//! over an unchanged tree serialize to identical bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::detect::{
    CallGraph, Confidence, DataStructureUse, DeadCodeItem, DuplicateGroup, ErrorHandlingIssue,
    FileFindings, MagicValue, NamingIssue, NestingIssue, SecurityIssue, Severity,
};
use crate::lang::Language;
use crate::score::RefactorPriority;

/// Size and quality metrics for one successfully analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetrics {
    pub total_lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub todo_count: usize,
    pub security_issue_count: usize,
    pub function_count: usize,
    pub class_count: usize,
    /// Mean cyclomatic complexity over functions; 0 when the file has none.
    pub average_complexity: f64,
    pub max_complexity: u32,
    /// Maintainability score, 0 (worst) to 100 (best).
    pub maintainability: f64,
    pub refactor_priority: RefactorPriority,
}

/// Per-function summary included in the file result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub start_line: usize,
    pub line_count: usize,
    pub parameter_count: usize,
    pub complexity: u32,
    /// True when the function exceeds a length, parameter, or complexity
    /// threshold.
    pub needs_refactor: bool,
}

/// The analysis outcome for one file. A failed file records its error and
/// carries no metrics; the run as a whole continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysisResult {
    pub path: String,
    pub language: Language,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<FileMetrics>,
    pub functions: Vec<FunctionInfo>,
    pub findings: FileFindings,
}

impl FileAnalysisResult {
    /// Build a failure record for a file that could not be analyzed.
    pub fn failed(path: &str, language: Language, error: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            language,
            success: false,
            error: Some(error.into()),
            metrics: None,
            functions: Vec::new(),
            findings: FileFindings::default(),
        }
    }
}

/// Aggregate counts over the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_files: usize,
    pub successful_files: usize,
    pub failed_files: usize,
    pub total_lines: usize,
    pub total_functions: usize,
    pub total_classes: usize,
    /// Files per language, ordered by language name.
    pub languages: BTreeMap<String, usize>,
    /// Mean maintainability over successful files, 0 when none succeeded.
    pub average_maintainability: f64,
    pub dead_code_count: usize,
    pub duplicate_group_count: usize,
    pub call_edge_count: usize,
    pub security_issue_count: usize,
    pub magic_value_count: usize,
    pub error_handling_issue_count: usize,
    pub naming_issue_count: usize,
    pub nesting_issue_count: usize,
    /// Collection-literal counts by kind, across all files.
    pub data_structures: BTreeMap<String, usize>,
}

/// The immutable result of analyzing one directory tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryResult {
    pub root_path: String,
    pub summary: Summary,
    /// Per-file results in path order.
    pub files: Vec<FileAnalysisResult>,
    pub dead_code: Vec<DeadCodeItem>,
    pub duplicates: Vec<DuplicateGroup>,
    pub call_graph: CallGraph,
}

impl DirectoryResult {
    /// Dead-code items, optionally filtered by confidence.
    pub fn dead_code(&self, confidence: Option<Confidence>) -> Vec<&DeadCodeItem> {
        self.dead_code
            .iter()
            .filter(|item| confidence.map_or(true, |c| item.confidence == c))
            .collect()
    }

    /// All duplicate groups, largest first.
    pub fn duplicate_groups(&self) -> &[DuplicateGroup] {
        &self.duplicates
    }

    /// The lexical call graph.
    pub fn call_graph(&self) -> &CallGraph {
        &self.call_graph
    }

    /// Magic-value findings across all files, in path order.
    pub fn magic_values(&self) -> Vec<&MagicValue> {
        self.files
            .iter()
            .flat_map(|f| f.findings.magic_values.iter())
            .collect()
    }

    /// Error-handling findings, optionally filtered by severity.
    pub fn error_handling(&self, severity: Option<Severity>) -> Vec<&ErrorHandlingIssue> {
        self.files
            .iter()
            .flat_map(|f| f.findings.error_handling.iter())
            .filter(|issue| severity.map_or(true, |s| issue.severity == s))
            .collect()
    }

    /// Naming findings across all files.
    pub fn naming_issues(&self) -> Vec<&NamingIssue> {
        self.files
            .iter()
            .flat_map(|f| f.findings.naming.iter())
            .collect()
    }

    /// Nesting findings across all files.
    pub fn nesting_issues(&self) -> Vec<&NestingIssue> {
        self.files
            .iter()
            .flat_map(|f| f.findings.nesting.iter())
            .collect()
    }

    /// Security findings across all files.
    pub fn security_issues(&self) -> Vec<&SecurityIssue> {
        self.files
            .iter()
            .flat_map(|f| f.findings.security.iter())
            .collect()
    }

    /// Collection-literal counts by kind, across all files.
    pub fn data_structure_summary(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for file in &self.files {
            for DataStructureUse { kind, .. } in &file.findings.data_structures {
                *counts.entry(kind.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// The `n` successful files with the lowest maintainability, worst
    /// first; ties break by path.
    pub fn refactor_candidates(&self, n: usize) -> Vec<&FileAnalysisResult> {
        let mut candidates: Vec<&FileAnalysisResult> =
            self.files.iter().filter(|f| f.success).collect();
        candidates.sort_by(|a, b| {
            let ma = a.metrics.as_ref().map(|m| m.maintainability).unwrap_or(0.0);
            let mb = b.metrics.as_ref().map(|m| m.maintainability).unwrap_or(0.0);
            ma.partial_cmp(&mb)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.path.cmp(&b.path))
        });
        candidates.truncate(n);
        candidates
    }

    /// Serialize the full result as pretty-printed JSON. Output is
    /// byte-identical across runs over an unchanged tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(path: &str, success: bool, maintainability: f64) -> FileAnalysisResult {
        FileAnalysisResult {
            path: path.to_string(),
            language: Language::Python,
            success,
            error: if success { None } else { Some("boom".to_string()) },
            metrics: success.then(|| FileMetrics {
                total_lines: 10,
                code_lines: 8,
                blank_lines: 1,
                comment_lines: 1,
                todo_count: 0,
                security_issue_count: 0,
                function_count: 1,
                class_count: 0,
                average_complexity: 1.0,
                max_complexity: 1,
                maintainability,
                refactor_priority: RefactorPriority::Low,
            }),
            functions: Vec::new(),
            findings: FileFindings::default(),
        }
    }

    fn directory_result(files: Vec<FileAnalysisResult>) -> DirectoryResult {
        let successful = files.iter().filter(|f| f.success).count();
        DirectoryResult {
            root_path: "/tmp/proj".to_string(),
            summary: Summary {
                total_files: files.len(),
                successful_files: successful,
                failed_files: files.len() - successful,
                total_lines: 0,
                total_functions: 0,
                total_classes: 0,
                languages: BTreeMap::new(),
                average_maintainability: 0.0,
                dead_code_count: 0,
                duplicate_group_count: 0,
                call_edge_count: 0,
                security_issue_count: 0,
                magic_value_count: 0,
                error_handling_issue_count: 0,
                naming_issue_count: 0,
                nesting_issue_count: 0,
                data_structures: BTreeMap::new(),
            },
            files,
            dead_code: Vec::new(),
            duplicates: Vec::new(),
            call_graph: CallGraph::new(),
        }
    }

    #[test]
    fn test_refactor_candidates_worst_first() {
        let result = directory_result(vec![
            result_with("a.py", true, 80.0),
            result_with("b.py", true, 40.0),
            result_with("c.py", true, 60.0),
        ]);
        let worst: Vec<&str> = result
            .refactor_candidates(2)
            .iter()
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(worst, vec!["b.py", "c.py"]);
    }

    #[test]
    fn test_refactor_candidates_skip_failures_and_cap() {
        let result = directory_result(vec![
            result_with("a.py", false, 0.0),
            result_with("b.py", true, 70.0),
        ]);
        let candidates = result.refactor_candidates(10);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].path, "b.py");
    }

    #[test]
    fn test_dead_code_confidence_filter() {
        use crate::facts::SymbolKind;
        let mut result = directory_result(vec![]);
        result.dead_code = vec![
            DeadCodeItem {
                file: "a.py".to_string(),
                line: 1,
                kind: SymbolKind::Function,
                name: "f".to_string(),
                confidence: Confidence::High,
                reason: String::new(),
            },
            DeadCodeItem {
                file: "a.py".to_string(),
                line: 2,
                kind: SymbolKind::Function,
                name: "g".to_string(),
                confidence: Confidence::Medium,
                reason: String::new(),
            },
        ];
        assert_eq!(result.dead_code(None).len(), 2);
        assert_eq!(result.dead_code(Some(Confidence::High)).len(), 1);
        assert_eq!(result.dead_code(Some(Confidence::Low)).len(), 0);
    }

    #[test]
    fn test_failed_result_serializes_without_metrics() {
        let failed = FileAnalysisResult::failed("a.py", Language::Python, "syntax error near line 3");
        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("syntax error"));
        assert!(!json.contains("\"metrics\""));
    }

    #[test]
    fn test_to_json_is_deterministic() {
        let result = directory_result(vec![result_with("a.py", true, 80.0)]);
        assert_eq!(result.to_json().unwrap(), result.to_json().unwrap());
    }
}
