//! Per-file analysis: metrics, scoring, and file-local detectors.

use crate::config::AnalysisConfig;
use crate::detect::{self, FileFindings};
use crate::facts::{FileFacts, FunctionFact};
use crate::result::{FileAnalysisResult, FileMetrics, FunctionInfo};
use crate::score;

/// Turn one file's facts into a complete per-file result.
pub fn analyze_file(
    facts: &FileFacts,
    source: &str,
    config: &AnalysisConfig,
) -> FileAnalysisResult {
    let functions: Vec<FunctionInfo> = facts
        .functions
        .iter()
        .map(|f| function_info(f, config))
        .collect();

    let findings = FileFindings {
        magic_values: detect::magic_values::detect(facts),
        naming: detect::naming::detect(facts, config),
        nesting: detect::nesting::detect(facts, config),
        error_handling: detect::error_handling::detect(facts),
        security: detect::security::detect(facts, source),
        data_structures: detect::structures::collect(facts),
    };

    let metrics = file_metrics(facts, &functions, findings.security.len());

    FileAnalysisResult {
        path: facts.path.clone(),
        language: facts.language,
        success: true,
        error: None,
        metrics: Some(metrics),
        functions,
        findings,
    }
}

fn function_info(f: &FunctionFact, config: &AnalysisConfig) -> FunctionInfo {
    let needs_refactor = f.line_count() > config.max_function_lines
        || f.param_count > config.max_parameters
        || f.complexity > config.max_complexity;
    FunctionInfo {
        name: f.name.clone(),
        start_line: f.start_line,
        line_count: f.line_count(),
        parameter_count: f.param_count,
        complexity: f.complexity,
        needs_refactor,
    }
}

fn file_metrics(
    facts: &FileFacts,
    functions: &[FunctionInfo],
    security_issue_count: usize,
) -> FileMetrics {
    let function_count = functions.len();

    let (average_complexity, average_function_length) = if function_count == 0 {
        (0.0, 0.0)
    } else {
        let total_cc: u32 = functions.iter().map(|f| f.complexity).sum();
        let total_len: usize = functions.iter().map(|f| f.line_count).sum();
        (
            total_cc as f64 / function_count as f64,
            total_len as f64 / function_count as f64,
        )
    };
    let max_complexity = functions.iter().map(|f| f.complexity).max().unwrap_or(0);

    let comment_density = if facts.total_lines == 0 {
        0.0
    } else {
        facts.comment_lines as f64 / facts.total_lines as f64
    };

    let maintainability =
        score::maintainability(average_complexity, comment_density, average_function_length);
    let flagged = functions.iter().filter(|f| f.needs_refactor).count();
    let refactor_priority = score::refactor_priority(maintainability, flagged, function_count);

    FileMetrics {
        total_lines: facts.total_lines,
        code_lines: facts.code_lines(),
        blank_lines: facts.blank_lines,
        comment_lines: facts.comment_lines,
        todo_count: facts.todo_count,
        security_issue_count,
        function_count,
        class_count: facts.class_count,
        average_complexity: score::round2(average_complexity),
        max_complexity,
        maintainability,
        refactor_priority,
    }
}
