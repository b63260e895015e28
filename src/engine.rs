//! The analysis engine.
//!
//! `Engine::new` verifies that every grammar loads before any file is
//! touched; a broken installation refuses the whole run up front instead
//! of producing a misleading half-empty result. Per-file analysis runs in
//! parallel, and per-file failures are recorded in the result rather than
//! aborting the run.

use std::path::Path;

use rayon::prelude::*;

use crate::analyze;
use crate::config::AnalysisConfig;
use crate::detect::{call_graph, dead_code, duplicates};
use crate::discovery::{self, CandidateFile};
use crate::error::EngineError;
use crate::facts::{FileFacts, SourceFile};
use crate::lang;
use crate::result::{DirectoryResult, FileAnalysisResult, Summary};
use crate::score;

pub struct Engine {
    config: AnalysisConfig,
}

/// One file's outcome plus the inputs the directory-level passes need.
struct PerFile {
    result: FileAnalysisResult,
    facts: Option<FileFacts>,
    source: Option<SourceFile>,
}

impl Engine {
    /// Build an engine, verifying all grammars load.
    pub fn new(config: AnalysisConfig) -> Result<Self, EngineError> {
        lang::verify_grammars().map_err(|e| EngineError::Unavailable(e.to_string()))?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Result<Self, EngineError> {
        Self::new(AnalysisConfig::default())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze every supported file under `root`.
    pub fn analyze(&self, root: &Path) -> Result<DirectoryResult, EngineError> {
        if !root.exists() {
            return Err(EngineError::InvalidRoot {
                path: root.display().to_string(),
                reason: "path does not exist".to_string(),
            });
        }
        if !root.is_dir() {
            return Err(EngineError::InvalidRoot {
                path: root.display().to_string(),
                reason: "path is not a directory".to_string(),
            });
        }

        let candidates = discovery::discover(root, &self.config)?;

        let mut per_file: Vec<PerFile> = candidates
            .par_iter()
            .map(|candidate| self.analyze_candidate(root, candidate))
            .collect();
        per_file.sort_by(|a, b| a.result.path.cmp(&b.result.path));

        let all_facts: Vec<FileFacts> = per_file.iter().filter_map(|p| p.facts.clone()).collect();
        let sources: Vec<SourceFile> = per_file.iter().filter_map(|p| p.source.clone()).collect();

        let dead_code = dead_code::detect(&all_facts);
        let duplicates = duplicates::detect(&sources, &self.config);
        let call_graph = call_graph::build(&all_facts);

        let files: Vec<FileAnalysisResult> = per_file.into_iter().map(|p| p.result).collect();
        let summary = build_summary(&files, &dead_code, &duplicates, &call_graph);

        Ok(DirectoryResult {
            root_path: root.display().to_string(),
            summary,
            files,
            dead_code,
            duplicates,
            call_graph,
        })
    }

    fn analyze_candidate(&self, root: &Path, candidate: &CandidateFile) -> PerFile {
        let rel = candidate
            .path
            .strip_prefix(root)
            .unwrap_or(&candidate.path)
            .to_string_lossy()
            .to_string();

        let source = match std::fs::read_to_string(&candidate.path) {
            Ok(s) => s,
            Err(e) => {
                return PerFile {
                    result: FileAnalysisResult::failed(
                        &rel,
                        candidate.language,
                        format!("read failed: {}", e),
                    ),
                    facts: None,
                    source: None,
                }
            }
        };

        let adapter = lang::adapter_for(candidate.language);
        let facts = adapter
            .parse(&candidate.path, &source)
            .and_then(|parsed| adapter.extract_facts(&parsed));
        let mut facts = match facts {
            Ok(f) => f,
            Err(e) => {
                return PerFile {
                    result: FileAnalysisResult::failed(&rel, candidate.language, e.to_string()),
                    facts: None,
                    source: None,
                }
            }
        };
        facts.path = rel.clone();

        let result = analyze::analyze_file(&facts, &source, &self.config);
        PerFile {
            result,
            facts: Some(facts),
            source: Some(SourceFile {
                path: rel,
                language: candidate.language,
                source,
            }),
        }
    }
}

fn build_summary(
    files: &[FileAnalysisResult],
    dead_code: &[crate::detect::DeadCodeItem],
    duplicates: &[crate::detect::DuplicateGroup],
    graph: &crate::detect::CallGraph,
) -> Summary {
    let successful: Vec<&FileAnalysisResult> = files.iter().filter(|f| f.success).collect();

    let mut languages = std::collections::BTreeMap::new();
    let mut data_structures = std::collections::BTreeMap::new();
    for file in files {
        *languages.entry(file.language.to_string()).or_insert(0) += 1;
        for usage in &file.findings.data_structures {
            *data_structures.entry(usage.kind.clone()).or_insert(0) += 1;
        }
    }

    let (mut total_lines, mut total_functions, mut total_classes) = (0, 0, 0);
    let mut maintainability_sum = 0.0;
    for file in &successful {
        if let Some(m) = &file.metrics {
            total_lines += m.total_lines;
            total_functions += m.function_count;
            total_classes += m.class_count;
            maintainability_sum += m.maintainability;
        }
    }
    let average_maintainability = if successful.is_empty() {
        0.0
    } else {
        score::round1(maintainability_sum / successful.len() as f64)
    };

    Summary {
        total_files: files.len(),
        successful_files: successful.len(),
        failed_files: files.len() - successful.len(),
        total_lines,
        total_functions,
        total_classes,
        languages,
        average_maintainability,
        dead_code_count: dead_code.len(),
        duplicate_group_count: duplicates.len(),
        call_edge_count: call_graph::edge_count(graph),
        security_issue_count: files.iter().map(|f| f.findings.security.len()).sum(),
        magic_value_count: files.iter().map(|f| f.findings.magic_values.len()).sum(),
        error_handling_issue_count: files.iter().map(|f| f.findings.error_handling.len()).sum(),
        naming_issue_count: files.iter().map(|f| f.findings.naming.len()).sum(),
        nesting_issue_count: files.iter().map(|f| f.findings.nesting.len()).sum(),
        data_structures,
    }
}
