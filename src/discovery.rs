//! File discovery and filtering.
//!
//! Walks the analysis root up to the configured depth, skipping excluded
//! and hidden directories, and pairs every candidate file with a detected
//! language. Size and depth caps are hard: files over the limit are
//! excluded entirely and never surface as failures. No file content is
//! read here.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::AnalysisConfig;
use crate::lang::Language;

/// A discovered candidate file.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub language: Language,
}

/// Enumerate candidate files under `root`, ordered by path.
pub fn discover(root: &Path, config: &AnalysisConfig) -> std::io::Result<Vec<CandidateFile>> {
    let mut candidates = Vec::new();

    let walker = WalkDir::new(root)
        .max_depth(config.max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            // The root itself may be hidden (e.g. a tmpdir); never skip it.
            if entry.depth() == 0 {
                return true;
            }
            !name.starts_with('.') && !config.is_excluded_dir(&name)
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            // Unreadable subtrees are skipped, not failures.
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        let Some(language) = Language::from_extension(ext) else {
            continue;
        };

        match entry.metadata() {
            Ok(meta) if meta.len() <= config.max_file_size_bytes() => {
                candidates.push(CandidateFile {
                    path: entry.path().to_path_buf(),
                    language,
                });
            }
            // Oversized or stat-failed files are excluded silently.
            _ => continue,
        }
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discovers_supported_files_sorted() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.py", "x = 1\n");
        write(temp.path(), "a.go", "package main\n");
        write(temp.path(), "notes.txt", "not code\n");

        let found = discover(temp.path(), &AnalysisConfig::default()).unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|c| c.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.go", "b.py"]);
        assert_eq!(found[0].language, Language::Go);
        assert_eq!(found[1].language, Language::Python);
    }

    #[test]
    fn test_skips_excluded_and_hidden_dirs() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main.py", "x = 1\n");
        write(temp.path(), "node_modules/dep/index.js", "var x = 1;\n");
        write(temp.path(), ".git/hooks/pre.py", "x = 1\n");

        let found = discover(temp.path(), &AnalysisConfig::default()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].path.ends_with("src/main.py"));
    }

    #[test]
    fn test_depth_cap_is_hard() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "top.py", "x = 1\n");
        write(temp.path(), "a/b/c/deep.py", "x = 1\n");

        let config = AnalysisConfig {
            max_depth: 2,
            ..AnalysisConfig::default()
        };
        let found = discover(temp.path(), &config).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].path.ends_with("top.py"));
    }

    #[test]
    fn test_size_cap_excludes_silently() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "small.py", "x = 1\n");
        let big = "# padding\n".repeat(200_000);
        write(temp.path(), "big.py", &big);

        let config = AnalysisConfig {
            max_file_size_mb: 1,
            ..AnalysisConfig::default()
        };
        let found = discover(temp.path(), &config).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].path.ends_with("small.py"));
    }
}
