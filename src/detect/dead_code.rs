//! Dead-code detection across the scanned set.
//!
//! This pass is necessarily directory-wide: a symbol unused in its own
//! file may be used by another file, so no correct answer exists from a
//! single-file view. The definition and usage tables live only for the
//! duration of the pass.

use std::collections::{BTreeMap, HashSet};

use crate::facts::{FileFacts, SymbolKind};

use super::{Confidence, DeadCodeItem};

/// Names that frameworks or runtimes invoke without a visible reference.
const ENTRY_POINT_NAMES: &[&str] = &["main", "init", "setup", "teardown", "setUp", "tearDown"];

/// Find declarations with zero references anywhere in the scanned set.
pub fn detect(files: &[FileFacts]) -> Vec<DeadCodeItem> {
    // Usage table: every identifier reference seen anywhere, regardless of
    // the file it came from.
    let mut usages: BTreeMap<&str, usize> = BTreeMap::new();
    for facts in files {
        for (name, count) in &facts.references {
            *usages.entry(name.as_str()).or_insert(0) += count;
        }
    }

    let mut items = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for facts in files {
        for decl in &facts.declarations {
            // Classes are tracked for usage but reported through other
            // detectors; the dead-code report covers callables, imports,
            // and variables.
            if decl.kind == SymbolKind::Class {
                continue;
            }
            if is_entry_point(&decl.name) {
                continue;
            }
            if usages.get(decl.name.as_str()).copied().unwrap_or(0) > 0 {
                continue;
            }
            // Deduplicate multiple declaration forms of the same name in
            // one file (e.g. a const holding an arrow function).
            if !seen.insert((facts.path.clone(), decl.name.clone())) {
                continue;
            }

            let (confidence, visibility) = if decl.kind == SymbolKind::Import || !decl.exported {
                (Confidence::High, "file-private")
            } else {
                (Confidence::Medium, "exported")
            };

            items.push(DeadCodeItem {
                file: facts.path.clone(),
                line: decl.line,
                kind: decl.kind,
                name: decl.name.clone(),
                confidence,
                reason: format!(
                    "{} {} '{}' has no references in the scanned set",
                    visibility, decl.kind, decl.name
                ),
            });
        }
    }

    items.sort_by(|a, b| (&a.file, a.line, &a.name).cmp(&(&b.file, b.line, &b.name)));
    items
}

fn is_entry_point(name: &str) -> bool {
    ENTRY_POINT_NAMES.contains(&name)
        || (name.starts_with("__") && name.ends_with("__"))
        || name.starts_with("test_")
        || name.starts_with("Test")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::DeclarationFact;
    use crate::lang::Language;

    fn file_with(
        path: &str,
        decls: Vec<(&str, SymbolKind, bool)>,
        refs: Vec<&str>,
    ) -> FileFacts {
        let mut facts = FileFacts::new(path, Language::Python);
        for (name, kind, exported) in decls {
            facts.declarations.push(DeclarationFact {
                name: name.to_string(),
                kind,
                line: 1,
                exported,
            });
        }
        for r in refs {
            facts.add_reference(r);
        }
        facts
    }

    #[test]
    fn test_private_unreferenced_function_is_high_confidence() {
        let files = vec![file_with(
            "a.py",
            vec![("_orphan", SymbolKind::Function, false)],
            vec![],
        )];
        let items = detect(&files);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].confidence, Confidence::High);
        assert_eq!(items[0].kind, SymbolKind::Function);
    }

    #[test]
    fn test_exported_unreferenced_is_medium_confidence() {
        let files = vec![file_with(
            "a.py",
            vec![("public_api", SymbolKind::Function, true)],
            vec![],
        )];
        let items = detect(&files);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].confidence, Confidence::Medium);
    }

    #[test]
    fn test_cross_file_reference_keeps_symbol_alive() {
        let files = vec![
            file_with("a.py", vec![("helper", SymbolKind::Function, true)], vec![]),
            file_with("b.py", vec![], vec!["helper"]),
        ];
        assert!(detect(&files).is_empty());
    }

    #[test]
    fn test_unused_import_is_high_confidence() {
        let files = vec![file_with(
            "a.py",
            vec![("os", SymbolKind::Import, false)],
            vec![],
        )];
        let items = detect(&files);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, SymbolKind::Import);
        assert_eq!(items[0].confidence, Confidence::High);
    }

    #[test]
    fn test_entry_points_and_dunders_skipped() {
        let files = vec![file_with(
            "a.py",
            vec![
                ("main", SymbolKind::Function, false),
                ("__version__", SymbolKind::Variable, true),
                ("test_thing", SymbolKind::Function, false),
            ],
            vec![],
        )];
        assert!(detect(&files).is_empty());
    }
}
