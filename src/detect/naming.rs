//! Naming-convention checks.
//!
//! The dominant convention is observed per file from its own function and
//! variable names, so a camelCase JavaScript file and a snake_case Python
//! file are each held to their own style. Classes are expected to be
//! PascalCase everywhere.

use crate::config::AnalysisConfig;
use crate::facts::{FileFacts, SymbolKind};

use super::NamingIssue;

/// Short names that are idiomatic despite the length threshold.
const SHORT_NAME_ALLOWLIST: &[&str] = &["i", "j", "k", "n", "x", "y", "id", "ok", "db", "fs", "io"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Snake,
    Camel,
    Pascal,
    Screaming,
    /// Single lowercase word; consistent with either convention.
    Neutral,
}

fn classify(name: &str) -> Style {
    let has_underscore = name.contains('_');
    let has_upper = name.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = name.chars().any(|c| c.is_ascii_lowercase());
    let starts_upper = name.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    if has_upper && !has_lower {
        Style::Screaming
    } else if starts_upper {
        Style::Pascal
    } else if has_underscore {
        Style::Snake
    } else if has_upper {
        Style::Camel
    } else {
        Style::Neutral
    }
}

/// Detect naming violations in one file.
pub fn detect(facts: &FileFacts, config: &AnalysisConfig) -> Vec<NamingIssue> {
    let mut issues = Vec::new();

    // Observe the dominant convention from multi-word names.
    let mut snake = 0usize;
    let mut camel = 0usize;
    for decl in &facts.declarations {
        if decl.kind == SymbolKind::Import {
            continue;
        }
        match classify(decl.name.trim_start_matches('_')) {
            Style::Snake => snake += 1,
            Style::Camel => camel += 1,
            _ => {}
        }
    }
    let dominant = if camel > snake { Style::Camel } else { Style::Snake };
    let dominant_label = match dominant {
        Style::Camel => "camelCase",
        _ => "snake_case",
    };

    for decl in &facts.declarations {
        if decl.kind == SymbolKind::Import {
            continue;
        }
        let bare = decl.name.trim_start_matches('_');
        if bare.is_empty() || is_dunder(&decl.name) {
            continue;
        }

        if decl.kind == SymbolKind::Class {
            if classify(bare) != Style::Pascal && classify(bare) != Style::Screaming {
                issues.push(NamingIssue {
                    file: facts.path.clone(),
                    line: decl.line,
                    name: decl.name.clone(),
                    kind: decl.kind,
                    expected: "PascalCase".to_string(),
                    message: format!("class '{}' should be PascalCase", decl.name),
                });
            }
            continue;
        }

        let style = classify(bare);
        let mismatched = matches!(
            (dominant, style),
            (Style::Snake, Style::Camel) | (Style::Camel, Style::Snake)
        );
        if mismatched {
            issues.push(NamingIssue {
                file: facts.path.clone(),
                line: decl.line,
                name: decl.name.clone(),
                kind: decl.kind,
                expected: dominant_label.to_string(),
                message: format!(
                    "{} '{}' does not match the file's dominant {} style",
                    decl.kind, decl.name, dominant_label
                ),
            });
            continue;
        }

        if bare.len() < config.min_identifier_length
            && !SHORT_NAME_ALLOWLIST.contains(&bare)
            && style != Style::Screaming
        {
            issues.push(NamingIssue {
                file: facts.path.clone(),
                line: decl.line,
                name: decl.name.clone(),
                kind: decl.kind,
                expected: format!("at least {} characters", config.min_identifier_length),
                message: format!("{} '{}' is too short to be descriptive", decl.kind, decl.name),
            });
        }
    }

    issues
}

fn is_dunder(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}
