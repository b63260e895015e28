//! Error-handling defects.
//!
//! Empty handlers swallow failures silently and are critical; overly broad
//! handlers (bare `except`, catching the root exception type) are warnings.

use crate::facts::FileFacts;
use crate::lang::Language;

use super::{ErrorHandlingIssue, Severity};

/// Root exception types that make a handler overly broad.
const BROAD_TYPES: &[&str] = &["Exception", "BaseException", "Throwable", "Error", "RuntimeException"];

/// Scan one file's exception handlers.
pub fn detect(facts: &FileFacts) -> Vec<ErrorHandlingIssue> {
    let mut issues = Vec::new();

    for catch in &facts.catches {
        if catch.is_empty {
            issues.push(ErrorHandlingIssue {
                file: facts.path.clone(),
                line: catch.line,
                severity: Severity::Critical,
                message: "empty exception handler silently swallows errors".to_string(),
            });
            continue;
        }

        match &catch.caught {
            // A handler without a type is a bare catch-all in Python; in
            // other languages the binding itself is typed, so only Python
            // gets this warning.
            None if facts.language == Language::Python => {
                issues.push(ErrorHandlingIssue {
                    file: facts.path.clone(),
                    line: catch.line,
                    severity: Severity::Warning,
                    message: "bare except catches everything, including KeyboardInterrupt"
                        .to_string(),
                });
            }
            Some(caught) if BROAD_TYPES.iter().any(|t| caught.contains(t)) => {
                issues.push(ErrorHandlingIssue {
                    file: facts.path.clone(),
                    line: catch.line,
                    severity: Severity::Warning,
                    message: format!("overly broad handler catches {}", caught),
                });
            }
            _ => {}
        }
    }

    issues
}
