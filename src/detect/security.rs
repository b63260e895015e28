//! Detection of security-relevant patterns.
//!
//! Two heuristics: credential-like string assignments in the raw source,
//! and calls to dynamic-evaluation functions taken from the extracted
//! facts. Both are tagged with a severity; neither is a proof.

use lazy_static::lazy_static;
use regex::Regex;

use crate::facts::FileFacts;

use super::{Severity, SecurityIssue, SecurityKind};

lazy_static! {
    /// `password = "..."` and friends, any quoting style, at least a few
    /// characters of payload so empty placeholders don't match.
    static ref CREDENTIAL_RE: Regex = Regex::new(
        r#"(?i)\b(password|passwd|pwd|secret|api_key|apikey|access_token|auth_token|token|private_key)\b\s*[:=]+\s*["'][^"']{4,}["']"#
    )
    .unwrap();
}

/// Callee names treated as dynamic code evaluation.
const DANGEROUS_CALLS: &[&str] = &["eval", "exec", "execfile", "system", "popen", "Function"];

/// Scan one file for security issues.
pub fn detect(facts: &FileFacts, source: &str) -> Vec<SecurityIssue> {
    let mut issues = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        if let Some(m) = CREDENTIAL_RE.find(line) {
            issues.push(SecurityIssue {
                file: facts.path.clone(),
                line: idx + 1,
                severity: Severity::Critical,
                kind: SecurityKind::HardcodedCredential,
                snippet: m.as_str().chars().take(80).collect(),
            });
        }
    }

    for call in &facts.calls {
        if DANGEROUS_CALLS.contains(&call.callee.as_str()) {
            issues.push(SecurityIssue {
                file: facts.path.clone(),
                line: call.line,
                severity: Severity::Critical,
                kind: SecurityKind::DynamicEvaluation,
                snippet: format!("call to {}()", call.callee),
            });
        }
    }

    issues.sort_by(|a, b| a.line.cmp(&b.line));
    issues
}
