//! Detection of magic literals.
//!
//! A literal is a magic-value candidate when it appears outside a
//! declarations context (an ALL_CAPS constant assignment) and is not a
//! trivial value. The suggested constant name is derived from the
//! assignment target on the same line when one exists.

use lazy_static::lazy_static;
use regex::Regex;

use crate::facts::{FileFacts, LiteralKind};

use super::MagicValue;

/// Numbers too common to be worth naming.
const TRIVIAL_NUMBERS: &[&str] = &["0", "1", "-1", "2", "0.0", "1.0"];

lazy_static! {
    /// Assignment-like line: optional declaration keyword, then a target.
    static ref ASSIGN_TARGET_RE: Regex = Regex::new(
        r"^\s*(?:pub\s+)?(?:const\s+|let\s+mut\s+|let\s+|var\s+|static\s+|final\s+\w+\s+)?([A-Za-z_][A-Za-z0-9_]*)\s*(?::[^=]+)?=[^=]"
    )
    .unwrap();
}

/// Scan one file's literals for magic values.
pub fn detect(facts: &FileFacts) -> Vec<MagicValue> {
    let mut values = Vec::new();

    for literal in &facts.literals {
        let target = ASSIGN_TARGET_RE
            .captures(&literal.context)
            .map(|c| c[1].to_string());

        // An ALL_CAPS assignment is already a named constant.
        if let Some(ref t) = target {
            if is_screaming_case(t) {
                continue;
            }
        }

        match literal.kind {
            LiteralKind::Number => {
                if TRIVIAL_NUMBERS.contains(&literal.value.as_str()) {
                    continue;
                }
            }
            LiteralKind::Str => {
                let inner = strip_quotes(&literal.value);
                if inner.len() < 3 {
                    continue;
                }
                // A string that is the whole statement is a docstring or
                // directive, not a magic value.
                if literal.context.starts_with('"')
                    || literal.context.starts_with('\'')
                    || literal.context.starts_with("r\"")
                    || literal.context.starts_with("f\"")
                {
                    continue;
                }
            }
        }

        values.push(MagicValue {
            file: facts.path.clone(),
            line: literal.line,
            value: literal.value.clone(),
            suggested_name: suggest_name(target.as_deref(), literal),
            context: literal.context.clone(),
        });
    }

    values
}

fn suggest_name(target: Option<&str>, literal: &crate::facts::LiteralFact) -> String {
    if let Some(target) = target {
        return to_screaming_case(target);
    }
    match literal.kind {
        LiteralKind::Number => {
            let sanitized: String = literal
                .value
                .chars()
                .map(|c| if c == '.' || c == '-' { '_' } else { c })
                .collect();
            format!("CONST_{}", sanitized.trim_matches('_'))
        }
        LiteralKind::Str => {
            let inner = strip_quotes(&literal.value);
            let words: String = inner
                .chars()
                .take(24)
                .map(|c| if c.is_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
                .collect();
            let trimmed = words.trim_matches('_');
            if trimmed.is_empty() {
                "STR_CONSTANT".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'' || c == '`')
}

fn is_screaming_case(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
        && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn to_screaming_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        if c == '_' {
            out.push('_');
        } else {
            out.push(c.to_ascii_uppercase());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::LiteralFact;
    use crate::lang::Language;

    fn literal(value: &str, kind: LiteralKind, context: &str, in_function: bool) -> LiteralFact {
        LiteralFact {
            value: value.to_string(),
            kind,
            line: 1,
            context: context.to_string(),
            in_function,
        }
    }

    #[test]
    fn test_number_with_assignment_target() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        facts.literals.push(literal("30", LiteralKind::Number, "timeout = 30", true));
        let values = detect(&facts);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].suggested_name, "TIMEOUT");
    }

    #[test]
    fn test_trivial_numbers_exempt() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        for v in ["0", "1", "-1", "2"] {
            facts.literals.push(literal(v, LiteralKind::Number, "x = y + 1", true));
        }
        assert!(detect(&facts).is_empty());
    }

    #[test]
    fn test_screaming_case_assignment_exempt() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        facts
            .literals
            .push(literal("8080", LiteralKind::Number, "DEFAULT_PORT = 8080", false));
        assert!(detect(&facts).is_empty());
    }

    #[test]
    fn test_camel_case_target_converted() {
        let mut facts = FileFacts::new("a.js", Language::JavaScript);
        facts
            .literals
            .push(literal("512", LiteralKind::Number, "const maxRetries = 512;", false));
        let values = detect(&facts);
        assert_eq!(values[0].suggested_name, "MAX_RETRIES");
    }

    #[test]
    fn test_short_strings_and_docstrings_exempt() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        facts.literals.push(literal("\"ok\"", LiteralKind::Str, "return \"ok\"", true));
        facts.literals.push(literal(
            "\"Module docstring.\"",
            LiteralKind::Str,
            "\"Module docstring.\"",
            false,
        ));
        assert!(detect(&facts).is_empty());
    }

    #[test]
    fn test_string_without_target_gets_derived_name() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        facts.literals.push(literal(
            "\"application/json\"",
            LiteralKind::Str,
            "send(\"application/json\")",
            true,
        ));
        let values = detect(&facts);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].suggested_name, "APPLICATION_JSON");
    }
}
