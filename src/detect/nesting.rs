//! Excessive control-structure nesting.

use crate::config::AnalysisConfig;
use crate::facts::FileFacts;

use super::NestingIssue;

/// Report functions nested deeper than the configured limit.
pub fn detect(facts: &FileFacts, config: &AnalysisConfig) -> Vec<NestingIssue> {
    facts
        .functions
        .iter()
        .filter(|f| f.max_nesting > config.max_nesting_depth)
        .map(|f| NestingIssue {
            file: facts.path.clone(),
            line: f.start_line,
            function: f.name.clone(),
            depth: f.max_nesting,
            path: f.nesting_path.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FunctionFact;
    use crate::lang::Language;

    fn function(name: &str, max_nesting: usize, path: &[&str]) -> FunctionFact {
        FunctionFact {
            name: name.to_string(),
            start_line: 1,
            end_line: 20,
            param_count: 0,
            complexity: 1,
            max_nesting,
            nesting_path: path.iter().map(|s| s.to_string()).collect(),
            exported: false,
        }
    }

    #[test]
    fn test_deep_function_reported_with_path() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        facts.functions.push(function("shallow", 2, &["if_statement", "for_statement"]));
        facts.functions.push(function(
            "deep",
            4,
            &["if_statement", "for_statement", "if_statement", "while_statement"],
        ));

        let issues = detect(&facts, &AnalysisConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].function, "deep");
        assert_eq!(issues[0].depth, 4);
        assert_eq!(issues[0].path.len(), 4);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut facts = FileFacts::new("a.py", Language::Python);
        facts.functions.push(function("at_limit", 3, &["if_statement"; 3]));
        assert!(detect(&facts, &AnalysisConfig::default()).is_empty());
    }
}
