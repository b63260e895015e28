//! Maintainability scoring.
//!
//! The score is a 0-100 composite of average complexity (inverse-scaled),
//! comment density, and average function length (inverse-scaled). A file
//! with more comments, shorter functions, and lower complexity always
//! scores strictly higher than one with none of these.

use serde::{Deserialize, Serialize};

/// How urgently a file deserves refactoring attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RefactorPriority {
    Low,
    Medium,
    High,
}

const COMPLEXITY_WEIGHT: f64 = 8.0;
const FUNCTION_LENGTH_WEIGHT: f64 = 0.4;
const COMMENT_BONUS: f64 = 25.0;

/// Compute the maintainability score for one file.
///
/// `avg_complexity` is the mean cyclomatic complexity over functions (0
/// for a file with none), `comment_density` is comment lines over total
/// lines, and `avg_function_length` is mean function lines.
pub fn maintainability(
    avg_complexity: f64,
    comment_density: f64,
    avg_function_length: f64,
) -> f64 {
    let complexity_penalty = COMPLEXITY_WEIGHT * (avg_complexity.max(1.0) - 1.0);
    let length_penalty = FUNCTION_LENGTH_WEIGHT * avg_function_length;
    let comment_bonus = COMMENT_BONUS * comment_density.clamp(0.0, 1.0);

    let score = 100.0 - complexity_penalty - length_penalty + comment_bonus;
    round1(score.clamp(0.0, 100.0))
}

/// Derive a refactor priority from the score and the share of functions
/// already flagged for refactoring.
pub fn refactor_priority(score: f64, flagged: usize, total_functions: usize) -> RefactorPriority {
    let flagged_share = if total_functions == 0 {
        0.0
    } else {
        flagged as f64 / total_functions as f64
    };

    if score < 40.0 || flagged_share > 0.5 {
        RefactorPriority::High
    } else if score < 65.0 || flagged > 0 {
        RefactorPriority::Medium
    } else {
        RefactorPriority::Low
    }
}

/// Round to one decimal for stable serialized output.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimals for stable serialized output.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_scores_full() {
        assert_eq!(maintainability(0.0, 0.0, 0.0), 100.0);
    }

    #[test]
    fn test_ordering_property() {
        // B: more comments, shorter functions, lower complexity than A.
        let a = maintainability(6.0, 0.0, 60.0);
        let b = maintainability(3.0, 0.2, 20.0);
        assert!(b > a, "expected {} > {}", b, a);
    }

    #[test]
    fn test_monotone_in_each_input() {
        let base = maintainability(4.0, 0.1, 30.0);
        assert!(maintainability(5.0, 0.1, 30.0) < base);
        assert!(maintainability(4.0, 0.2, 30.0) > base);
        assert!(maintainability(4.0, 0.1, 40.0) < base);
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(maintainability(50.0, 0.0, 500.0), 0.0);
        assert!(maintainability(1.0, 1.0, 0.0) <= 100.0);
    }

    #[test]
    fn test_refactor_priority() {
        assert_eq!(refactor_priority(90.0, 0, 4), RefactorPriority::Low);
        assert_eq!(refactor_priority(90.0, 1, 4), RefactorPriority::Medium);
        assert_eq!(refactor_priority(55.0, 0, 4), RefactorPriority::Medium);
        assert_eq!(refactor_priority(30.0, 0, 4), RefactorPriority::High);
        assert_eq!(refactor_priority(90.0, 3, 4), RefactorPriority::High);
        assert_eq!(refactor_priority(90.0, 0, 0), RefactorPriority::Low);
    }
}
