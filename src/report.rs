//! Output formatting for analysis results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: the full `DirectoryResult` for programmatic consumption

use colored::*;

use crate::detect::{Confidence, Severity};
use crate::result::DirectoryResult;
use crate::score::RefactorPriority;

/// Write the full result as pretty-printed JSON.
pub fn write_json(result: &DirectoryResult) -> anyhow::Result<()> {
    println!("{}", result.to_json()?);
    Ok(())
}

/// Write a human-readable report. `top` caps the refactor-candidate list.
pub fn write_pretty(result: &DirectoryResult, top: usize) {
    let summary = &result.summary;

    // Header
    println!();
    print!("  ");
    print!("{}", "codescan".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanned: ".dimmed());
    println!("{}", result.root_path);
    println!();

    // Summary
    print!("  {} files", summary.total_files);
    if summary.failed_files > 0 {
        print!(
            "  {}",
            format!("({} failed)", summary.failed_files).yellow()
        );
    }
    println!(
        "  {} lines  {} functions  {} classes",
        summary.total_lines, summary.total_functions, summary.total_classes
    );

    print!("  Maintainability: ");
    write_colored_score(summary.average_maintainability);
    println!();

    if !summary.languages.is_empty() {
        let parts: Vec<String> = summary
            .languages
            .iter()
            .map(|(lang, count)| format!("{} {}", count, lang))
            .collect();
        println!("  {}{}", "Languages: ".dimmed(), parts.join(", "));
    }
    println!();

    write_failures(result);
    write_refactor_candidates(result, top);
    write_security(result);
    write_dead_code(result);
    write_duplicates(result);
    write_findings_totals(result);
}

fn write_colored_score(score: f64) {
    let text = format!("{:.1}", score);
    match score {
        s if s >= 80.0 => print!("{}", text.green().bold()),
        s if s >= 65.0 => print!("{}", text.green()),
        s if s >= 40.0 => print!("{}", text.yellow()),
        _ => print!("{}", text.red()),
    }
}

fn write_failures(result: &DirectoryResult) {
    let failures: Vec<_> = result.files.iter().filter(|f| !f.success).collect();
    if failures.is_empty() {
        return;
    }

    println!("  {} ({}):", "Failed files".bold(), failures.len());
    for file in failures {
        print!("    {}", file.path.blue());
        if let Some(err) = &file.error {
            print!("  {}", err.dimmed());
        }
        println!();
    }
    println!();
}

fn write_refactor_candidates(result: &DirectoryResult, top: usize) {
    let candidates = result.refactor_candidates(top);
    if candidates.is_empty() {
        return;
    }

    println!("  {}:", "Refactor candidates".bold());
    for file in candidates {
        let Some(metrics) = &file.metrics else { continue };
        print!("    ");
        write_priority_tag(metrics.refactor_priority);
        print!("  {:<40}", file.path.blue());
        print!("  ");
        write_colored_score(metrics.maintainability);
        println!(
            "  {}",
            format!("cc avg {:.2}", metrics.average_complexity).dimmed()
        );
    }
    println!();
}

fn write_priority_tag(priority: RefactorPriority) {
    match priority {
        RefactorPriority::High => print!("{}", "HIGH".red()),
        RefactorPriority::Medium => print!("{}", "MED ".yellow()),
        RefactorPriority::Low => print!("{}", "LOW ".green()),
    }
}

fn write_security(result: &DirectoryResult) {
    let issues = result.security_issues();
    if issues.is_empty() {
        return;
    }

    println!("  {} ({}):", "Security".bold(), issues.len());
    for issue in issues {
        match issue.severity {
            Severity::Critical => print!("    {} ", "CRIT".red()),
            Severity::Warning => print!("    {} ", "WARN".yellow()),
        }
        print!("{}", issue.file.blue());
        print!("{}", format!(":{}", issue.line).dimmed());
        println!("  {}", issue.snippet);
    }
    println!();
}

fn write_dead_code(result: &DirectoryResult) {
    if result.dead_code.is_empty() {
        return;
    }

    let high = result.dead_code(Some(Confidence::High)).len();
    println!(
        "  {} ({}, {} high confidence):",
        "Dead code".bold(),
        result.dead_code.len(),
        high
    );
    for item in &result.dead_code {
        print!("    {:<6} ", item.confidence.to_string().dimmed());
        print!("{}", item.file.blue());
        print!("{}", format!(":{}", item.line).dimmed());
        println!("  {} '{}'", item.kind, item.name);
    }
    println!();
}

fn write_duplicates(result: &DirectoryResult) {
    if result.duplicates.is_empty() {
        return;
    }

    println!("  {} ({}):", "Duplicates".bold(), result.duplicates.len());
    for group in &result.duplicates {
        let scope = if group.cross_file { "cross-file" } else { "within-file" };
        println!(
            "    {} lines x{} {}",
            group.line_count,
            group.locations.len(),
            scope.dimmed()
        );
        for loc in &group.locations {
            print!("      {}", loc.file.blue());
            println!("{}", format!(":{}-{}", loc.start_line, loc.end_line).dimmed());
        }
    }
    println!();
}

fn write_findings_totals(result: &DirectoryResult) {
    let magic = result.magic_values().len();
    let naming = result.naming_issues().len();
    let nesting = result.nesting_issues().len();
    let errors = result.error_handling(None).len();
    if magic + naming + nesting + errors == 0 {
        return;
    }

    println!("  {}:", "Findings".bold());
    if magic > 0 {
        println!("    {:<16} {}", "magic values", magic);
    }
    if naming > 0 {
        println!("    {:<16} {}", "naming", naming);
    }
    if nesting > 0 {
        println!("    {:<16} {}", "deep nesting", nesting);
    }
    if errors > 0 {
        println!("    {:<16} {}", "error handling", errors);
    }
    println!();
}
