//! Duplicate-code detection by content fingerprinting.
//!
//! A fixed-size window slides over each file's normalized significant
//! lines; window hashes land in one global index, and any hash seen twice
//! marks its windows as duplicated. Consecutive duplicated windows in a
//! file merge into one maximal block, so overlapping smaller windows never
//! produce nested groups.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::config::AnalysisConfig;
use crate::facts::SourceFile;
use crate::lang::Language;

use super::{DuplicateGroup, DuplicateLocation};

/// A significant line: original line number plus normalized text.
struct SigLine {
    line: usize,
    text: String,
}

/// A maximal run of duplicated windows in one file, in significant-line
/// index space.
#[derive(Clone)]
struct Block {
    file_idx: usize,
    start: usize,
    len: usize,
}

/// Find duplicate groups across the scanned set.
pub fn detect(files: &[SourceFile], config: &AnalysisConfig) -> Vec<DuplicateGroup> {
    let window = config.duplicate_window;
    let sig_files: Vec<Vec<SigLine>> = files
        .iter()
        .map(|f| significant_lines(&f.source, f.language))
        .collect();

    // Global fingerprint index: window hash -> occurrence count.
    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut window_hashes: Vec<Vec<u64>> = Vec::with_capacity(sig_files.len());
    for sig in &sig_files {
        let mut hashes = Vec::new();
        if sig.len() >= window {
            for start in 0..=sig.len() - window {
                let h = hash_window(&sig[start..start + window]);
                *index.entry(h).or_insert(0) += 1;
                hashes.push(h);
            }
        }
        window_hashes.push(hashes);
    }

    // Merge consecutive duplicated window starts into maximal blocks.
    let mut blocks: Vec<Block> = Vec::new();
    for (file_idx, hashes) in window_hashes.iter().enumerate() {
        let mut run_start: Option<usize> = None;
        for (i, h) in hashes.iter().enumerate() {
            let duplicated = index[h] >= 2;
            match (duplicated, run_start) {
                (true, None) => run_start = Some(i),
                (false, Some(start)) => {
                    blocks.push(Block {
                        file_idx,
                        start,
                        len: (i - 1) + window - start,
                    });
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            blocks.push(Block {
                file_idx,
                start,
                len: hashes.len() - 1 + window - start,
            });
        }
    }

    // First pass: group blocks whose full normalized content matches.
    let mut by_content: HashMap<u64, Vec<Block>> = HashMap::new();
    for block in &blocks {
        let sig = &sig_files[block.file_idx];
        let h = hash_window(&sig[block.start..block.start + block.len]);
        by_content.entry(h).or_default().push(block.clone());
    }

    let mut groups = Vec::new();
    let mut leftovers: Vec<Block> = Vec::new();
    for (_, members) in by_content {
        if members.len() >= 2 {
            let len = members[0].len;
            groups.push(make_group(files, &sig_files, &members, len));
        } else {
            leftovers.extend(members);
        }
    }

    // Second pass: blocks whose maximal runs differ in length still share
    // their leading window; trim them to the shortest member.
    let mut by_head: HashMap<u64, Vec<Block>> = HashMap::new();
    for block in leftovers {
        let h = window_hashes[block.file_idx][block.start];
        by_head.entry(h).or_default().push(block);
    }
    for (_, members) in by_head {
        if members.len() >= 2 {
            let len = members.iter().map(|b| b.len).min().unwrap_or(window);
            groups.push(make_group(files, &sig_files, &members, len));
        }
    }

    groups.retain(|g| g.line_count >= config.min_duplicate_lines && g.locations.len() >= 2);
    groups.sort_by(|a, b| {
        b.line_count
            .cmp(&a.line_count)
            .then_with(|| a.locations[0].file.cmp(&b.locations[0].file))
            .then_with(|| a.locations[0].start_line.cmp(&b.locations[0].start_line))
    });
    groups
}

fn make_group(
    files: &[SourceFile],
    sig_files: &[Vec<SigLine>],
    members: &[Block],
    len: usize,
) -> DuplicateGroup {
    let mut locations: Vec<DuplicateLocation> = members
        .iter()
        .map(|b| {
            let sig = &sig_files[b.file_idx];
            DuplicateLocation {
                file: files[b.file_idx].path.clone(),
                start_line: sig[b.start].line,
                end_line: sig[b.start + len - 1].line,
            }
        })
        .collect();
    locations.sort_by(|a, b| (&a.file, a.start_line).cmp(&(&b.file, b.start_line)));

    let cross_file = locations.windows(2).any(|w| w[0].file != w[1].file);
    let first = &members[0];
    let sample_snippet = sig_files[first.file_idx][first.start..first.start + len.min(3)]
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    DuplicateGroup {
        line_count: len,
        locations,
        cross_file,
        sample_snippet,
    }
}

fn hash_window(lines: &[SigLine]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for l in lines {
        l.text.hash(&mut hasher);
        "\n".hash(&mut hasher);
    }
    hasher.finish()
}

/// Normalize a file into significant lines: blank and comment-only lines
/// dropped, interior whitespace collapsed.
fn significant_lines(source: &str, language: Language) -> Vec<SigLine> {
    let comment_prefixes: &[&str] = match language {
        Language::Python => &["#"],
        _ => &["//", "/*", "*", "*/"],
    };

    source
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            if comment_prefixes.iter().any(|p| trimmed.starts_with(p)) {
                return None;
            }
            Some(SigLine {
                line: idx + 1,
                text: trimmed.split_whitespace().collect::<Vec<_>>().join(" "),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_file(path: &str, source: &str) -> SourceFile {
        SourceFile {
            path: path.to_string(),
            language: Language::Python,
            source: source.to_string(),
        }
    }

    const SHARED_BLOCK: &str = "\
total = 0
for item in items:
    if item.valid:
        total += item.value
    else:
        total -= 1
count = len(items)
mean = total / count
print(total)
print(mean)
";

    #[test]
    fn test_identical_block_across_two_files() {
        let a = source_file("a.py", &format!("def fa():\n    pass\n{}", SHARED_BLOCK));
        let b = source_file("b.py", &format!("x = 99\ny = 42\n{}", SHARED_BLOCK));

        let groups = detect(&[a, b], &AnalysisConfig::default());
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert!(group.cross_file);
        assert_eq!(group.locations.len(), 2);
        assert_eq!(group.line_count, 10);
        assert_eq!(group.locations[0].file, "a.py");
        assert_eq!(group.locations[1].file, "b.py");
    }

    #[test]
    fn test_no_nested_groups_for_overlapping_windows() {
        let a = source_file("a.py", SHARED_BLOCK);
        let b = source_file("b.py", SHARED_BLOCK);

        // The 10-line block yields six overlapping 5-line windows; only
        // one maximal group must come out.
        let groups = detect(&[a, b], &AnalysisConfig::default());
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_within_file_duplicate_not_cross_file() {
        let doubled = format!("{}\nz = 1\n{}", SHARED_BLOCK, SHARED_BLOCK);
        let a = source_file("a.py", &doubled);

        let groups = detect(&[a], &AnalysisConfig::default());
        assert_eq!(groups.len(), 1);
        assert!(!groups[0].cross_file);
        assert_eq!(groups[0].locations.len(), 2);
    }

    #[test]
    fn test_below_threshold_discarded() {
        let small = "a = 1\nb = 2\nc = 3\n";
        let a = source_file("a.py", small);
        let b = source_file("b.py", small);
        assert!(detect(&[a, b], &AnalysisConfig::default()).is_empty());
    }

    #[test]
    fn test_formatting_insensitive() {
        let a = source_file("a.py", SHARED_BLOCK);
        let spaced = SHARED_BLOCK
            .lines()
            .map(|l| format!("{}   ", l.replace("  ", "    ")))
            .collect::<Vec<_>>()
            .join("\n");
        let b = source_file("b.py", &spaced);

        let groups = detect(&[a, b], &AnalysisConfig::default());
        assert_eq!(groups.len(), 1);
        assert!(groups[0].cross_file);
    }

    #[test]
    fn test_comment_lines_do_not_join_blocks() {
        let with_comment = format!("# explains the loop\n{}", SHARED_BLOCK);
        let a = source_file("a.py", &with_comment);
        let b = source_file("b.py", SHARED_BLOCK);

        let groups = detect(&[a, b], &AnalysisConfig::default());
        assert_eq!(groups.len(), 1);
        // Location in a.py starts after the comment line.
        assert_eq!(groups[0].locations[0].start_line, 2);
    }
}
