//! Suspicious-substring scanner with exact position tracking.
//!
//! Runs only over text that already decoded cleanly under the
//! must-be-text rule. Search is literal, per line, resuming exactly at
//! the previous match's end column so touching occurrences are all
//! reported individually.

use crate::models::{AnnotationType, ReviewAnnotation, Severity};

/// Literal substrings that warrant a finding wherever they appear.
///
/// Deliberately a single entry: dynamic import is the one construct the
/// distribution channel refuses outright. Extending this table is a
/// separate feature with its own validation, not a tweak here.
pub const SUS_STRINGS: &[&str] = &["__import__"];

/// Scan decoded text, yielding one annotation per occurrence of each
/// suspicious substring. Lines are 1-based; column spans are 0-based,
/// half-open, and counted in characters.
pub fn scan_text(text: &str) -> Vec<ReviewAnnotation> {
    let mut annotations = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        for pattern in SUS_STRINGS {
            // Byte offsets drive the search; columns are char offsets.
            let mut from = 0usize;
            while let Some(found) = line[from..].find(pattern) {
                let start = from + found;
                let end = start + pattern.len();
                let col_start = line[..start].chars().count();
                let col_end = col_start + pattern.chars().count();
                annotations.push(
                    ReviewAnnotation::new(
                        Severity::VeryHigh,
                        AnnotationType::SusString,
                        format!("Found suspicious string in file: {pattern}"),
                    )
                    .at(line_idx + 1, col_start, col_end),
                );
                // Resume at the match end, not past it, so adjacent
                // occurrences are found individually.
                from = end;
            }
        }
    }
    annotations
}
