//! File classifier: content-vs-extension policy.
//!
//! Two fixed extension tables drive everything. Extensions on the
//! must-be-text list require the full content to decode as UTF-8;
//! extensions on the warn list are flagged unconditionally, regardless
//! of content. Both checks are independent.

use crate::models::{AnnotationType, ReviewAnnotation, Severity};
use std::path::Path;

/// Extensions whose content must decode as UTF-8. The empty string covers
/// files without an extension.
pub const MUST_BE_TEXT_EXT: &[&str] = &["py", "json", "yaml", "txt", "md", ""];

/// Extensions that should plain not be in a package, flagged CRITICAL.
pub const WARN_EXT_CRITICAL: &[&str] = &["so", "pyd", "dll", "exe"];

/// Extensions flagged HIGH: a nested apworld is suspicious but not as
/// alarming as a native binary.
pub const WARN_EXT_HIGH: &[&str] = &["apworld"];

/// Extension of the final path segment, without the dot. Files with no
/// dot (and dotfiles such as `.gitignore`, which `Path::extension`
/// treats as extensionless) yield the empty string.
pub fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

pub fn must_be_text(ext: &str) -> bool {
    MUST_BE_TEXT_EXT.contains(&ext)
}

/// Severity for a warn-listed extension, `None` when the extension is not
/// on the warn list.
pub fn warn_severity(ext: &str) -> Option<Severity> {
    if WARN_EXT_CRITICAL.contains(&ext) {
        Some(Severity::Critical)
    } else if WARN_EXT_HIGH.contains(&ext) {
        Some(Severity::High)
    } else {
        None
    }
}

/// Result of classifying one file.
pub struct Classified<'a> {
    /// Classifier findings: a content mismatch and/or a warn-extension flag.
    pub annotations: Vec<ReviewAnnotation>,
    /// Decoded content, present when the file is text-mandated and decoded
    /// cleanly. The suspicious-string scanner runs on this same decode.
    pub text: Option<&'a str>,
}

/// Classify one file given its path and raw byte content.
///
/// A UTF-8 byte-order mark decodes as a zero-width marker and is not a
/// mismatch. Warn-extension flags fire independently of the decode check.
pub fn classify<'a>(path: &Path, content: &'a [u8]) -> Classified<'a> {
    let ext = extension(path);
    let mut annotations = Vec::new();
    let mut text = None;

    if must_be_text(ext) {
        match std::str::from_utf8(content) {
            Ok(decoded) => text = Some(decoded),
            Err(_) => annotations.push(ReviewAnnotation::new(
                Severity::Critical,
                AnnotationType::TypeContentMismatch,
                "The file should be a text file but isn't",
            )),
        }
    }

    if let Some(severity) = warn_severity(ext) {
        annotations.push(ReviewAnnotation::new(
            severity,
            AnnotationType::FileType,
            format!("This file has the extension {ext} and should probably not be in there"),
        ));
    }

    Classified { annotations, text }
}
