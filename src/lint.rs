//! Report aggregation across an extracted directory tree.
//!
//! Walks every regular file under the root in sorted order, fans the
//! per-file work out on the rayon pool, and recombines in walk order so
//! output is deterministic. Any I/O failure aborts the whole run; there
//! is no partial-report mode.

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::models::{ReviewAnnotation, ReviewReport};
use crate::scan::scan_text;
use crate::scanner::{external_annotations, SecurityScanner, SeverityMapper};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All annotations for one file: external-scanner findings first, then
/// classifier and suspicious-string findings.
pub fn annotations_for_file(
    path: &Path,
    scanner: &dyn SecurityScanner,
    mapper: SeverityMapper,
) -> Result<Vec<ReviewAnnotation>> {
    let mut annotations = external_annotations(scanner, path, mapper)?;
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;
    let classified = classify(path, &content);
    if let Some(text) = classified.text {
        annotations.extend(scan_text(text));
    }
    annotations.extend(classified.annotations);
    Ok(annotations)
}

/// Build a complete report for the tree rooted at `root`.
///
/// Sibling entries are visited in lexicographically sorted order, so two
/// runs over the same tree serialize byte-identically.
pub fn lint_dir(
    root: &Path,
    scanner: &dyn SecurityScanner,
    mapper: SeverityMapper,
) -> Result<ReviewReport> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    // Fan out per file; the fallible collect short-circuits on the first
    // error and outstanding work is dropped, never a partial report.
    let per_file: Vec<(String, Vec<ReviewAnnotation>)> = files
        .par_iter()
        .map(|path| {
            let annotations = annotations_for_file(path, scanner, mapper)?;
            Ok((relative_key(root, path), annotations))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut report = ReviewReport::new();
    for (rel, annotations) in per_file {
        report.add_annotations(rel, annotations);
    }
    Ok(report)
}

/// Root-relative path with forward-slash separators, regardless of host
/// path conventions.
fn relative_key(root: &Path, path: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnnotationType;
    use crate::scanner::{default_severity, RuleScanner};
    use tempfile::tempdir;

    fn scanner() -> RuleScanner {
        RuleScanner::from_embedded_rules().unwrap()
    }

    #[test]
    fn test_only_files_with_findings_become_keys() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        // 2 of 5 files produce findings
        fs::write(root.join("clean.py"), "import os\n").unwrap();
        fs::write(root.join("notes.txt"), "hello\n").unwrap();
        fs::write(root.join("data.json"), "{}\n").unwrap();
        fs::write(root.join("lib.so"), [0u8, 1, 2]).unwrap();
        fs::write(root.join("sneaky.py"), "x = __import__('os')\n").unwrap();

        let report = lint_dir(root, &scanner(), default_severity).unwrap();
        assert_eq!(report.len(), 2);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
        assert!(json.get("lib.so").is_some());
        assert!(json.get("sneaky.py").is_some());
    }

    #[test]
    fn test_relative_keys_use_forward_slashes() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("world/data")).unwrap();
        fs::write(root.join("world/data/blob.dll"), [0u8]).unwrap();

        let report = lint_dir(root, &scanner(), default_severity).unwrap();
        let keys: Vec<&str> = report.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["world/data/blob.dll"]);
    }

    #[test]
    fn test_external_findings_precede_lint_findings() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(
            root.join("bad.py"),
            "eval(payload)\nx = __import__('os')\n",
        )
        .unwrap();

        let report = lint_dir(root, &scanner(), default_severity).unwrap();
        let (_, annotations) = report.iter().next().unwrap();
        assert_eq!(annotations[0].ty, AnnotationType::ExternalFinding);
        assert_eq!(annotations[1].ty, AnnotationType::SusString);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("b.so"), [0u8]).unwrap();
        fs::write(root.join("a.so"), [0u8]).unwrap();
        fs::write(root.join("c.pyd"), [0u8]).unwrap();

        let s = scanner();
        let first = lint_dir(root, &s, default_severity).unwrap().to_json().unwrap();
        let second = lint_dir(root, &s, default_severity).unwrap().to_json().unwrap();
        assert_eq!(first, second);
        // Sorted sibling order
        assert!(first.find("a.so").unwrap() < first.find("b.so").unwrap());
        assert!(first.find("b.so").unwrap() < first.find("c.pyd").unwrap());
    }

    #[test]
    fn test_empty_tree_yields_empty_report() {
        let tmp = tempdir().unwrap();
        let report = lint_dir(tmp.path(), &scanner(), default_severity).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_directories_are_not_annotated() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        // A directory whose name looks like a warn extension
        fs::create_dir_all(root.join("plugin.so")).unwrap();
        fs::write(root.join("plugin.so/readme.txt"), "fine\n").unwrap();

        let report = lint_dir(root, &scanner(), default_severity).unwrap();
        assert!(report.is_empty());
    }
}
