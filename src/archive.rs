//! Archive ingestion and report writing.
//!
//! The archive is extracted into a scoped temporary directory that is
//! released on every exit path, then the aggregator runs over the staged
//! tree before the staging directory goes away.

use crate::error::{Error, Result};
use crate::lint::lint_dir;
use crate::models::ReviewReport;
use crate::scanner::{default_severity, RuleScanner};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Audit one package archive and write `<output_dir>/<stem>.aplint`.
///
/// Returns the output path and the report so the caller can render a
/// summary. Nothing is written when any stage fails.
pub fn lint_archive(archive_path: &Path, output_dir: &Path) -> Result<(PathBuf, ReviewReport)> {
    let report = lint_archive_to_report(archive_path)?;

    let stem = archive_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let out_path = output_dir.join(format!("{stem}.aplint"));
    let json = report.to_json()?;
    fs::write(&out_path, json).map_err(|e| Error::io(&out_path, e))?;
    Ok((out_path, report))
}

/// Extract the archive into scoped staging and aggregate findings.
///
/// The `TempDir` guard keeps the staging tree alive for the full walk
/// and removes it on success, error, and unwind alike.
pub fn lint_archive_to_report(archive_path: &Path) -> Result<ReviewReport> {
    let staging = tempfile::tempdir().map_err(|e| Error::io(std::env::temp_dir(), e))?;

    let file = fs::File::open(archive_path).map_err(|e| Error::io(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|source| Error::Archive {
        path: archive_path.to_path_buf(),
        source,
    })?;
    archive
        .extract(staging.path())
        .map_err(|source| Error::Archive {
            path: archive_path.to_path_buf(),
            source,
        })?;
    debug!(archive = %archive_path.display(), staging = %staging.path().display(), "archive extracted");

    let scanner = RuleScanner::from_embedded_rules()?;
    lint_dir(staging.path(), &scanner, default_severity)
}
