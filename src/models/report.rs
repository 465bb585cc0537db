//! Findings report: an ordered map from relative file path to annotations.

use crate::models::ReviewAnnotation;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Per-file findings accumulated over one directory walk.
///
/// Invariant: a path appears as a key iff its annotation list is
/// non-empty; files producing zero findings never appear. Key order is
/// insertion order, which the serializer preserves.
#[derive(Debug, Default)]
pub struct ReviewReport {
    files: Vec<(String, Vec<ReviewAnnotation>)>,
}

impl ReviewReport {
    pub fn new() -> Self {
        ReviewReport::default()
    }

    /// Insert the annotations for one file. Empty lists are dropped so the
    /// non-empty-key invariant holds by construction.
    pub fn add_annotations(&mut self, file_path: impl Into<String>, annotations: Vec<ReviewAnnotation>) {
        if !annotations.is_empty() {
            self.files.push((file_path.into(), annotations));
        }
    }

    /// Number of files with at least one finding.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of annotations across all files.
    pub fn annotation_count(&self) -> usize {
        self.files.iter().map(|(_, anns)| anns.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ReviewAnnotation])> {
        self.files
            .iter()
            .map(|(path, anns)| (path.as_str(), anns.as_slice()))
    }

    /// Serialize the report as a single compact JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for ReviewReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for (path, annotations) in &self.files {
            map.serialize_entry(path, annotations)?;
        }
        map.end()
    }
}
