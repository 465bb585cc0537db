//! Shared data models: severity/annotation taxonomy and the findings report.

pub mod report;

pub use report::ReviewReport;

use serde::{Serialize, Serializer};

/// Severity of a finding. The ordinal is the wire value; higher means
/// more severe. Variants are declared in ascending order so the derived
/// `Ord` matches the ordinal ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    VeryLow = 10,
    Low = 20,
    Medium = 30,
    High = 40,
    VeryHigh = 50,
    Critical = 60,
}

impl Severity {
    /// Stable integer code used in serialization.
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::VeryLow => "very-low",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::VeryHigh => "very-high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

/// Category of a finding, with a fixed numeric wire code per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationType {
    /// A text-mandated file whose content is not valid UTF-8.
    TypeContentMismatch = 0,
    /// A file whose extension is disallowed outright.
    FileType = 1,
    /// A finding reported by the external security scanner.
    ExternalFinding = 2,
    /// A suspicious literal substring inside a text file.
    SusString = 3,
}

impl AnnotationType {
    /// Stable integer code used in serialization.
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl Serialize for AnnotationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

/// One finding against one file. Immutable once constructed; location and
/// metadata are attached at construction via `at` and `with_extra`.
///
/// Serializes with all seven keys present; absent options become `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewAnnotation {
    pub severity: Severity,
    pub ty: AnnotationType,
    pub desc: String,
    /// 1-based line. Absent for whole-file findings.
    pub line: Option<usize>,
    /// 0-based, half-open column span. Present only when `line` is.
    pub col_start: Option<usize>,
    pub col_end: Option<usize>,
    /// Free-form metadata, e.g. an external-scanner rule id.
    pub extra: Option<String>,
}

impl ReviewAnnotation {
    /// A whole-file finding with no location.
    pub fn new(severity: Severity, ty: AnnotationType, desc: impl Into<String>) -> Self {
        ReviewAnnotation {
            severity,
            ty,
            desc: desc.into(),
            line: None,
            col_start: None,
            col_end: None,
            extra: None,
        }
    }

    /// Attach a 1-based line and 0-based half-open column span.
    pub fn at(mut self, line: usize, col_start: usize, col_end: usize) -> Self {
        self.line = Some(line);
        self.col_start = Some(col_start);
        self.col_end = Some(col_end);
        self
    }

    /// Attach scanner-native metadata.
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordinals_are_wire_values() {
        assert_eq!(Severity::VeryLow.code(), 10);
        assert_eq!(Severity::Low.code(), 20);
        assert_eq!(Severity::Medium.code(), 30);
        assert_eq!(Severity::High.code(), 40);
        assert_eq!(Severity::VeryHigh.code(), 50);
        assert_eq!(Severity::Critical.code(), 60);
    }

    #[test]
    fn test_severity_total_order_follows_ordinal() {
        assert!(Severity::Critical > Severity::VeryHigh);
        assert!(Severity::VeryHigh > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::VeryLow);
    }

    #[test]
    fn test_annotation_type_codes() {
        assert_eq!(AnnotationType::TypeContentMismatch.code(), 0);
        assert_eq!(AnnotationType::FileType.code(), 1);
        assert_eq!(AnnotationType::ExternalFinding.code(), 2);
        assert_eq!(AnnotationType::SusString.code(), 3);
    }

    #[test]
    fn test_annotation_json_shape() {
        let ann = ReviewAnnotation::new(
            Severity::VeryHigh,
            AnnotationType::SusString,
            "Found suspicious string in file: __import__",
        )
        .at(1, 4, 14);
        let json = serde_json::to_value(&ann).unwrap();
        assert_eq!(json["severity"], 50);
        assert_eq!(json["ty"], 3);
        assert_eq!(json["line"], 1);
        assert_eq!(json["col_start"], 4);
        assert_eq!(json["col_end"], 14);
        // Absent metadata still serializes, as null
        assert!(json["extra"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_whole_file_annotation_has_null_location() {
        let ann = ReviewAnnotation::new(
            Severity::Critical,
            AnnotationType::TypeContentMismatch,
            "The file should be a text file but isn't",
        );
        let json = serde_json::to_value(&ann).unwrap();
        assert!(json["line"].is_null());
        assert!(json["col_start"].is_null());
        assert!(json["col_end"].is_null());
    }
}
