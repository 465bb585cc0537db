//! External security-scanner seam and the built-in rule engine.
//!
//! The aggregator talks to a [`SecurityScanner`] trait object; the
//! bundled implementation is a regex rule engine over an embedded TOML
//! rule table. Severity of external findings goes through an injectable
//! mapping function so the policy can be refined without touching the
//! adapter's control flow.

use crate::classify;
use crate::error::{Error, Result};
use crate::models::{AnnotationType, ReviewAnnotation, Severity};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One raw finding as reported by a security scanner.
#[derive(Debug, Clone)]
pub struct RawFinding {
    pub desc: String,
    /// 1-based line of the finding.
    pub line: usize,
    /// 0-based, half-open column span.
    pub col_start: usize,
    pub col_end: usize,
    /// Scanner-native rule identifier, e.g. "APL102".
    pub rule_id: String,
}

/// Per-file security scanner. Implementations must not mutate the file.
///
/// A file the scanner cannot analyze (binary content, unsupported type)
/// is a soft failure and yields zero findings; only I/O errors are hard
/// failures, and those abort the whole run.
pub trait SecurityScanner: Sync {
    fn scan(&self, path: &Path) -> Result<Vec<RawFinding>>;
}

/// Maps a raw finding to a report severity.
pub type SeverityMapper = fn(&RawFinding) -> Severity;

/// Placeholder mapping: every external finding lands at LOW until the
/// mapping table is refined from observed findings.
pub fn default_severity(_finding: &RawFinding) -> Severity {
    Severity::Low
}

/// Run the scanner against one file and adapt its findings into review
/// annotations. Raw findings are logged before mapping so the mapping
/// table can be refined later.
pub fn external_annotations(
    scanner: &dyn SecurityScanner,
    path: &Path,
    mapper: SeverityMapper,
) -> Result<Vec<ReviewAnnotation>> {
    let mut annotations = Vec::new();
    for finding in scanner.scan(path)? {
        debug!(
            rule = %finding.rule_id,
            line = finding.line,
            desc = %finding.desc,
            "external scanner finding"
        );
        let severity = mapper(&finding);
        annotations.push(
            ReviewAnnotation::new(severity, AnnotationType::ExternalFinding, finding.desc)
                .at(finding.line, finding.col_start, finding.col_end)
                .with_extra(finding.rule_id),
        );
    }
    Ok(annotations)
}

/// Embedded rule definitions.
const RULES_TOML: &str = include_str!("rules.toml");

#[derive(Deserialize)]
struct RuleTable {
    #[serde(default)]
    rule: Vec<RuleDef>,
}

#[derive(Debug, Deserialize)]
struct RuleDef {
    id: String,
    description: String,
    pattern: String,
    /// Extensions (without dot) the rule applies to; empty means all files.
    #[serde(default)]
    extensions: Vec<String>,
}

#[derive(Debug)]
struct CompiledRule {
    def: RuleDef,
    regex: Regex,
}

/// Built-in scanner: a compiled regex rule table applied line by line.
#[derive(Debug)]
pub struct RuleScanner {
    rules: Vec<CompiledRule>,
}

impl RuleScanner {
    /// Compile the embedded rule table.
    pub fn from_embedded_rules() -> Result<Self> {
        Self::from_toml(RULES_TOML)
    }

    fn from_toml(source: &str) -> Result<Self> {
        let table: RuleTable = toml::from_str(source)?;
        let mut rules = Vec::with_capacity(table.rule.len());
        for def in table.rule {
            let regex = Regex::new(&def.pattern).map_err(|source| Error::Pattern {
                id: def.id.clone(),
                source,
            })?;
            rules.push(CompiledRule { def, regex });
        }
        Ok(RuleScanner { rules })
    }

    fn applicable(&self, ext: &str) -> Vec<&CompiledRule> {
        self.rules
            .iter()
            .filter(|r| r.def.extensions.is_empty() || r.def.extensions.iter().any(|e| e == ext))
            .collect()
    }
}

impl SecurityScanner for RuleScanner {
    fn scan(&self, path: &Path) -> Result<Vec<RawFinding>> {
        let rules = self.applicable(classify::extension(path));
        if rules.is_empty() {
            return Ok(Vec::new());
        }
        let content = fs::read(path).map_err(|e| Error::io(path, e))?;
        let Ok(text) = std::str::from_utf8(&content) else {
            // Not analyzable as text: soft failure, zero findings.
            return Ok(Vec::new());
        };
        let mut findings = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            for rule in &rules {
                for m in rule.regex.find_iter(line) {
                    let col_start = line[..m.start()].chars().count();
                    let col_end = col_start + line[m.start()..m.end()].chars().count();
                    findings.push(RawFinding {
                        desc: rule.def.description.clone(),
                        line: line_idx + 1,
                        col_start,
                        col_end,
                        rule_id: rule.def.id.clone(),
                    });
                }
            }
        }
        Ok(findings)
    }
}
