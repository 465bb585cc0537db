//! Human-readable rendering of the findings report.
//!
//! The serialized `.aplint` file is the machine surface; this module only
//! prints a colored per-file summary for whoever ran the audit.

use crate::models::{ReviewAnnotation, ReviewReport, Severity};
use owo_colors::OwoColorize;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

fn severity_tag(severity: Severity, color: bool) -> String {
    let label = format!("⟦{severity}⟧");
    if !color {
        return label;
    }
    match severity {
        Severity::Critical | Severity::VeryHigh => label.red().bold().to_string(),
        Severity::High | Severity::Medium => label.yellow().bold().to_string(),
        Severity::Low | Severity::VeryLow => label.blue().bold().to_string(),
    }
}

fn location(ann: &ReviewAnnotation) -> String {
    match (ann.line, ann.col_start) {
        (Some(line), Some(col)) => format!(":{line}:{col}"),
        (Some(line), None) => format!(":{line}"),
        _ => String::new(),
    }
}

/// Print one line per annotation plus a closing summary.
pub fn print_report(report: &ReviewReport) {
    let color = use_colors();
    for (path, annotations) in report.iter() {
        for ann in annotations {
            let file = if color {
                format!("{}{}", path.bold(), location(ann))
            } else {
                format!("{}{}", path, location(ann))
            };
            match &ann.extra {
                Some(extra) => println!(
                    "{} {} ❲{}❳ {}",
                    severity_tag(ann.severity, color),
                    file,
                    extra,
                    ann.desc
                ),
                None => println!("{} {} {}", severity_tag(ann.severity, color), file, ann.desc),
            }
        }
    }
    let summary = format!(
        "— Summary — findings={} files={}",
        report.annotation_count(),
        report.len()
    );
    if color {
        println!("{}", summary.bold());
    } else {
        println!("{summary}");
    }
}
