//! Aplint core library.
//!
//! This crate audits an apworld package archive (a zip-packaged game-mod
//! bundle) for security-relevant anomalies and produces a structured,
//! per-file findings report. It is meant as a gatekeeping check before a
//! package is accepted into a distribution channel.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `models`: Severity/annotation taxonomy and the findings report.
//! - `classify`: Content-vs-extension classification of files.
//! - `scan`: Suspicious-substring scanner with exact positions.
//! - `scanner`: External security-scanner seam and the built-in rule engine.
//! - `lint`: Report aggregation across an extracted directory tree.
//! - `archive`: Scoped archive extraction and report serialization.
//! - `output`: Human-readable findings summary printer.
//! - `error`: Crate-wide error type.
//!
//! Note: All documentation comments are written in English by convention.
pub mod archive;
pub mod classify;
pub mod cli;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod scan;
pub mod scanner;

pub use error::{Error, Result};
