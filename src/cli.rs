//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aplint",
    version,
    about = "Audit an apworld package archive for security-relevant anomalies",
    long_about = "Aplint extracts a package archive, inspects every file for content/extension \
mismatches, disallowed binaries, and suspicious strings, runs the bundled security scanner, \
and writes a per-file findings report next to your chosen output directory.",
    after_help = "Examples:\n  aplint my_world.apworld reports/\n  aplint bundle.zip /tmp/lint-out"
)]
/// Top-level CLI options: exactly two positional arguments.
pub struct Cli {
    /// Path to the package archive (a zip file) to audit
    pub archive_path: PathBuf,
    /// Directory the findings report is written into
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positional_args_parse() {
        let cli = Cli::try_parse_from(["aplint", "pkg.apworld", "out"]).unwrap();
        assert_eq!(cli.archive_path, PathBuf::from("pkg.apworld"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_wrong_arg_count_is_rejected() {
        assert!(Cli::try_parse_from(["aplint"]).is_err());
        assert!(Cli::try_parse_from(["aplint", "only-one"]).is_err());
        assert!(Cli::try_parse_from(["aplint", "a", "b", "c"]).is_err());
    }
}
