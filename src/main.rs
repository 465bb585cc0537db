//! Aplint CLI binary entry point.
//! Parses the two positional arguments, runs the audit, prints a summary.

use aplint::{archive, cli::Cli, output};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // The audit surface takes exactly two positional arguments; anything
    // else prints usage and exits with status 1. Clap's own exit code for
    // usage errors is 2, so parse fallibly and exit explicitly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging();

    match archive::lint_archive(&cli.archive_path, &cli.output_dir) {
        Ok((out_path, report)) => {
            output::print_report(&report);
            println!("report written: {}", out_path.display());
        }
        Err(e) => {
            eprintln!("{} {}", output::error_prefix(), e);
            std::process::exit(1);
        }
    }
}

/// Tracing to stderr, controlled by `RUST_LOG` (e.g. `RUST_LOG=aplint=debug`
/// to see raw external-scanner findings before severity mapping).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
