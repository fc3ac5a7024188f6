//! Command-line interface for tag-checker
//! Validates the tags of paragraphs read from a file, or of the built-in samples,
//! printing one outcome line per paragraph.
//!
//! Usage:
//!   tagcheck check `<path>`  - Validate every paragraph (one per line) of a file
//!   tagcheck demo          - Validate the built-in sample paragraphs
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=tag_checker=debug`) for diagnostics on stderr.

use clap::{Arg, Command};
use std::sync::Once;
use tag_checker::checker::processor::{process_file, process_paragraphs};
use tag_checker::checker::samples::SAMPLE_PARAGRAPHS;

static TRACING_INIT: Once = Once::new();

fn main() {
    init_tracing();

    let matches = Command::new("tagcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks that the tags of a paragraph are properly nested and closed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Validate every paragraph of a file, one paragraph per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the paragraph file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("demo").about("Validate the built-in sample paragraphs"))
        .get_matches();

    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        Some(("demo", _)) => {
            handle_demo_command();
        }
        _ => unreachable!(),
    }
}

/// Installs a stderr subscriber when `RUST_LOG` is set
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let output = process_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the demo command
fn handle_demo_command() {
    print!("{}", process_paragraphs(&SAMPLE_PARAGRAPHS));
}
