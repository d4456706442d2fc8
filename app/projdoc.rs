//! Command-line interface for projdoc.
//!
//! Walks the given directory and writes `project_documentation.md` into the
//! current directory.

use clap::Parser;
use clap::error::ErrorKind;
use projdoc::output::{OutputFormat, write_documentation_to_file};
use projdoc::{OUTPUT_FILE_NAME, ProjdocBuilder, ProjdocError, generate};
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// projdoc — export a project's source tree and files as one Markdown document
#[derive(Parser)]
#[command(name = "projdoc", version, about, long_about = None)]
struct Cli {
    /// Directory to document
    directory_path: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            exit(0);
        }
        Err(_) => {
            println!("Usage: projdoc <directory_path>");
            exit(1);
        }
    }
}

fn main() {
    let cli = parse_args();
    init_logging();

    let options = ProjdocBuilder::new(cli.directory_path).build();
    let doc = match generate(&options) {
        Ok(doc) => doc,
        Err(e @ ProjdocError::RootNotFound(_)) => {
            println!("Error: {}", e);
            exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if let Err(e) = write_documentation_to_file(&doc, OutputFormat::Markdown, OUTPUT_FILE_NAME) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    println!("Documentation generated successfully in {}", OUTPUT_FILE_NAME);
}
