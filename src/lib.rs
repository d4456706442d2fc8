//! # Projdoc
//!
//! `projdoc` turns a project directory into a single Markdown document: an ASCII
//! tree of the directory structure followed by the contents of every file, so a
//! whole code base can be shared as one text artifact.
//!
//! Entries are skipped according to an [`IgnoreRules`] set (build output, VCS
//! metadata, caches, logs, lock files and the like). Files with a recognized
//! extension are wrapped in a fenced code block tagged with their [`Language`].
//!
//! The `projdoc` binary always writes Markdown; JSON output
//! ([`output::OutputFormat::Json`]) is available to library callers only.
//!
//! # Example
//!
//! ```no_run
//! use projdoc::{ProjdocBuilder, generate, output};
//!
//! let options = ProjdocBuilder::new("my-project").build();
//! let doc = generate(&options).expect("Failed to scan directory");
//!
//! println!("{}", doc.tree.join("\n"));
//! output::write_documentation_to_file(&doc, output::OutputFormat::Markdown, "docs.md")
//!     .expect("Failed to write document");
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod reader;
mod tree;
mod types;

pub use engine::{generate, generate_documentation};
pub use error::ProjdocError;
pub use filter::Filter;
pub use options::{IgnoreRules, OUTPUT_FILE_NAME, ProjdocBuilder, ProjdocOptions};
pub use reader::{Language, read_file_content};
pub use types::{Documentation, FileEntry};
