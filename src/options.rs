use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the document the CLI writes into the current directory.
pub const OUTPUT_FILE_NAME: &str = "project_documentation.md";

const DEFAULT_IGNORE: &[&str] = &[
    // directories
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "__pycache__",
    ".pytest_cache",
    ".vscode",
    // files
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "*.so",
    "*.dylib",
    "*.dll",
    "*.log",
    ".DS_Store",
    ".env",
    "*.lock",
];

/// The set of names and glob patterns excluded from the document.
///
/// Entries containing a `*` are treated as glob patterns matched against a
/// file's base name; every other entry is an exact directory or file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreRules {
    entries: Vec<String>,
}
impl IgnoreRules {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
    /// Exact names: every entry without a wildcard.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(|e| !is_pattern(e))
    }
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str).filter(|e| is_pattern(e))
    }
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }
}
impl Default for IgnoreRules {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE.iter().copied())
    }
}
fn is_pattern(entry: &str) -> bool {
    entry.contains('*')
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjdocOptions {
    pub root: PathBuf,
    pub ignore_rules: IgnoreRules,
}
impl Default for ProjdocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_rules: IgnoreRules::default(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ProjdocBuilder {
    options: ProjdocOptions,
}
impl ProjdocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ProjdocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_rules(mut self, rules: IgnoreRules) -> Self {
        self.options.ignore_rules = rules;
        self
    }
    pub fn build(self) -> ProjdocOptions {
        self.options
    }
}
