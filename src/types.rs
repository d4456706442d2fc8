use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One file in the content dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// The label shown above the content: `<root>/<relative path>`.
    pub label: String,
    /// The text embedded in the document.
    ///
    /// Fenced when the extension is recognized, or an `Error reading file: ...`
    /// placeholder when the file could not be read as text.
    pub content: String,
}

/// Everything needed to render the project document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Documentation {
    /// Base name of the root directory.
    pub project_name: String,
    /// The root as given by the caller, used as the prefix of file labels.
    pub root: PathBuf,
    /// Source tree lines, in sorted order.
    pub tree: Vec<String>,
    /// Dumped files, in walk order.
    pub files: Vec<FileEntry>,
}
