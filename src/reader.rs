//! Reading file contents for the dump section.

use std::fs;
use std::path::Path;

/// Source languages that get a fenced code block in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TypeScript,
    JavaScript,
    Json,
    Python,
    Markdown,
}

impl Language {
    /// Looks up a file extension (without the dot). Unlisted extensions get no fence.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" => Some(Language::TypeScript),
            "js" => Some(Language::JavaScript),
            "json" => Some(Language::Json),
            "py" => Some(Language::Python),
            "md" => Some(Language::Markdown),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// The info string written after the opening fence.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Json => "json",
            Language::Python => "python",
            Language::Markdown => "markdown",
        }
    }
}

/// Returns the text embedded in the document for `path`.
///
/// The file is read whole as UTF-8. Recognized languages are wrapped in a
/// fenced block; anything else is returned as-is. A failed read yields an
/// `Error reading file: ...` placeholder instead of an error so one bad file
/// does not stop the run.
pub fn read_file_content(path: &Path) -> String {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            return format!("Error reading file: {}", e);
        }
    };
    match Language::from_path(path) {
        Some(lang) => format!("```{}\n{}\n```", lang.tag(), content),
        None => content,
    }
}
