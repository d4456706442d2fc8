//! Output formatting for generated documentation.
//!
//! Provides functions to format a [`Documentation`] into the project Markdown
//! document or JSON. File contents are embedded exactly as read.

use crate::{Documentation, ProjdocError};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the documentation into a string.
///
/// `pretty` only affects JSON (indented instead of compact).
pub fn format_documentation(
    doc: &Documentation,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, ProjdocError> {
    match format {
        OutputFormat::Markdown => Ok(format_markdown(doc)),
        OutputFormat::Json => format_json(doc, pretty),
    }
}

/// Writes the formatted documentation to a file, replacing any existing one.
pub fn write_documentation_to_file(
    doc: &Documentation,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), ProjdocError> {
    let content = format_documentation(doc, format, true)?;
    fs::write(&path, content).map_err(|e| ProjdocError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(doc: &Documentation) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(doc.tree.len() + doc.files.len() * 3 + 4);
    segments.push(format!("Project Path: {}\n", doc.project_name));
    segments.push("Source Tree:\n".to_string());
    segments.push("```".to_string());
    segments.extend(doc.tree.iter().cloned());
    segments.push("```\n".to_string());

    for file in &doc.files {
        segments.push(format!("`{}`:\n", file.label));
        segments.push(file.content.clone());
        segments.push("\n".to_string());
    }
    segments.join("\n")
}

fn format_json(doc: &Documentation, pretty: bool) -> Result<String, ProjdocError> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}
