//! Internal module for rendering the source tree outline.

use crate::error::ProjdocError;
use crate::filter::Filter;
use std::fs;
use std::path::{Path, PathBuf};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders the directory structure under `root`, one line per entry.
///
/// Each directory is listed one level at a time, filtered, and sorted by
/// name with files and directories interleaved. The output is similar to
/// the `tree` command without the root line.
///
/// # Errors
///
/// Returns [`ProjdocError::Io`] if any directory cannot be listed.
pub(crate) fn render_tree(root: &Path, filter: &Filter) -> Result<Vec<String>, ProjdocError> {
    let mut lines = Vec::new();
    render_level(root, root, filter, "", &mut lines)?;
    Ok(lines)
}

fn render_level(
    root: &Path,
    dir: &Path,
    filter: &Filter,
    prefix: &str,
    lines: &mut Vec<String>,
) -> Result<(), ProjdocError> {
    let children = list_children(root, dir, filter)?;
    let count = children.len();
    for (i, (path, is_dir)) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, branch, name));
        if is_dir {
            let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            render_level(root, &path, filter, &child_prefix, lines)?;
        }
    }
    Ok(())
}

fn list_children(
    root: &Path,
    dir: &Path,
    filter: &Filter,
) -> Result<Vec<(PathBuf, bool)>, ProjdocError> {
    let entries = fs::read_dir(dir).map_err(|e| ProjdocError::io(dir, e))?;
    let mut children = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ProjdocError::io(dir, e))?.path();
        // follows symlinks, so a linked directory is descended into
        let is_dir = path.is_dir();
        if filter.is_ignored(root, &path, is_dir) {
            tracing::trace!("Pruned from tree: {}", path.display());
            continue;
        }
        children.push((path, is_dir));
    }
    children.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(children)
}
