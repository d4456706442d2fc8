use crate::error::ProjdocError;
use crate::filter::Filter;
use crate::options::ProjdocOptions;
use crate::output::{OutputFormat, format_documentation};
use crate::reader::read_file_content;
use crate::tree::render_tree;
use crate::types::{Documentation, FileEntry};
use ignore::WalkBuilder;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, filter: &Filter) -> Self {
        let mut builder = WalkBuilder::new(root);
        // only the project's own rule set decides what is skipped
        builder.standard_filters(false).follow_links(true);
        let filter = filter.clone();
        let filter_root = root.to_path_buf();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !filter.is_ignored(&filter_root, entry.path(), is_dir)
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_files(self) -> impl Iterator<Item = Result<PathBuf, ProjdocError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.file_type().is_some_and(|t| t.is_file()) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            // a symlink whose target is gone has no content to dump
            Err(e) if e.io_error().is_some_and(|io| io.kind() == ErrorKind::NotFound) => {
                tracing::warn!("Skipping unresolvable entry: {}", e);
                None
            }
            Err(e) => Some(Err(ProjdocError::Walk(e.to_string()))),
        })
    }
}
/// Strips trailing separators and `.` segments so labels read `root/file`.
fn normalize_root(root: &Path) -> PathBuf {
    let components: Vec<Component> = root.components().collect();
    let components = match components.as_slice() {
        [Component::CurDir, rest @ ..] if !rest.is_empty() => rest,
        all => all,
    };
    let normalized: PathBuf = components.iter().collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
fn project_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    fs::canonicalize(root)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.display().to_string())
}
fn file_label(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    format!("{}/{}", root.display(), relative.display())
}
/// Collects the tree and file contents for the directory in `options.root`.
///
/// # Errors
///
/// Fails with [`ProjdocError::RootNotFound`] when the root does not exist, and
/// propagates any error listing or walking a directory. Unreadable files are
/// not errors; their content is replaced by a placeholder.
pub fn generate(options: &ProjdocOptions) -> Result<Documentation, ProjdocError> {
    tracing::debug!("Generating documentation for {}", options.root.display());
    if !options.root.exists() {
        return Err(ProjdocError::RootNotFound(options.root.clone()));
    }
    if !options.root.is_dir() {
        return Err(ProjdocError::NotADirectory(options.root.clone()));
    }
    let root = normalize_root(&options.root);
    let filter = Filter::new(options.ignore_rules.clone())?;
    let tree = render_tree(&root, &filter)?;
    let mut files = Vec::new();
    for path in Walker::new(&root, &filter).into_files() {
        let path = path?;
        let label = file_label(&root, &path);
        let content = read_file_content(&path);
        files.push(FileEntry {
            path,
            label,
            content,
        });
    }
    tracing::debug!(
        "Collected {} tree entries and {} files",
        tree.len(),
        files.len()
    );
    Ok(Documentation {
        project_name: project_name(&root),
        root,
        tree,
        files,
    })
}
/// Generates the Markdown document for `options.root` in one call.
pub fn generate_documentation(options: &ProjdocOptions) -> Result<String, ProjdocError> {
    let doc = generate(options)?;
    format_documentation(&doc, OutputFormat::Markdown, false)
}
