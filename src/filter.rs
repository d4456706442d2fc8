//! The ignore predicate shared by the tree pass and the content walk.

use crate::error::ProjdocError;
use crate::options::IgnoreRules;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Decides whether a path is left out of the document.
///
/// Built once per run from an [`IgnoreRules`] value; the wildcard entries are
/// compiled into a [`GlobSet`] and matched against base names only.
#[derive(Debug, Clone)]
pub struct Filter {
    rules: IgnoreRules,
    patterns: GlobSet,
}

impl Filter {
    /// Compiles the rule set.
    ///
    /// # Errors
    ///
    /// Returns [`ProjdocError::Pattern`] if a wildcard entry is not a valid glob.
    pub fn new(rules: IgnoreRules) -> Result<Self, ProjdocError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in rules.patterns() {
            let glob = Glob::new(pattern)
                .map_err(|e| ProjdocError::Pattern(format!("'{}': {}", pattern, e)))?;
            builder.add(glob);
        }
        let patterns = builder
            .build()
            .map_err(|e| ProjdocError::Pattern(format!("failed to build glob set: {}", e)))?;
        Ok(Self { rules, patterns })
    }

    /// Returns `true` when `path` must not appear in the output.
    ///
    /// Every directory between `root` and `path` is checked, so an ignored
    /// directory hides its whole subtree. The entry's own name is then matched
    /// exactly; files are additionally matched against the glob patterns.
    pub fn is_ignored(&self, root: &Path, path: &Path, is_dir: bool) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        if let Some(parent) = relative.parent() {
            let hidden_by_ancestor = parent
                .ancestors()
                .filter_map(Path::file_name)
                .any(|name| self.rules.contains(&name.to_string_lossy()));
            if hidden_by_ancestor {
                return true;
            }
        }
        let Some(name) = relative.file_name() else {
            return false;
        };
        if self.rules.contains(&name.to_string_lossy()) {
            return true;
        }
        !is_dir && self.patterns.is_match(Path::new(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> Filter {
        Filter::new(IgnoreRules::default()).unwrap()
    }

    #[test]
    fn ignores_files_under_ignored_directories_at_any_depth() {
        let f = filter();
        let root = Path::new("/proj");
        assert!(f.is_ignored(root, Path::new("/proj/node_modules/c.js"), false));
        assert!(f.is_ignored(root, Path::new("/proj/src/build/deep/x.rs"), false));
        assert!(f.is_ignored(root, Path::new("/proj/.git/objects"), true));
        assert!(!f.is_ignored(root, Path::new("/proj/src/builder.rs"), false));
    }

    #[test]
    fn ignores_directory_by_own_name() {
        let f = filter();
        let root = Path::new("/proj");
        assert!(f.is_ignored(root, Path::new("/proj/node_modules"), true));
        assert!(f.is_ignored(root, Path::new("/proj/__pycache__"), true));
        assert!(!f.is_ignored(root, Path::new("/proj/src"), true));
    }

    #[test]
    fn ignores_files_by_exact_name_and_glob() {
        let f = filter();
        let root = Path::new("/proj");
        assert!(f.is_ignored(root, Path::new("/proj/.env"), false));
        assert!(f.is_ignored(root, Path::new("/proj/.DS_Store"), false));
        assert!(f.is_ignored(root, Path::new("/proj/b.log"), false));
        assert!(f.is_ignored(root, Path::new("/proj/pkg/mod.pyc"), false));
        assert!(f.is_ignored(root, Path::new("/proj/Cargo.lock"), false));
        assert!(!f.is_ignored(root, Path::new("/proj/a.py"), false));
        assert!(!f.is_ignored(root, Path::new("/proj/.envrc"), false));
        assert!(!f.is_ignored(root, Path::new("/proj/log.txt"), false));
    }

    #[test]
    fn globs_only_apply_to_files() {
        let f = filter();
        let root = Path::new("/proj");
        assert!(!f.is_ignored(root, Path::new("/proj/archive.log"), true));
    }

    #[test]
    fn ancestors_above_the_root_are_not_consulted() {
        let f = filter();
        let root = Path::new("/home/me/build/proj");
        assert!(!f.is_ignored(root, Path::new("/home/me/build/proj/a.py"), false));
        assert!(!f.is_ignored(root, root, true));
    }

    #[test]
    fn custom_rules_replace_defaults() {
        let f = Filter::new(IgnoreRules::new(["target", "*.tmp"])).unwrap();
        let root = Path::new("r");
        assert!(f.is_ignored(root, Path::new("r/target/debug/app"), false));
        assert!(f.is_ignored(root, Path::new("r/x.tmp"), false));
        assert!(!f.is_ignored(root, Path::new("r/node_modules/c.js"), false));
    }

    #[test]
    fn invalid_glob_is_reported() {
        let err = Filter::new(IgnoreRules::new(["*[.log"])).unwrap_err();
        assert!(matches!(err, ProjdocError::Pattern(_)));
    }
}
