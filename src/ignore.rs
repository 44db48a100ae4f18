use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::Match;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Rules applied below every `.gitignore`.
pub const ALWAYS_IGNORED: &[&str] = &[".git/"];

/// Version-control ignore rules of the working tree rooted at `root`.
///
/// Every `.gitignore` between the root and a candidate's parent applies, the
/// deepest one deciding first, then `.git/info/exclude`. Per-directory
/// matchers are loaded on first use.
pub struct IgnoreRules {
    root: PathBuf,
    base: Gitignore,
    nested: RefCell<HashMap<PathBuf, Gitignore>>,
}

impl IgnoreRules {
    pub fn from_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let mut builder = GitignoreBuilder::new(&root);

        let exclude = root.join(".git").join("info").join("exclude");
        if exclude.is_file() {
            debug!("Loading ignore rules from {:?}", exclude);
            if let Some(e) = builder.add(&exclude) {
                warn!("Invalid rule in {}: {}", exclude.display(), e);
            }
        }

        for line in ALWAYS_IGNORED {
            if let Err(e) = builder.add_line(None, line) {
                warn!("Invalid ignore pattern '{}': {}", line, e);
            }
        }

        let base = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build ignore rules for {}: {}", root.display(), e);
            Gitignore::empty()
        });

        IgnoreRules {
            root,
            base,
            nested: RefCell::new(HashMap::new()),
        }
    }

    /// True when the path or any directory above it is excluded. Paths
    /// outside the root are never ignored.
    pub fn should_ignore<P: AsRef<Path>>(&self, path: P, is_dir: bool) -> bool {
        let relative = match self.relative(path.as_ref()) {
            Some(relative) => relative,
            None => return false,
        };

        let components: Vec<_> = relative.components().collect();
        let mut current = PathBuf::new();
        for (i, component) in components.iter().enumerate() {
            current.push(component);
            let component_is_dir = i + 1 < components.len() || is_dir;
            if self.is_excluded(&current, component_is_dir) {
                return true;
            }
        }
        false
    }

    fn relative(&self, path: &Path) -> Option<PathBuf> {
        let relative = if path.is_absolute() {
            path.strip_prefix(&self.root).ok()?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => normalized.push(name),
                Component::CurDir => {}
                _ => return None,
            }
        }

        if normalized.as_os_str().is_empty() {
            None
        } else {
            Some(normalized)
        }
    }

    fn is_excluded(&self, relative: &Path, is_dir: bool) -> bool {
        for dir in relative.ancestors().skip(1) {
            let sub_path = relative.strip_prefix(dir).unwrap_or(relative);
            let mut nested = self.nested.borrow_mut();
            let matcher = nested
                .entry(dir.to_path_buf())
                .or_insert_with(|| self.load_gitignore(dir));
            match matcher.matched(sub_path, is_dir) {
                Match::Ignore(_) => return true,
                Match::Whitelist(_) => return false,
                Match::None => {}
            }
        }

        self.base.matched(relative, is_dir).is_ignore()
    }

    fn load_gitignore(&self, dir: &Path) -> Gitignore {
        let dir = self.root.join(dir);
        let gitignore = dir.join(".gitignore");
        if !gitignore.is_file() {
            return Gitignore::empty();
        }

        debug!("Loading ignore rules from {:?}", gitignore);
        let mut builder = GitignoreBuilder::new(&dir);
        if let Some(e) = builder.add(&gitignore) {
            warn!("Invalid rule in {}: {}", gitignore.display(), e);
        }
        builder.build().unwrap_or_else(|e| {
            warn!("Failed to build ignore rules for {}: {}", dir.display(), e);
            Gitignore::empty()
        })
    }
}
