use crate::errors::CatError;
use crate::ignore::IgnoreRules;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs as async_fs;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Strips a leading `./` and converts separators to `/`.
pub fn normalize_path(path: &str) -> String {
    let path = Path::new(path);
    let normalized_path = match path.strip_prefix("./") {
        Ok(stripped) if !stripped.as_os_str().is_empty() => stripped,
        _ => path,
    };

    normalized_path.to_string_lossy().replace('\\', "/")
}

/// Expands patterns into existing files, in first-seen order and without
/// duplicates. Directories expand to every file beneath them.
pub fn expand_patterns(patterns: &[String], ignore: &IgnoreRules) -> Result<Vec<String>, CatError> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |file: String| {
        if seen.insert(file.clone()) {
            files.push(file);
        } else {
            trace!("Skipping duplicate match: {}", file);
        }
    };

    for pattern in patterns {
        let normalized_pattern = normalize_path(pattern);
        let path = Path::new(&normalized_pattern);

        if path.is_dir() {
            debug!("Walking directory: {}", normalized_pattern);
            let walker = WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| {
                    e.depth() == 0 || !ignore.should_ignore(e.path(), e.file_type().is_dir())
                });
            for entry in walker {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        push(normalize_path(&entry.path().to_string_lossy()))
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Error walking {}: {}", pattern, e),
                }
            }
        } else {
            debug!("Expanding glob: {}", normalized_pattern);
            let entries = glob::glob(&normalized_pattern)
                .map_err(|e| CatError::Pattern(format!("'{}': {}", pattern, e)))?;
            for entry in entries {
                match entry {
                    Ok(path) if path.is_file() => {
                        if ignore.should_ignore(&path, false) {
                            trace!("Ignoring {:?}", path);
                        } else {
                            push(normalize_path(&path.to_string_lossy()));
                        }
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Error processing pattern {}: {}", pattern, e),
                }
            }
        }
    }

    debug!("Patterns matched {} files", files.len());
    Ok(files)
}

pub async fn read_file_content(file_path: &str) -> Result<String, CatError> {
    async_fs::read_to_string(file_path)
        .await
        .map_err(|err| CatError::FileReadError {
            path: file_path.to_owned(),
            reason: err.to_string(),
        })
}
