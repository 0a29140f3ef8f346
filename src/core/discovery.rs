use crate::domain::ports::Storage;
use crate::utils::error::{MergeError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static NUMBERED_MODULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\d{2})-.*\.json$").expect("module pattern is valid"));

/// Naming rule deciding which files in the input directory are modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentFilter {
    /// `NN-*.json` with `NN` between `01` and `slots`.
    NumberedPrefix { slots: u32 },
    /// Any `*.json` that is not a dotfile.
    AnyJson,
}

impl FragmentFilter {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            FragmentFilter::NumberedPrefix { slots } => NUMBERED_MODULE
                .captures(file_name)
                .and_then(|caps| caps[1].parse::<u32>().ok())
                .is_some_and(|slot| slot >= 1 && slot <= *slots),
            FragmentFilter::AnyJson => {
                file_name.ends_with(".json") && !file_name.starts_with('.')
            }
        }
    }
}

/// Lists module files in `dir` accepted by `filter`, sorted by file name.
pub fn discover_fragments<S: Storage>(
    storage: &S,
    dir: &Path,
    filter: FragmentFilter,
) -> Result<Vec<PathBuf>> {
    if !storage.is_dir(dir) {
        return Err(MergeError::MissingInputDirectory {
            path: dir.display().to_string(),
        });
    }

    let mut names: Vec<String> = storage
        .list_files(dir)?
        .into_iter()
        .filter(|name| {
            let accepted = filter.matches(name);
            if !accepted {
                tracing::debug!("Ignoring {} (does not match module naming)", name);
            }
            accepted
        })
        .collect();

    // 數字前綴讓字典序等於模組順序
    names.sort();

    if names.is_empty() {
        return Err(MergeError::NoFragmentsFound {
            path: dir.display().to_string(),
        });
    }

    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}
