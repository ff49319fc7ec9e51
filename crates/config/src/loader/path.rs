//! Path safety for documents the tool reads and writes.
//!
//! A path is accepted when it is relative and, after lexical cleaning, is either
//! a bare file name or sits directly inside the one permitted directory.

use std::path::{Component, Path, PathBuf};

use crate::constants::CONFIG_DIR_ALLOWED;
use crate::loader::error::ConfigError;

/// Check a relative path against the directory allow-list and return it cleaned.
///
/// `./a/../config.yml` cleans to `config.yml`; anything that still climbs out
/// of the working directory, or lands in a directory other than
/// `allowed_dir`, is rejected.
pub fn check_relative_path(path: &Path, allowed_dir: &str) -> Result<PathBuf, ConfigError> {
    if path.has_root() || path.is_absolute() {
        return Err(ConfigError::AbsolutePath {
            path: path.to_path_buf(),
        });
    }

    let cleaned = clean(path)?;
    let Some(file_name) = cleaned.last() else {
        return Err(ConfigError::EmptyPath);
    };

    let parent = &cleaned[..cleaned.len() - 1];
    let allowed = match parent {
        [] => true,
        [dir] => dir == allowed_dir,
        _ => false,
    };
    if !allowed || file_name == ".." {
        return Err(ConfigError::PathTraversal {
            path: cleaned.iter().collect(),
        });
    }

    Ok(cleaned.iter().collect())
}

/// Validate the configuration document path; the file must exist.
pub fn validate_config_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let cleaned = check_relative_path(path, CONFIG_DIR_ALLOWED)?;
    if !cleaned.exists() {
        return Err(ConfigError::NotFound { path: cleaned });
    }
    Ok(cleaned)
}

fn clean(path: &Path) -> Result<Vec<String>, ConfigError> {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.last().is_some_and(|last| last != "..") {
                    parts.pop();
                } else {
                    parts.push("..".to_string());
                }
            }
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::RootDir | Component::Prefix(_) => {
                return Err(ConfigError::AbsolutePath {
                    path: path.to_path_buf(),
                });
            }
        }
    }
    Ok(parts)
}
