// open-docs - core/path.rs
//
// Absolute path resolution. Lexical only: `.` and `..` are folded without
// touching the filesystem, so a missing target still resolves to the path
// that is reported back to the operator.

use std::path::{Component, Path, PathBuf};

use crate::util::error::{LaunchError, Result};

/// Resolve `path` against the current working directory.
pub fn resolve(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    let cwd = std::env::current_dir().map_err(|source| LaunchError::Io {
        path: path.to_path_buf(),
        operation: "resolving the current directory",
        source,
    })?;
    Ok(resolve_against(&cwd, path))
}

/// Resolve `path` against `base`, which must be absolute.
fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Fold `.` and `..` components. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if !at_root {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
