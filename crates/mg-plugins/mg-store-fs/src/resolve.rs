//! Path resolution for user-supplied store-relative paths.
//!
//! Every operation that touches the filesystem funnels its path parameter
//! through [`resolve`], which joins it onto a root directory and checks that
//! the target exists with the expected file type. Relative paths that could
//! escape or alias the root (`..`, `.`, absolute paths) are rejected before
//! the filesystem is consulted, so the rest of the crate can treat a
//! resolved path as safe to read, copy, or move.

use mg_core::error::{AppError, Result};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// What the resolved path must point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Directory,
    File,
}

impl Expect {
    fn label(self) -> &'static str {
        match self {
            Expect::Directory => "directory",
            Expect::File => "file",
        }
    }
}

/// Joins `rel_path` onto `root` and validates the result.
pub async fn resolve(root: &Path, rel_path: &str, expect: Expect) -> Result<PathBuf> {
    let not_found = || AppError::NotFound(expect.label(), rel_path.to_string());

    // Only plain name segments may pass.
    let contained = !rel_path.is_empty()
        && Path::new(rel_path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if !contained {
        return Err(not_found());
    }

    let abs = root.join(rel_path);
    let metadata = match fs::metadata(&abs).await {
        Ok(md) => md,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(not_found()),
        Err(err) => return Err(err.into()),
    };

    let type_ok = match expect {
        Expect::Directory => metadata.is_dir(),
        Expect::File => metadata.is_file(),
    };
    if !type_ok {
        return Err(not_found());
    }

    Ok(abs)
}
