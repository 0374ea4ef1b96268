//! Status calls against the real filesystem.

use std::{
    fs::{self, File},
    path::Path,
};

use log::{debug, warn};

use crate::{
    config::TranslateOptions,
    entry::DirEntry,
    error::StatError,
    translate::{build_entry_with, is_symbolic_link},
};

pub type Result<T> = std::result::Result<T, StatError>;

/// Status of `path`, following a trailing symlink.
///
/// A link whose target cannot be resolved is reported as the link itself,
/// with `followed_symlink` unset.
pub fn stat(path: impl AsRef<Path>) -> Result<DirEntry> {
    stat_with(path, &TranslateOptions::default())
}

pub fn stat_with(path: impl AsRef<Path>, opts: &TranslateOptions) -> Result<DirEntry> {
    let path = path.as_ref();
    let lmeta = fs::symlink_metadata(path).map_err(|e| StatError::new("stat", path, e))?;
    let name = path.to_string_lossy();

    if !is_symbolic_link(&lmeta) {
        return Ok(build_entry_with(&name, &lmeta, &lmeta, opts));
    }

    match fs::metadata(path) {
        Ok(meta) => {
            debug!("[stat] {:?}: followed symlink", path);
            Ok(build_entry_with(&name, &lmeta, &meta, opts))
        }
        Err(e) => {
            warn!("[stat] {:?}: cannot follow symlink: {e}", path);
            Ok(build_entry_with(&name, &lmeta, &lmeta, opts))
        }
    }
}

/// Status of `path` itself; a trailing symlink is not followed.
pub fn lstat(path: impl AsRef<Path>) -> Result<DirEntry> {
    lstat_with(path, &TranslateOptions::default())
}

pub fn lstat_with(path: impl AsRef<Path>, opts: &TranslateOptions) -> Result<DirEntry> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path).map_err(|e| StatError::new("lstat", path, e))?;
    Ok(build_entry_with(&path.to_string_lossy(), &meta, &meta, opts))
}

/// Status of an open file. `name` is the path it was opened by and only
/// feeds the entry's name.
pub fn fstat(file: &File, name: &str) -> Result<DirEntry> {
    fstat_with(file, name, &TranslateOptions::default())
}

pub fn fstat_with(file: &File, name: &str, opts: &TranslateOptions) -> Result<DirEntry> {
    let meta = file.metadata().map_err(|e| StatError::new("fstat", name, e))?;
    Ok(build_entry_with(name, &meta, &meta, opts))
}

#[cfg(test)]
#[path = "os_tests.rs"]
mod tests;
