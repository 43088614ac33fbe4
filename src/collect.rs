use crate::error::{GifweaveError, Result};
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// File name suffixes accepted as frames. Matching is case-sensitive.
pub const SUPPORTED_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Matches on the raw name bytes, so names that are not valid UTF-8 still qualify.
pub fn is_supported(file_name: &OsStr) -> bool {
    let name = file_name.as_encoded_bytes();
    SUPPORTED_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix.as_bytes()))
}

/// Recursively collects supported image files below `dir`.
///
/// Each directory is listed sorted by file name, files and subdirectories
/// interleaved. Symlinks are never descended into.
pub fn collect_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_into(dir, &mut found)?;
    Ok(found)
}

/// Collects every root in argument order, appending each root's files.
pub fn collect_all<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for root in roots {
        let root = root.as_ref();
        let images = collect_images(root)?;
        log::info!("Found {} image(s) under {:?}", images.len(), root);
        found.extend(images);
    }
    Ok(found)
}

fn collect_into(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let collect_err = |source| GifweaveError::Collect {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(collect_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(collect_err)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();

        if entry.file_type().map_err(collect_err)?.is_dir() {
            collect_into(&path, found)?;
        } else if is_supported(&entry.file_name()) {
            log::debug!("Collected {path:?}");
            found.push(path);
        }
    }
    Ok(())
}
