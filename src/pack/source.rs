//! Pack ingestion: a directory tree or a zip archive becomes a flat list of
//! `(relative path, bytes)` pairs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use walkdir::WalkDir;
use zip::ZipArchive;

/// One file from the input pack, addressed relative to the pack root.
/// Paths use forward slashes regardless of platform or container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackFile {
    pub path: String,
    pub bytes: Vec<u8>,
}

impl PackFile {
    pub fn is_json(&self) -> bool {
        self.path
            .rsplit('.')
            .next()
            .map(|extension| extension.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }
}

/// Read a resource pack from `root`: a directory tree or a zip archive.
/// Files come back sorted by relative path so batch processing order is
/// reproducible across walk orders and archive layouts.
pub fn read_pack(root: &Path) -> Result<Vec<PackFile>> {
    let mut files = if root.is_dir() {
        read_directory(root)?
    } else if root.is_file() {
        read_zip(root)?
    } else {
        bail!("input '{}' not found", root.display());
    };
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn read_directory(root: &Path) -> Result<Vec<PackFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.with_context(|| format!("failed to walk directory '{}'", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("path escapes input root: {}", entry.path().display()))?;
        let path = normalize_path(&relative.to_string_lossy());
        let bytes = std::fs::read(entry.path())
            .with_context(|| format!("failed to read '{}'", entry.path().display()))?;
        files.push(PackFile { path, bytes });
    }
    Ok(files)
}

fn read_zip(archive_path: &Path) -> Result<Vec<PackFile>> {
    let file = File::open(archive_path)
        .with_context(|| format!("failed to open archive '{}'", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("'{}' is not a valid zip archive", archive_path.display()))?;

    let mut files = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .with_context(|| format!("failed to read archive entry {}", index))?;
        if entry.is_dir() {
            continue;
        }
        // Entries with absolute or parent-escaping names are dropped.
        let Some(enclosed) = entry.enclosed_name() else {
            continue;
        };
        let path = normalize_path(&enclosed.to_string_lossy());
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut bytes)
            .with_context(|| format!("failed to read archive entry '{}'", path))?;
        files.push(PackFile { path, bytes });
    }
    Ok(files)
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json_case_insensitive() {
        let file = |path: &str| PackFile {
            path: path.to_string(),
            bytes: Vec::new(),
        };
        assert!(file("assets/minecraft/models/item/stick.json").is_json());
        assert!(file("assets/minecraft/models/item/STICK.JSON").is_json());
        assert!(!file("assets/minecraft/textures/item/stick.png").is_json());
        assert!(!file("README").is_json());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path("assets\\minecraft\\models\\item\\stick.json"),
            "assets/minecraft/models/item/stick.json"
        );
    }
}
