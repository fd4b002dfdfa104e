//! Pack output: materialize `(relative path, bytes)` pairs into a directory
//! tree or a freshly created zip archive.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Write the converted pack to `dest`. A `.zip` extension selects archive
/// output, anything else a directory tree.
pub fn write_pack(outputs: &[(String, Vec<u8>)], dest: &Path) -> Result<()> {
    if is_zip_destination(dest) {
        write_zip(outputs, dest)
    } else {
        write_directory(outputs, dest)
    }
}

fn is_zip_destination(dest: &Path) -> bool {
    dest.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

fn write_directory(outputs: &[(String, Vec<u8>)], root: &Path) -> Result<()> {
    for (path, bytes) in outputs {
        let target = root.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
        }
        std::fs::write(&target, bytes)
            .with_context(|| format!("failed to write '{}'", target.display()))?;
    }
    Ok(())
}

fn write_zip(outputs: &[(String, Vec<u8>)], archive_path: &Path) -> Result<()> {
    let file = std::fs::File::create(archive_path)
        .with_context(|| format!("failed to create zip file: {}", archive_path.display()))?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (path, bytes) in outputs {
        zip.start_file(path.as_str(), options)
            .with_context(|| format!("failed to add '{}' to zip", path))?;
        zip.write_all(bytes)
            .with_context(|| format!("failed to write '{}' into zip", path))?;
    }

    zip.finish().context("failed to finalize zip file")?;
    Ok(())
}
