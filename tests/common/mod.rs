//! Shared test utilities and fixture builders

use std::io::Write;
use std::path::PathBuf;

use serde_json::json;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// The stick model from the README example: two cat hat overrides on top of
/// a plain stick.
pub fn stick_legacy_json() -> String {
    json!({
        "parent": "item/handheld",
        "textures": { "layer0": "item/stick" },
        "overrides": [
            {
                "predicate": { "custom_model_data": 19002 },
                "model": "custom_items/cat_hat/cat_hat_black"
            },
            {
                "predicate": { "custom_model_data": 19003 },
                "model": "custom_items/cat_hat/cat_hat_british_shorthair"
            }
        ]
    })
    .to_string()
}

/// Build a legacy document with a `layer0` fallback and `(threshold, model)`
/// overrides.
pub fn legacy_model(fallback: &str, overrides: &[(u32, &str)]) -> String {
    let overrides: Vec<_> = overrides
        .iter()
        .map(|(threshold, model)| {
            json!({
                "predicate": { "custom_model_data": threshold },
                "model": model
            })
        })
        .collect();
    json!({
        "textures": { "layer0": fallback },
        "overrides": overrides
    })
    .to_string()
}

/// An already-converted (1.21.4+) document.
pub fn new_format_json() -> String {
    json!({
        "model": { "type": "model", "model": "stick" }
    })
    .to_string()
}

/// Materialize `(relative path, bytes)` pairs as a directory tree inside a
/// fresh temp dir. The returned guard keeps the tree alive.
pub fn write_pack_dir(files: &[(&str, &[u8])]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (path, bytes) in files {
        let target = temp_dir.path().join(path);
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::write(&target, bytes).unwrap();
    }
    temp_dir
}

/// Materialize `(relative path, bytes)` pairs as a zip archive inside a
/// fresh temp dir.
pub fn write_pack_zip(files: &[(&str, &[u8])]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("pack.zip");

    let file = std::fs::File::create(&archive_path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for (path, bytes) in files {
        zip.start_file(*path, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();

    (temp_dir, archive_path)
}
