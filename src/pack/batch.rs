//! Parallel batch driver.
//!
//! Each document converts independently, so the batch fans out across
//! worker threads with no coordination. Results are merged back by a single
//! owner in input order, which keeps the later-write-wins rule for
//! duplicate output paths deterministic.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::convert::{convert_document, ConversionMode, DocumentStatus, SkippedEntry};
use crate::pack::source::PackFile;

/// File kind shown in the processing report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Json,
    Other,
}

/// Per-file outcome shown in the processing report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Converted,
    Copied,
    Failed,
}

/// One row of the processing report.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: String,
    pub kind: FileKind,
    pub status: RecordStatus,
    /// Failure reason for `Failed` records.
    pub detail: Option<String>,
}

/// Everything a batch produced: the output tree plus the report records.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Merged `(relative path, bytes)` pairs, duplicates already resolved.
    pub outputs: Vec<(String, Vec<u8>)>,
    pub records: Vec<FileRecord>,
    /// Per-override skips, attributed to their source file.
    pub skipped_entries: Vec<(String, SkippedEntry)>,
}

impl BatchOutcome {
    pub fn converted(&self) -> usize {
        self.count(RecordStatus::Converted)
    }

    pub fn copied(&self) -> usize {
        self.count(RecordStatus::Copied)
    }

    pub fn failed(&self) -> usize {
        self.count(RecordStatus::Failed)
    }

    fn count(&self, status: RecordStatus) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == status)
            .count()
    }
}

struct ProcessedFile {
    record: FileRecord,
    outputs: Vec<(String, Vec<u8>)>,
    skipped: Vec<SkippedEntry>,
}

/// Convert every file of a pack.
///
/// `on_done` is called once per completed file from worker threads; it must
/// not block. A failed file produces no output but never aborts the batch.
pub fn convert_pack<F>(files: &[PackFile], mode: ConversionMode, on_done: F) -> BatchOutcome
where
    F: Fn(&str) + Sync,
{
    let processed: Vec<ProcessedFile> = files
        .par_iter()
        .map(|file| {
            let result = process_file(file, mode);
            on_done(&file.path);
            result
        })
        .collect();

    // Single-owner merge, in input order. A later write to an already-seen
    // path replaces the earlier bytes in place.
    let mut outcome = BatchOutcome::default();
    let mut index_by_path: HashMap<String, usize> = HashMap::new();
    for file in processed {
        for (path, bytes) in file.outputs {
            match index_by_path.get(&path) {
                Some(&index) => outcome.outputs[index].1 = bytes,
                None => {
                    index_by_path.insert(path.clone(), outcome.outputs.len());
                    outcome.outputs.push((path, bytes));
                }
            }
        }
        for skipped in file.skipped {
            outcome
                .skipped_entries
                .push((file.record.path.clone(), skipped));
        }
        outcome.records.push(file.record);
    }
    outcome
}

fn process_file(file: &PackFile, mode: ConversionMode) -> ProcessedFile {
    // Non-JSON files are never inspected.
    if !file.is_json() {
        return ProcessedFile {
            record: FileRecord {
                path: file.path.clone(),
                kind: FileKind::Other,
                status: RecordStatus::Copied,
                detail: None,
            },
            outputs: vec![(file.path.clone(), file.bytes.clone())],
            skipped: Vec::new(),
        };
    }

    match convert_document(mode, &file.path, &file.bytes) {
        Ok(result) => ProcessedFile {
            record: FileRecord {
                path: file.path.clone(),
                kind: FileKind::Json,
                status: match result.status {
                    DocumentStatus::Converted => RecordStatus::Converted,
                    DocumentStatus::Copied => RecordStatus::Copied,
                },
                detail: None,
            },
            outputs: result
                .outputs
                .into_iter()
                .map(|output| (output.path, output.bytes))
                .collect(),
            skipped: result.skipped,
        },
        Err(error) => ProcessedFile {
            record: FileRecord {
                path: file.path.clone(),
                kind: FileKind::Json,
                status: RecordStatus::Failed,
                detail: Some(error.to_string()),
            },
            outputs: Vec::new(),
            skipped: Vec::new(),
        },
    }
}
