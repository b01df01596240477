//! Stage functions of the coverage pipeline.
//!
//! Each stage consumes the records and returns rebuilt ones, one pass per
//! stage. Only [`score_complexity`] touches the filesystem.

use crate::complexity::classify_file;
use crate::core::{FileRecord, FileType};
use crate::observability::{increment_processed, set_current_file};
use crate::risk::CoverageMap;

/// Read each file and attach its complexity bucket.
///
/// Unreadable files degrade to `unknown` instead of failing the run.
pub fn score_complexity(records: Vec<FileRecord>) -> Vec<FileRecord> {
    records
        .into_iter()
        .map(|record| {
            let _file = set_current_file(&record.absolute_path);
            let complexity = classify_file(&record.absolute_path);
            increment_processed();
            record.with_complexity(complexity)
        })
        .collect()
}

/// Attach coverage from the summary, when one was supplied (pure).
pub fn join_coverage(records: Vec<FileRecord>, coverage: Option<&CoverageMap>) -> Vec<FileRecord> {
    match coverage {
        Some(map) => records
            .into_iter()
            .map(|record| {
                let metrics = map.find(&record.path);
                record.with_coverage(metrics)
            })
            .collect(),
        None => records,
    }
}

/// Run the priority decision table on every record (pure).
pub fn prioritize(records: Vec<FileRecord>, threshold: f64) -> Vec<FileRecord> {
    records
        .into_iter()
        .map(|record| record.prioritized(threshold))
        .collect()
}

/// Keep only records of one type (pure).
pub fn filter_by_type(records: Vec<FileRecord>, focus: Option<FileType>) -> Vec<FileRecord> {
    match focus {
        Some(file_type) => records
            .into_iter()
            .filter(|r| r.file_type == file_type)
            .collect(),
        None => records,
    }
}
