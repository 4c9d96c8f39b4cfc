//! Record file reader
//!
//! Decodes a text source line by line and inserts accepted records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{error, info, warn};

use crate::error::{Result, RollbookError};
use crate::store::RecordStore;

use super::decode_line;

/// Outcome of reading a record source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadReport {
    /// Records decoded and inserted into the store
    pub inserted: usize,

    /// Lines skipped for bad format, date or grades
    pub rejected: usize,

    /// Decoded lines the store could not take (allocation failure)
    pub failed: usize,
}

/// Read records from the file at `path` into `store`
///
/// Fails with `FileOpenFailure` if the file cannot be opened. The handle is
/// closed before returning on every path.
pub fn read_records(path: &Path, store: &mut RecordStore) -> Result<ReadReport> {
    let file = File::open(path).map_err(|source| RollbookError::FileOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;

    let report = decode_from(BufReader::new(file), store)?;

    info!(
        path = %path.display(),
        inserted = report.inserted,
        rejected = report.rejected,
        "Successfully read {} students",
        report.inserted
    );
    Ok(report)
}

/// Decode every line of `reader` into `store`
///
/// Blank lines are skipped silently. Bad lines (including lines that are not
/// valid UTF-8) are logged and counted. Only an I/O error while reading
/// aborts the loop.
pub fn decode_from<R: BufRead>(reader: R, store: &mut RecordStore) -> Result<ReadReport> {
    let mut report = ReadReport::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_no = index + 1;

        let decoded = match String::from_utf8(bytes) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => decode_line(line_no, &text),
            Err(_) => Err(RollbookError::MalformedLine {
                line: line_no,
                reason: "not valid UTF-8".to_string(),
            }),
        };

        let student = match decoded {
            Ok(student) => student,
            Err(e) => {
                warn!("{}. Skipping.", e);
                report.rejected += 1;
                continue;
            }
        };

        match store.insert(student) {
            Ok(()) => report.inserted += 1,
            Err(e) => {
                error!(line = line_no, "{}", e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
