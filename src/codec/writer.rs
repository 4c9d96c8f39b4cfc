//! Record file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, RollbookError};
use crate::store::RecordStore;

use super::encode_line;

/// Write every record in `store` to a new file at `path`
///
/// Truncates an existing file. Fails with `FileOpenFailure` if the file
/// cannot be created. Returns the number of records written.
pub fn write_records(path: &Path, store: &RecordStore) -> Result<usize> {
    let file = File::create(path).map_err(|source| RollbookError::FileOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let written = encode_to(&mut writer, store)?;
    writer.flush()?;

    info!(path = %path.display(), written, "Successfully wrote {} students", written);
    Ok(written)
}

/// Encode `store` in enumeration order, one line per record
pub fn encode_to<W: Write>(writer: &mut W, store: &RecordStore) -> Result<usize> {
    let mut written = 0;
    for record in store {
        writeln!(writer, "{}", encode_line(record))?;
        written += 1;
    }
    Ok(written)
}
