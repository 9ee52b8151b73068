//! CSV file loading.

use std::path::Path;

use crm_model::{ColumnSchema, ParsedCsv};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::parse::parse_csv;

/// Maximum file size for CSV loading (100 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn io_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Decodes file bytes as UTF-8, rejecting UTF-16 byte-order marks.
///
/// A UTF-8 BOM is kept here and dropped by the parser.
fn decode(path: &Path, bytes: Vec<u8>) -> Result<String> {
    match bytes.get(0..2) {
        Some([0xFF, 0xFE]) => {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        Some([0xFE, 0xFF]) => {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
        _ => {}
    }

    String::from_utf8(bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}

/// Reads and parses a CSV file with the default size limit.
pub fn read_csv_file(path: &Path, schema: Option<&[ColumnSchema]>) -> Result<ParsedCsv> {
    read_csv_file_with_limit(path, schema, MAX_CSV_FILE_SIZE)
}

/// Reads and parses a CSV file, failing if it is larger than `max_size` bytes.
pub fn read_csv_file_with_limit(
    path: &Path,
    schema: Option<&[ColumnSchema]>,
    max_size: u64,
) -> Result<ParsedCsv> {
    check_file_size_with_limit(path, max_size)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read csv file");

    let text = decode(path, bytes)?;
    Ok(parse_csv(&text, schema))
}
