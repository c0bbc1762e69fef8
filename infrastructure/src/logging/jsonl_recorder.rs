//! JSONL file writer for inquiry records.
//!
//! Each [`InquiryRecord`] is serialized as a single JSON line and appended to
//! the file, so records from earlier runs are kept.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;
use triage_application::InquiryRecorder;
use triage_domain::InquiryRecord;

/// Errors reading a record log
#[derive(Error, Debug)]
pub enum RecordLogError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// JSONL inquiry recorder that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and on `Drop`.
pub struct JsonlInquiryRecorder {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlInquiryRecorder {
    /// Open the log for appending, creating the file and parent directories.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create record log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open record log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InquiryRecorder for JsonlInquiryRecorder {
    fn record(&self, record: &InquiryRecord) {
        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize inquiry record: {}", e);
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Could not write inquiry record to {}: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlInquiryRecorder {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

/// Read every record in a JSONL log.
///
/// A missing file is an empty log. Lines that fail to parse are skipped with
/// a warning.
pub fn read_records(path: &Path) -> Result<Vec<InquiryRecord>, RecordLogError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(RecordLogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut records = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| RecordLogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<InquiryRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed record at line {}: {}", index + 1, e),
        }
    }
    Ok(records)
}
