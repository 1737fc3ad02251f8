//! Append-only JSONL audit log
//!
//! One entry per line, flushed as soon as it is written.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{BankError, BankResult};

use super::entry::AuditEntry;

/// Writes and reads the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// `None` until the first entry was written
    fn open_reader(&self) -> BankResult<Option<BufReader<File>>> {
        if !self.log_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.log_path)
            .map_err(|e| BankError::Io(format!("Can't open audit log: {}", e)))?;
        Ok(Some(BufReader::new(file)))
    }

    pub fn log(&self, entry: &AuditEntry) -> BankResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| BankError::Json(format!("Can't encode audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BankError::Io(format!("Can't open audit log: {}", e)))?;

        writeln!(file, "{}", line)
            .and_then(|()| file.flush())
            .map_err(|e| BankError::Io(format!("Can't append to audit log: {}", e)))
    }

    /// Every entry, oldest first; blank lines are skipped
    pub fn read_all(&self) -> BankResult<Vec<AuditEntry>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| BankError::Io(format!("audit log line {}: {}", index + 1, e)))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line)
                .map_err(|e| BankError::Json(format!("audit log line {}: {}", index + 1, e)))?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> BankResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    pub fn entry_count(&self) -> BankResult<usize> {
        Ok(self
            .open_reader()?
            .map_or(0, |reader| reader.lines().map_while(Result::ok).count()))
    }
}
