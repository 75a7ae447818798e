//! Append-only JSONL file writer, one file per station per day.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Appends log entries to `<logs_dir>/raw/<date>_<station>.jsonl`.
pub struct StationLogWriter {
    station: String,
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl StationLogWriter {
    /// Open (or create) today's log file for `station`.
    pub fn new(logs_dir: impl AsRef<Path>, station: impl Into<String>) -> std::io::Result<Self> {
        let station = station.into();

        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{}_{}.jsonl", date, station));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            station,
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry as a single line and flush.
    pub fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.lock().flush()
    }
}

impl Drop for StationLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Read every entry of one JSONL file, skipping lines that do not parse.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<JsonLogEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| JsonLogEntry::from_json_line(line).ok())
        .collect())
}
