use super::RecordSink;
use crate::error::DataError;
use async_trait::async_trait;
use clmm_depth_domain::entities::{CSV_HEADER, TimeSeriesRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Appends records to a CSV file.
///
/// The header is written only when the file is new or empty, so restarts keep
/// extending the same history.
pub struct CsvFileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl CsvFileSink {
    /// Opens (or creates) the file in append mode.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the header cannot be written.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let is_new = file.metadata()?.len() == 0;

        let mut writer = BufWriter::new(file);
        if is_new {
            writeln!(writer, "{CSV_HEADER}")?;
            writer.flush()?;
        }

        info!(path = %path.display(), created = is_new, "📝 Writing records to CSV");
        Ok(Self { path, writer })
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSink for CsvFileSink {
    async fn append(&mut self, records: &[TimeSeriesRecord]) -> Result<(), DataError> {
        for record in records {
            writeln!(self.writer, "{}", record.to_csv_row())?;
        }
        // one cycle per minute; flush every batch
        self.writer.flush()?;
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), DataError> {
        self.writer.flush()?;
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "CSV"
    }
}

impl Drop for CsvFileSink {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clmm_depth_domain::entities::Address;
    use clmm_depth_domain::value_objects::Percentage;

    fn record(liquidity: u128) -> TimeSeriesRecord {
        TimeSeriesRecord {
            timestamp: "2025-01-01 00:00:00".to_string(),
            address: Address::from_bytes([0x01; 20]),
            active_liquidity: liquidity,
            percentage_of_depth: Percentage(10.0),
            rolling_average: Percentage(10.0),
            current_tick: Some(0),
            current_price: Some(1.0),
        }
    }

    #[tokio::test]
    async fn test_header_written_once_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        {
            let mut sink = CsvFileSink::open(&path).unwrap();
            sink.append(&[record(1), record(2)]).await.unwrap();
        }
        {
            let mut sink = CsvFileSink::open(&path).unwrap();
            sink.append(&[record(3)]).await.unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.iter().filter(|l| **l == CSV_HEADER).count(), 1);
        assert!(lines[3].contains(",3,"));
    }

    #[tokio::test]
    async fn test_existing_file_not_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        std::fs::write(&path, "previous,history\n").unwrap();

        let mut sink = CsvFileSink::open(&path).unwrap();
        sink.append(&[record(7)]).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("previous,history\n"));
        assert!(!contents.contains(CSV_HEADER));
        assert_eq!(sink.backend_type(), "CSV");
        assert_eq!(sink.path(), path.as_path());
    }
}
