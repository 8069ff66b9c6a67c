//! Append-only destinations for time-series records.

mod csv_file;
mod memory;

pub use csv_file::CsvFileSink;
pub use memory::MemorySink;

use crate::error::DataError;
use async_trait::async_trait;
use clmm_depth_domain::entities::TimeSeriesRecord;

/// Destination for time-series records.
#[async_trait]
pub trait RecordSink: Send {
    /// Appends records in order. Existing contents are never rewritten.
    async fn append(&mut self, records: &[TimeSeriesRecord]) -> Result<(), DataError>;

    /// Flushes buffered records to durable storage.
    async fn flush(&mut self) -> Result<(), DataError>;

    /// Short name for logs.
    fn backend_type(&self) -> &'static str;
}
