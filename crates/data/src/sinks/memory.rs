use super::RecordSink;
use crate::error::DataError;
use async_trait::async_trait;
use clmm_depth_domain::entities::TimeSeriesRecord;
use std::sync::{Arc, Mutex};

/// Keeps records in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<TimeSeriesRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything appended so far.
    pub fn records(&self) -> Vec<TimeSeriesRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn append(&mut self, records: &[TimeSeriesRecord]) -> Result<(), DataError> {
        let mut guard = match self.records.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.extend_from_slice(records);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), DataError> {
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}
