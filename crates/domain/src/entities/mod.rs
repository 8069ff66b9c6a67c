pub mod pool;
pub mod position;
pub mod record;
pub mod token;

// Re-export for easier access
pub use pool::{PoolKey, PoolSnapshot};
pub use position::Position;
pub use record::{CSV_HEADER, TimeSeriesRecord, UNAVAILABLE};
pub use token::{Address, TokenPair};
