pub mod core;
pub mod error;
pub mod export;
pub mod sink;

// Re-export commonly used types
pub use crate::core::ClueRepository;
pub use error::{Result, StoreError};
pub use export::export_tables;
pub use sink::{JsonLinesSink, RecordSink};
