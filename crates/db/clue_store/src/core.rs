pub mod queries;
pub mod repository;
pub mod schema;

pub use repository::{ClueRepository, TableCounts};
