use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("Database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Unknown table: {0}")]
	UnknownTable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
