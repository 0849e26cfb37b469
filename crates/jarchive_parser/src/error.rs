use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
	#[error("Invalid selector: {0}")]
	InvalidSelector(String),

	#[error("Invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),

	#[error("Missing {context} in the HTML")]
	MissingElement { context: &'static str },

	#[error("Failed to parse clue value from: {input}")]
	InvalidClueValue {
		input: String,
		#[source]
		source: ParseIntError,
	},

	#[error("Failed to parse score amount from: {input}")]
	InvalidScore { input: String },

	#[error("No category at position {position} in round {round}")]
	MissingCategory { round: u8, position: usize },

	#[error("IO error occurred: {0}")]
	Io(#[from] std::io::Error),
}

impl ParserError {
	pub fn missing(context: &'static str) -> Self {
		ParserError::MissingElement { context }
	}

	pub fn invalid_clue_value(input: &str, source: ParseIntError) -> Self {
		ParserError::InvalidClueValue {
			input: input.to_string(),
			source,
		}
	}

	pub fn invalid_score(input: &str) -> Self {
		ParserError::InvalidScore { input: input.to_string() }
	}
}

pub type Result<T> = std::result::Result<T, ParserError>;
