use serde::{Deserialize, Serialize};
use std::fmt;

pub const CATEGORIES_PER_ROUND: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Round {
	Jeopardy,
	DoubleJeopardy,
	Final,
}

impl Round {
	pub fn number(self) -> u8 {
		match self {
			Round::Jeopardy => 1,
			Round::DoubleJeopardy => 2,
			Round::Final => 3,
		}
	}
}

impl fmt::Display for Round {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Round::Jeopardy => write!(f, "Jeopardy! Round"),
			Round::DoubleJeopardy => write!(f, "Double Jeopardy! Round"),
			Round::Final => write!(f, "Final Jeopardy! Round"),
		}
	}
}

/// Dollar value printed on a clue. Final-round clues carry no preset value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueValue {
	Amount(i64),
	NoPresetValue,
}

impl ClueValue {
	pub fn amount(self) -> Option<i64> {
		match self {
			ClueValue::Amount(v) => Some(v),
			ClueValue::NoPresetValue => None,
		}
	}
}
