use super::{Checkpoint, ClueValue, Round};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
	pub id: i64,
	pub show_number: Option<i64>,
	pub air_date: Option<NaiveDate>,
	pub complete: bool,
	pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
	pub id: i64,
	pub name: String,
	pub nickname: Option<String>,
	pub occupation: Option<String>,
	pub location: Option<String>,
	pub originally_from: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointScores {
	pub first_break: Option<i64>,
	pub end_of_jeopardy: Option<i64>,
	pub end_of_double_jeopardy: Option<i64>,
	pub final_score: Option<i64>,
	pub coryat: Option<i64>,
}

impl CheckpointScores {
	pub fn get(&self, checkpoint: Checkpoint) -> Option<i64> {
		match checkpoint {
			Checkpoint::FirstBreak => self.first_break,
			Checkpoint::EndOfJeopardy => self.end_of_jeopardy,
			Checkpoint::EndOfDoubleJeopardy => self.end_of_double_jeopardy,
			Checkpoint::Final => self.final_score,
			Checkpoint::Coryat => self.coryat,
		}
	}

	pub fn set(&mut self, checkpoint: Checkpoint, amount: i64) {
		let slot = match checkpoint {
			Checkpoint::FirstBreak => &mut self.first_break,
			Checkpoint::EndOfJeopardy => &mut self.end_of_jeopardy,
			Checkpoint::EndOfDoubleJeopardy => &mut self.end_of_double_jeopardy,
			Checkpoint::Final => &mut self.final_score,
			Checkpoint::Coryat => &mut self.coryat,
		};
		*slot = Some(amount);
	}
}

/// One player's line in a game. Scores and rank stay empty when the roster could not be reconciled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participation {
	pub player_id: i64,
	pub rank: Option<u32>,
	pub scores: CheckpointScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrongAnswerRecord {
	pub player_id: i64,
	pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClueRecord {
	pub round: Round,
	pub category: String,
	pub value: ClueValue,
	pub daily_double: bool,
	pub position: Option<u32>,
	pub text: String,
	pub answer: String,
	pub correct_player_id: Option<i64>,
	pub wrong_answers: Vec<WrongAnswerRecord>,
}

/// Everything extracted from one game page, ready to be handed to a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
	pub game: GameInfo,
	pub players: Vec<PlayerRecord>,
	pub participants: Vec<Participation>,
	pub clues: Vec<ClueRecord>,
}

impl GameRecord {
	/// Distinct category labels in first-seen order.
	pub fn categories(&self) -> Vec<&str> {
		let mut seen = HashSet::new();
		self.clues
			.iter()
			.map(|c| c.category.as_str())
			.filter(|c| seen.insert(*c))
			.collect()
	}

	pub fn clues_in(&self, round: Round) -> impl Iterator<Item = &ClueRecord> {
		self.clues.iter().filter(move |c| c.round == round)
	}
}
