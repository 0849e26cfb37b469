use crate::error::ParserError;
use crate::query_selectors::{element_text, has_class, table_after_heading, ParsedSelectors};
use crate::schema::{Checkpoint, CheckpointScores};
use scraper::{ElementRef, Html};
use serde::Serialize;
use tracing::{debug, warn};

pub const MIN_PLAYERS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScoreLine {
	pub nickname: String,
	pub scores: CheckpointScores,
	pub rank: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBoard {
	pub lines: Vec<PlayerScoreLine>,
	pub found: Vec<Checkpoint>,
}

impl ScoreBoard {
	pub fn is_complete(&self) -> bool {
		self.lines.len() >= MIN_PLAYERS && self.found.len() == Checkpoint::ALL.len()
	}

	pub fn nicknames(&self) -> Vec<String> {
		self.lines.iter().map(|l| l.nickname.clone()).collect()
	}

	pub fn line(&self, nickname: &str) -> Option<&PlayerScoreLine> {
		self.lines.iter().find(|l| l.nickname == nickname)
	}
}

/// The sign comes from the cell class, never from the text.
pub fn parse_amount(text: &str, negative: bool) -> Result<i64, ParserError> {
	let digits: String = text.chars().filter(char::is_ascii_digit).collect();
	let amount = digits.parse::<i64>().map_err(|_| ParserError::invalid_score(text))?;
	Ok(if negative { -amount } else { amount })
}

/// Standard competition ranking: 1, 1, 3.
pub fn competition_ranks(scores: &[Option<i64>]) -> Vec<Option<u32>> {
	scores
		.iter()
		.map(|score| {
			let score = (*score)?;
			let above = scores.iter().flatten().filter(|&&other| other > score).count();
			u32::try_from(above + 1).ok()
		})
		.collect()
}

pub fn read_checkpoint_table(table: &ElementRef, selectors: &ParsedSelectors) -> Vec<(String, i64)> {
	let nicknames: Vec<String> = table.select(&selectors.score_nickname).map(|el| element_text(&el)).collect();
	let amounts = table.select(&selectors.score_amount).map(|el| parse_amount(&element_text(&el), has_class(&el, "score_negative")));

	nicknames
		.into_iter()
		.zip(amounts)
		.filter_map(|(nickname, amount)| match amount {
			Ok(amount) => Some((nickname, amount)),
			Err(e) => {
				warn!(%nickname, error = %e, "skipping unreadable score");
				None
			}
		})
		.collect()
}

pub fn parse_scoreboard(document: &Html, selectors: &ParsedSelectors) -> ScoreBoard {
	let mut board = ScoreBoard::default();

	for checkpoint in Checkpoint::ALL {
		let Some(table) = table_after_heading(document, &selectors.heading, checkpoint.heading_prefix()) else {
			debug!(?checkpoint, "score table not present");
			continue;
		};
		board.found.push(checkpoint);

		for (nickname, amount) in read_checkpoint_table(&table, selectors) {
			let idx = match board.lines.iter().position(|l| l.nickname == nickname) {
				Some(idx) => idx,
				None => {
					board.lines.push(PlayerScoreLine {
						nickname,
						scores: CheckpointScores::default(),
						rank: None,
					});
					board.lines.len() - 1
				}
			};
			board.lines[idx].scores.set(checkpoint, amount);
		}
	}

	let finals: Vec<Option<i64>> = board.lines.iter().map(|l| l.scores.final_score).collect();
	for (line, rank) in board.lines.iter_mut().zip(competition_ranks(&finals)) {
		line.rank = rank;
	}
	board
}
