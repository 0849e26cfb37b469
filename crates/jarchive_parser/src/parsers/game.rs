use super::contestants::{parse_contestants, Contestant};
use super::names::{reconcile_names, NameMatch};
use super::rounds::{parse_final_round, parse_round, ParsedClue};
use super::scores::{parse_scoreboard, ScoreBoard};
use crate::error::ParserError;
use crate::query_selectors::{element_text, select_first, ParsedSelectors, TextPatterns};
use crate::schema::{CheckpointScores, ClueRecord, GameInfo, GameRecord, Participation, PlayerRecord, Round, WrongAnswerRecord};
use chrono::NaiveDate;
use scraper::Html;
use std::collections::HashMap;
use tracing::{debug, info, warn};

pub fn parse_title(title: &str, patterns: &TextPatterns) -> (Option<i64>, Option<NaiveDate>) {
	let Some(caps) = patterns.title.captures(title) else {
		return (None, None);
	};
	let show_number = caps.get(1).and_then(|m| m.as_str().parse().ok());
	let air_date = caps.get(2).and_then(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok());
	(show_number, air_date)
}

struct Roster {
	contestants: Vec<Contestant>,
	names: NameMatch,
	board: ScoreBoard,
}

impl Roster {
	fn is_usable(&self) -> bool {
		!self.contestants.is_empty() && self.names.is_complete() && self.board.is_complete()
	}

	fn player_ids(&self) -> HashMap<&str, i64> {
		self.contestants
			.iter()
			.filter_map(|c| self.names.nickname_for(&c.name).map(|nick| (nick, c.player_id)))
			.collect()
	}
}

/// Walks one game page and assembles every record it holds.
pub struct ArchiveParser {
	selectors: ParsedSelectors,
	patterns: TextPatterns,
	host_name: String,
}

impl ArchiveParser {
	pub fn new(host_name: impl Into<String>) -> Result<Self, ParserError> {
		Ok(ArchiveParser {
			selectors: ParsedSelectors::new()?,
			patterns: TextPatterns::new()?,
			host_name: host_name.into(),
		})
	}

	fn game_info(&self, game_id: i64, document: &Html) -> GameInfo {
		let root = document.root_element();
		let (show_number, air_date) = select_first(&root, &self.selectors.title).map_or((None, None), |el| parse_title(&element_text(&el), &self.patterns));
		if show_number.is_none() {
			warn!(game_id, "no show number in the page title");
		}
		let notes = select_first(&root, &self.selectors.game_comments).map(|el| element_text(&el)).filter(|n| !n.is_empty());

		GameInfo {
			id: game_id,
			show_number,
			air_date,
			complete: false,
			notes,
		}
	}

	fn roster(&self, document: &Html) -> Roster {
		let contestants = parse_contestants(document, &self.selectors, &self.patterns);
		let board = parse_scoreboard(document, &self.selectors);
		let contestant_names: Vec<String> = contestants.iter().map(|c| c.name.clone()).collect();
		let names = reconcile_names(&contestant_names, &board.nicknames());

		if !names.is_complete() {
			warn!(unmatched_names = ?names.unmatched_names, unmatched_nicknames = ?names.unmatched_nicknames, "could not reconcile roster");
		}
		if !board.is_complete() {
			warn!(players = board.lines.len(), tables = board.found.len(), "score tables incomplete");
		}

		Roster { contestants, names, board }
	}

	fn clue_record(clue: ParsedClue, player_ids: &HashMap<&str, i64>) -> ClueRecord {
		let correct_player_id = clue.annotation.right.as_deref().and_then(|nick| player_ids.get(nick).copied());
		let wrong_answers = clue
			.annotation
			.wrong
			.into_iter()
			.filter_map(|w| match player_ids.get(w.nickname.as_str()) {
				Some(&player_id) => Some(WrongAnswerRecord { player_id, text: w.text }),
				None => {
					debug!(nickname = %w.nickname, "wrong answerer is not on the roster");
					None
				}
			})
			.collect();

		ClueRecord {
			round: clue.round,
			category: clue.category,
			value: clue.value,
			daily_double: clue.daily_double,
			position: clue.position,
			text: clue.text,
			answer: clue.annotation.correct_response,
			correct_player_id,
			wrong_answers,
		}
	}

	pub fn parse_game(&self, game_id: i64, document: &Html) -> GameRecord {
		let mut game = self.game_info(game_id, document);
		let roster = self.roster(document);
		let usable = roster.is_usable();

		let players = roster
			.contestants
			.iter()
			.map(|c| PlayerRecord {
				id: c.player_id,
				name: c.name.clone(),
				nickname: roster.names.nickname_for(&c.name).map(str::to_string),
				occupation: c.occupation.clone(),
				location: c.location.clone(),
				originally_from: c.originally_from,
			})
			.collect();

		let participants = roster
			.contestants
			.iter()
			.map(|c| {
				let line = roster.names.nickname_for(&c.name).and_then(|nick| roster.board.line(nick)).filter(|_| usable);
				Participation {
					player_id: c.player_id,
					rank: line.and_then(|l| l.rank),
					scores: line.map_or_else(CheckpointScores::default, |l| l.scores),
				}
			})
			.collect();

		let player_ids = roster.player_ids();
		let mut clues = Vec::new();
		let mut regular_rounds = 0;
		for round in [Round::Jeopardy, Round::DoubleJeopardy] {
			match parse_round(document, round, &self.selectors, &self.host_name) {
				Some(parsed) => {
					regular_rounds += 1;
					clues.extend(parsed.into_iter().map(|c| Self::clue_record(c, &player_ids)));
				}
				None => warn!(game_id, %round, "round not present"),
			}
		}

		match parse_final_round(document, &self.selectors, &self.host_name) {
			Some(Ok(clue)) => clues.push(Self::clue_record(clue, &player_ids)),
			Some(Err(e)) => warn!(game_id, error = %e, "skipping final round"),
			None => warn!(game_id, "final round not present"),
		}

		game.complete = usable && regular_rounds == 2;
		info!(game_id, clues = clues.len(), complete = game.complete, "parsed game");

		GameRecord {
			game,
			players,
			participants,
			clues,
		}
	}
}
