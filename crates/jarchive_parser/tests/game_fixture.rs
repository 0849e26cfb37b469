use jarchive_parser::schema::{ClueValue, GameRecord, Round};
use jarchive_parser::{read_html_file, ArchiveParser};
use std::path::PathBuf;

fn fixture() -> GameRecord {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/show.html");
	let document = read_html_file(&path).unwrap();
	let parser = ArchiveParser::new("Alex").unwrap();
	parser.parse_game(4680, &document)
}

fn player_id(record: &GameRecord, nickname: &str) -> i64 {
	record.players.iter().find(|p| p.nickname.as_deref() == Some(nickname)).map(|p| p.id).unwrap()
}

#[test]
fn test_fixture_is_one_complete_game() {
	let record = fixture();

	assert!(record.game.complete);
	assert_eq!(record.game.show_number, Some(4680));
	assert_eq!(record.game.air_date.map(|d| d.to_string()).as_deref(), Some("2004-12-31"));
	assert_eq!(record.game.notes.as_deref(), Some("Fixture game used for extraction tests."));
}

#[test]
fn test_fixture_roster_is_reconciled() {
	let record = fixture();

	assert_eq!(record.players.len(), 3);
	let brad = record.players.iter().find(|p| p.id == 12).unwrap();
	assert_eq!(brad.name, "Bradley Rutter");
	assert_eq!(brad.nickname.as_deref(), Some("Brad"));
	let ann = record.players.iter().find(|p| p.id == 11).unwrap();
	assert!(ann.originally_from);
	assert_eq!(ann.location.as_deref(), Some("Tulsa, Oklahoma"));

	let mut ranks: Vec<u32> = record.participants.iter().map(|p| p.rank.unwrap()).collect();
	ranks.sort_unstable();
	assert_eq!(ranks, vec![1, 1, 3]);

	let ken = record.participants.iter().find(|p| p.player_id == 10).unwrap();
	assert_eq!(ken.scores.first_break, Some(1000));
	assert_eq!(ken.scores.final_score, Some(10000));
	assert_eq!(ken.scores.coryat, Some(7200));
	let brad = record.participants.iter().find(|p| p.player_id == 12).unwrap();
	assert_eq!(brad.scores.first_break, Some(-200));
}

#[test]
fn test_fixture_clue_counts() {
	let record = fixture();

	assert_eq!(record.clues_in(Round::Jeopardy).count(), 10);
	assert_eq!(record.clues_in(Round::DoubleJeopardy).count(), 5);
	assert_eq!(record.clues_in(Round::Final).count(), 1);
	assert_eq!(record.clues.len(), 16);
	assert!(record.categories().contains(&"POTPOURRI"));
	assert_eq!(record.categories().iter().filter(|c| **c == "POTPOURRI").count(), 1);
}

#[test]
fn test_fixture_categories_follow_cells() {
	let record = fixture();
	let category_of = |text: &str| record.clues.iter().find(|c| c.text == text).map(|c| c.category.as_str());

	assert_eq!(category_of("It builds dams"), Some("\"B\" BIRDS"));
	assert_eq!(category_of("Video game plumber, 1985"), Some("THE 1980s"));
	assert_eq!(category_of("A grab bag"), Some("POTPOURRI"));
	assert_eq!(category_of("Discovered by mathematics in 1846"), Some("PLANETS"));
}

#[test]
fn test_fixture_daily_doubles_and_final() {
	let record = fixture();

	let showboat = record.clues.iter().find(|c| c.text == "Showboat standard").unwrap();
	assert!(showboat.daily_double);
	assert_eq!(showboat.value, ClueValue::Amount(1200));
	assert_eq!(showboat.answer, "Ol' Man River");
	assert_eq!(showboat.position, Some(6));

	let swan = record.clues.iter().find(|c| c.text == "Swan Lake composer").unwrap();
	assert!(swan.daily_double);
	assert_eq!(swan.value, ClueValue::Amount(3000));

	let last = record.clues_in(Round::Final).next().unwrap();
	assert_eq!(last.value, ClueValue::NoPresetValue);
	assert_eq!(last.answer, "Neptune");
	assert_eq!(last.correct_player_id, None);
	assert!(last.wrong_answers.is_empty());
}

#[test]
fn test_fixture_attribution() {
	let record = fixture();
	let (ken, ann, brad) = (player_id(&record, "Ken"), player_id(&record, "Ann"), player_id(&record, "Brad"));

	let tigris = record.clues.iter().find(|c| c.answer == "the Tigris").unwrap();
	assert_eq!(tigris.correct_player_id, Some(ann));
	assert_eq!(tigris.wrong_answers.len(), 2);
	let ken_guess = tigris.wrong_answers.iter().find(|w| w.player_id == ken).unwrap();
	assert_eq!(ken_guess.text.as_deref(), Some("What is the Euphrates?"));
	let brad_guess = tigris.wrong_answers.iter().find(|w| w.player_id == brad).unwrap();
	assert_eq!(brad_guess.text.as_deref(), Some("What is the Jordan?"));

	let beaver = record.clues.iter().find(|c| c.answer == "a beaver").unwrap();
	assert_eq!(beaver.correct_player_id, None);
	assert_eq!(beaver.wrong_answers[0].player_id, brad);
	assert_eq!(beaver.wrong_answers[0].text.as_deref(), Some("What is a badger?"));

	let bizet = record.clues.iter().find(|c| c.answer == "Bizet").unwrap();
	assert_eq!(bizet.correct_player_id, None);
	assert!(bizet.wrong_answers.is_empty());

	let roster: Vec<i64> = record.participants.iter().map(|p| p.player_id).collect();
	assert!(record.clues.iter().flat_map(|c| &c.wrong_answers).all(|w| roster.contains(&w.player_id)));
}
