use super::queries;
use super::schema;
use crate::error::Result;
use jarchive_parser::schema::GameRecord;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableCounts {
	pub games: i64,
	pub categories: i64,
	pub players: i64,
	pub game_players: i64,
	pub clues: i64,
	pub clue_wrong_answers: i64,
}

pub struct ClueRepository {
	pub pool: SqlitePool,
	categories: HashMap<String, i64>,
}

impl ClueRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self {
			pool,
			categories: HashMap::new(),
		}
	}

	pub async fn connect(url: &str) -> Result<Self> {
		let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true).foreign_keys(true);
		let pool = SqlitePoolOptions::new()
			.max_connections(1)
			.idle_timeout(None)
			.max_lifetime(None)
			.connect_with(options)
			.await?;
		info!(%url, "opened database");
		Ok(Self::new(pool))
	}

	pub async fn init_schema(&self) -> Result<()> {
		schema::init_schema(&self.pool).await?;
		Ok(())
	}

	pub async fn reset_schema(&mut self) -> Result<()> {
		schema::reset_schema(&self.pool).await?;
		self.categories.clear();
		Ok(())
	}

	pub async fn insert_game(&mut self, record: &GameRecord) -> Result<()> {
		let mut tx = self.pool.begin().await?;
		let fresh = self.insert_game_with_transaction(&mut tx, record).await?;
		tx.commit().await?;

		// only cache ids that were committed
		self.categories.extend(fresh);
		Ok(())
	}

	async fn insert_game_with_transaction(&self, tx: &mut Transaction<'_, Sqlite>, record: &GameRecord) -> Result<HashMap<String, i64>> {
		let game_id = record.game.id;
		queries::upsert_game(tx, &record.game).await?;

		let mut fresh = HashMap::new();
		for name in record.categories() {
			if !self.categories.contains_key(name) {
				let id = queries::insert_category(tx, name).await?;
				fresh.insert(name.to_string(), id);
			}
		}

		for player in &record.players {
			queries::upsert_player(tx, player).await?;
		}
		for participation in &record.participants {
			queries::upsert_participation(tx, game_id, participation).await?;
		}

		for clue in &record.clues {
			let Some(&category_id) = self.categories.get(&clue.category).or_else(|| fresh.get(&clue.category)) else {
				continue;
			};
			let clue_id = queries::insert_clue(tx, game_id, category_id, clue).await?;
			for wrong in &clue.wrong_answers {
				queries::insert_wrong_answer(tx, clue_id, wrong).await?;
			}
		}

		debug!(game_id, categories = fresh.len(), clues = record.clues.len(), "game written");
		Ok(fresh)
	}

	pub async fn counts(&self) -> Result<TableCounts> {
		Ok(TableCounts {
			games: queries::count_rows(&self.pool, "games").await?,
			categories: queries::count_rows(&self.pool, "categories").await?,
			players: queries::count_rows(&self.pool, "players").await?,
			game_players: queries::count_rows(&self.pool, "game_players").await?,
			clues: queries::count_rows(&self.pool, "clues").await?,
			clue_wrong_answers: queries::count_rows(&self.pool, "clue_wrong_answers").await?,
		})
	}

	pub fn cached_categories(&self) -> usize {
		self.categories.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use jarchive_parser::schema::{CheckpointScores, ClueRecord, ClueValue, GameInfo, Participation, PlayerRecord, Round, WrongAnswerRecord};

	async fn repository() -> ClueRepository {
		let repo = ClueRepository::connect("sqlite::memory:").await.unwrap();
		repo.init_schema().await.unwrap();
		repo
	}

	fn player(id: i64, name: &str, nickname: Option<&str>, occupation: Option<&str>) -> PlayerRecord {
		PlayerRecord {
			id,
			name: name.to_string(),
			nickname: nickname.map(str::to_string),
			occupation: occupation.map(str::to_string),
			location: None,
			originally_from: false,
		}
	}

	fn clue(category: &str, round: Round, value: ClueValue, wrong: Vec<WrongAnswerRecord>) -> ClueRecord {
		ClueRecord {
			round,
			category: category.to_string(),
			value,
			daily_double: false,
			position: Some(1),
			text: "clue".to_string(),
			answer: "answer".to_string(),
			correct_player_id: Some(1),
			wrong_answers: wrong,
		}
	}

	fn record(game_id: i64) -> GameRecord {
		GameRecord {
			game: GameInfo {
				id: game_id,
				show_number: Some(100),
				air_date: None,
				complete: true,
				notes: None,
			},
			players: vec![player(1, "Ann Lee", Some("Ann"), Some("librarian")), player(2, "Bob Ray", Some("Bob"), None)],
			participants: vec![
				Participation {
					player_id: 1,
					rank: Some(1),
					scores: CheckpointScores::default(),
				},
				Participation {
					player_id: 2,
					rank: Some(2),
					scores: CheckpointScores::default(),
				},
			],
			clues: vec![
				clue("RIVERS", Round::Jeopardy, ClueValue::Amount(200), vec![WrongAnswerRecord { player_id: 2, text: Some("Nile".to_string()) }]),
				clue("RIVERS", Round::DoubleJeopardy, ClueValue::Amount(400), vec![]),
				clue("PLANETS", Round::Final, ClueValue::NoPresetValue, vec![]),
			],
		}
	}

	#[tokio::test]
	async fn test_rerun_only_grows_fact_tables() {
		let mut repo = repository().await;

		repo.insert_game(&record(7)).await.unwrap();
		let first = repo.counts().await.unwrap();
		repo.insert_game(&record(7)).await.unwrap();
		let second = repo.counts().await.unwrap();

		assert_eq!(first.games, 1);
		assert_eq!(first.categories, 2);
		assert_eq!(first.clues, 3);
		assert_eq!(first.clue_wrong_answers, 1);
		assert_eq!(second.games, first.games);
		assert_eq!(second.categories, first.categories);
		assert_eq!(second.players, first.players);
		assert_eq!(second.game_players, first.game_players);
		assert_eq!(second.clues, 6);
		assert_eq!(second.clue_wrong_answers, 2);
		assert_eq!(repo.cached_categories(), 2);
	}

	#[tokio::test]
	async fn test_final_clue_value_is_null() {
		let mut repo = repository().await;
		repo.insert_game(&record(7)).await.unwrap();

		let values: Vec<Option<i64>> = sqlx::query_scalar("SELECT value FROM clues ORDER BY id").fetch_all(&repo.pool).await.unwrap();

		assert_eq!(values, vec![Some(200), Some(400), None]);
	}

	#[tokio::test]
	async fn test_player_details_are_kept_and_nickname_updated() {
		let mut repo = repository().await;
		repo.insert_game(&record(7)).await.unwrap();

		let mut next = record(8);
		next.players = vec![player(1, "Ann Lee", Some("Annie"), Some("retired")), player(2, "Bob Ray", None, Some("pilot"))];
		repo.insert_game(&next).await.unwrap();

		let rows: Vec<(Option<String>, Option<String>)> = sqlx::query_as("SELECT nickname, occupation FROM players ORDER BY id").fetch_all(&repo.pool).await.unwrap();

		assert_eq!(rows[0], (Some("Annie".to_string()), Some("librarian".to_string())));
		assert_eq!(rows[1], (Some("Bob".to_string()), Some("pilot".to_string())));
		assert_eq!(repo.counts().await.unwrap().game_players, 4);
	}

	#[tokio::test]
	async fn test_failed_game_rolls_back() {
		let mut repo = repository().await;

		let mut broken = record(9);
		broken.clues[0].wrong_answers.push(WrongAnswerRecord { player_id: 99, text: None });
		assert!(repo.insert_game(&broken).await.is_err());

		let counts = repo.counts().await.unwrap();
		assert_eq!(counts, TableCounts::default());
		assert_eq!(repo.cached_categories(), 0);
	}

	#[tokio::test]
	async fn test_reset_empties_tables() {
		let mut repo = repository().await;
		repo.insert_game(&record(7)).await.unwrap();

		repo.reset_schema().await.unwrap();

		assert_eq!(repo.counts().await.unwrap(), TableCounts::default());
		assert_eq!(repo.cached_categories(), 0);
	}
}
