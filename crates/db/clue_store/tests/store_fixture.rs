use clue_store::{export_tables, ClueRepository, RecordSink};
use jarchive_parser::schema::GameRecord;
use jarchive_parser::{read_html_file, ArchiveParser};
use std::path::PathBuf;

fn fixture() -> GameRecord {
	let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../jarchive_parser/tests/fixtures/show.html");
	let document = read_html_file(&path).unwrap();
	ArchiveParser::new("Alex").unwrap().parse_game(4680, &document)
}

async fn repository() -> ClueRepository {
	let repo = ClueRepository::connect("sqlite::memory:").await.unwrap();
	repo.init_schema().await.unwrap();
	repo
}

#[tokio::test]
async fn test_fixture_rows() {
	let mut repo = repository().await;
	let record = fixture();

	repo.write_game(&record).await.unwrap();
	let counts = repo.counts().await.unwrap();

	assert_eq!(counts.games, 1);
	assert_eq!(counts.players, 3);
	assert_eq!(counts.game_players, 3);
	assert_eq!(counts.clues, 16);
	// POTPOURRI is shared by both rounds and SCIENCE never had a clue revealed
	assert_eq!(counts.categories, 11);

	let ranks: Vec<i64> = sqlx::query_scalar("SELECT rank FROM game_players ORDER BY rank").fetch_all(&repo.pool).await.unwrap();
	assert_eq!(ranks, vec![1, 1, 3]);

	let complete: bool = sqlx::query_scalar("SELECT complete FROM games WHERE id = 4680").fetch_one(&repo.pool).await.unwrap();
	assert!(complete);
}

#[tokio::test]
async fn test_fixture_rerun_is_idempotent_for_dimensions() {
	let mut repo = repository().await;
	let record = fixture();

	repo.write_game(&record).await.unwrap();
	let first = repo.counts().await.unwrap();
	repo.write_game(&record).await.unwrap();
	let second = repo.counts().await.unwrap();

	assert_eq!(second.games, first.games);
	assert_eq!(second.categories, first.categories);
	assert_eq!(second.players, first.players);
	assert_eq!(second.game_players, first.game_players);
	assert_eq!(second.clues, first.clues * 2);
	assert_eq!(second.clue_wrong_answers, first.clue_wrong_answers * 2);
}

#[tokio::test]
async fn test_fixture_export() {
	let mut repo = repository().await;
	repo.write_game(&fixture()).await.unwrap();
	let dir = tempfile::tempdir().unwrap();

	let paths = export_tables(&repo.pool, dir.path()).await.unwrap();

	assert_eq!(paths.len(), 6);
	let players = std::fs::read_to_string(dir.path().join("players.csv")).unwrap();
	assert_eq!(players.lines().count(), 4);
	assert!(players.contains("12,Bradley Rutter,Brad,record store employee,\"Lancaster, Pennsylvania\",0"));
}
