use sqlx::{Error, SqlitePool};
use tracing::info;

pub struct Table {
	pub name: &'static str,
	pub columns: &'static [&'static str],
	create: &'static str,
}

/// Creation order.
pub static TABLES: [Table; 6] = [
	Table {
		name: "games",
		columns: &["id", "show_number", "air_date", "complete", "notes"],
		create: r#"
        CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY,
            show_number INTEGER,
            air_date TEXT,
            complete INTEGER NOT NULL DEFAULT 0,
            notes TEXT
        )
        "#,
	},
	Table {
		name: "categories",
		columns: &["id", "name"],
		create: r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
	},
	Table {
		name: "players",
		columns: &["id", "name", "nickname", "occupation", "location", "originally_from"],
		create: r#"
        CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            nickname TEXT,
            occupation TEXT,
            location TEXT,
            originally_from INTEGER NOT NULL DEFAULT 0
        )
        "#,
	},
	Table {
		name: "game_players",
		columns: &["game_id", "player_id", "rank", "first_break", "end_of_jeopardy", "end_of_double_jeopardy", "final_score", "coryat"],
		create: r#"
        CREATE TABLE IF NOT EXISTS game_players (
            game_id INTEGER NOT NULL REFERENCES games(id),
            player_id INTEGER NOT NULL REFERENCES players(id),
            rank INTEGER,
            first_break INTEGER,
            end_of_jeopardy INTEGER,
            end_of_double_jeopardy INTEGER,
            final_score INTEGER,
            coryat INTEGER,
            PRIMARY KEY (game_id, player_id)
        )
        "#,
	},
	Table {
		name: "clues",
		columns: &["id", "game_id", "round", "value", "daily_double", "category_id", "position", "text", "answer", "correct_player_id"],
		create: r#"
        CREATE TABLE IF NOT EXISTS clues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            game_id INTEGER NOT NULL REFERENCES games(id),
            round INTEGER NOT NULL,
            value INTEGER,
            daily_double INTEGER NOT NULL DEFAULT 0,
            category_id INTEGER NOT NULL REFERENCES categories(id),
            position INTEGER,
            text TEXT NOT NULL,
            answer TEXT NOT NULL,
            correct_player_id INTEGER REFERENCES players(id)
        )
        "#,
	},
	Table {
		name: "clue_wrong_answers",
		columns: &["clue_id", "player_id", "text"],
		create: r#"
        CREATE TABLE IF NOT EXISTS clue_wrong_answers (
            clue_id INTEGER NOT NULL REFERENCES clues(id),
            player_id INTEGER NOT NULL REFERENCES players(id),
            text TEXT,
            PRIMARY KEY (clue_id, player_id)
        )
        "#,
	},
];

static INDEXES: [&str; 3] = [
	"CREATE INDEX IF NOT EXISTS idx_clues_game ON clues(game_id)",
	"CREATE INDEX IF NOT EXISTS idx_clues_category ON clues(category_id)",
	"CREATE INDEX IF NOT EXISTS idx_game_players_player ON game_players(player_id)",
];

pub fn table(name: &str) -> Option<&'static Table> {
	TABLES.iter().find(|t| t.name == name)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), Error> {
	for table in &TABLES {
		sqlx::query(table.create).execute(pool).await?;
	}
	for index in &INDEXES {
		sqlx::query(*index).execute(pool).await?;
	}
	Ok(())
}

pub async fn reset_schema(pool: &SqlitePool) -> Result<(), Error> {
	for table in TABLES.iter().rev() {
		sqlx::query(&format!("DROP TABLE IF EXISTS {}", table.name)).execute(pool).await?;
	}
	info!("dropped all tables");
	init_schema(pool).await
}
