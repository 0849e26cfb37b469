use jarchive_parser::schema::{ClueRecord, GameInfo, Participation, PlayerRecord, WrongAnswerRecord};
use sqlx::{Error, Sqlite, SqlitePool, Transaction};

pub async fn upsert_game(tx: &mut Transaction<'_, Sqlite>, game: &GameInfo) -> Result<(), Error> {
	sqlx::query(
		r#"
        INSERT INTO games (id, show_number, air_date, complete, notes)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            show_number = excluded.show_number,
            air_date = excluded.air_date,
            complete = excluded.complete,
            notes = excluded.notes
        "#,
	)
	.bind(game.id)
	.bind(game.show_number)
	.bind(game.air_date.map(|d| d.to_string()))
	.bind(game.complete)
	.bind(game.notes.as_deref())
	.execute(&mut **tx)
	.await?;
	Ok(())
}

pub async fn insert_category(tx: &mut Transaction<'_, Sqlite>, name: &str) -> Result<i64, Error> {
	sqlx::query("INSERT OR IGNORE INTO categories (name) VALUES (?)").bind(name).execute(&mut **tx).await?;
	sqlx::query_scalar("SELECT id FROM categories WHERE name = ?").bind(name).fetch_one(&mut **tx).await
}

/// Occupation and location keep their first known value; a known nickname always wins.
pub async fn upsert_player(tx: &mut Transaction<'_, Sqlite>, player: &PlayerRecord) -> Result<(), Error> {
	sqlx::query(
		r#"
        INSERT INTO players (id, name, nickname, occupation, location, originally_from)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            nickname = COALESCE(excluded.nickname, players.nickname),
            occupation = COALESCE(players.occupation, excluded.occupation),
            location = COALESCE(players.location, excluded.location)
        "#,
	)
	.bind(player.id)
	.bind(&player.name)
	.bind(player.nickname.as_deref())
	.bind(player.occupation.as_deref())
	.bind(player.location.as_deref())
	.bind(player.originally_from)
	.execute(&mut **tx)
	.await?;
	Ok(())
}

pub async fn upsert_participation(tx: &mut Transaction<'_, Sqlite>, game_id: i64, participation: &Participation) -> Result<(), Error> {
	let scores = &participation.scores;
	sqlx::query(
		r#"
        INSERT INTO game_players (game_id, player_id, rank, first_break, end_of_jeopardy, end_of_double_jeopardy, final_score, coryat)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(game_id, player_id) DO UPDATE SET
            rank = excluded.rank,
            first_break = excluded.first_break,
            end_of_jeopardy = excluded.end_of_jeopardy,
            end_of_double_jeopardy = excluded.end_of_double_jeopardy,
            final_score = excluded.final_score,
            coryat = excluded.coryat
        "#,
	)
	.bind(game_id)
	.bind(participation.player_id)
	.bind(participation.rank.map(i64::from))
	.bind(scores.first_break)
	.bind(scores.end_of_jeopardy)
	.bind(scores.end_of_double_jeopardy)
	.bind(scores.final_score)
	.bind(scores.coryat)
	.execute(&mut **tx)
	.await?;
	Ok(())
}

pub async fn insert_clue(tx: &mut Transaction<'_, Sqlite>, game_id: i64, category_id: i64, clue: &ClueRecord) -> Result<i64, Error> {
	let id = sqlx::query(
		r#"
        INSERT INTO clues (game_id, round, value, daily_double, category_id, position, text, answer, correct_player_id)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
	)
	.bind(game_id)
	.bind(i64::from(clue.round.number()))
	.bind(clue.value.amount())
	.bind(clue.daily_double)
	.bind(category_id)
	.bind(clue.position.map(i64::from))
	.bind(&clue.text)
	.bind(&clue.answer)
	.bind(clue.correct_player_id)
	.execute(&mut **tx)
	.await?
	.last_insert_rowid();

	Ok(id)
}

pub async fn insert_wrong_answer(tx: &mut Transaction<'_, Sqlite>, clue_id: i64, wrong: &WrongAnswerRecord) -> Result<(), Error> {
	sqlx::query("INSERT OR IGNORE INTO clue_wrong_answers (clue_id, player_id, text) VALUES (?, ?, ?)")
		.bind(clue_id)
		.bind(wrong.player_id)
		.bind(wrong.text.as_deref())
		.execute(&mut **tx)
		.await?;
	Ok(())
}

/// `table` must be one of the names in [`super::schema::TABLES`].
pub async fn count_rows(pool: &SqlitePool, table: &str) -> Result<i64, Error> {
	sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table)).fetch_one(pool).await
}
