use crate::core::schema::{self, Table, TABLES};
use crate::error::{Result, StoreError};
use sqlx::{Row, SqlitePool};
use std::path::{Path, PathBuf};
use tracing::info;

fn select_as_text(table: &Table) -> String {
	let columns: Vec<String> = table.columns.iter().map(|c| format!("CAST({c} AS TEXT) AS {c}")).collect();
	format!("SELECT {} FROM {} ORDER BY rowid", columns.join(", "), table.name)
}

/// Writes one table to `<out_dir>/<table>.csv` with a header row. NULL becomes an empty field.
pub async fn export_table(pool: &SqlitePool, name: &str, out_dir: &Path) -> Result<PathBuf> {
	let table = schema::table(name).ok_or_else(|| StoreError::UnknownTable(name.to_string()))?;
	let rows = sqlx::query(&select_as_text(table)).fetch_all(pool).await?;

	let path = out_dir.join(format!("{}.csv", table.name));
	let mut writer = csv::Writer::from_path(&path)?;
	writer.write_record(table.columns)?;
	for row in &rows {
		let mut record = Vec::with_capacity(table.columns.len());
		for idx in 0..table.columns.len() {
			let value: Option<String> = row.try_get(idx)?;
			record.push(value.unwrap_or_default());
		}
		writer.write_record(&record)?;
	}
	writer.flush()?;

	info!(table = table.name, rows = rows.len(), path = %path.display(), "exported table");
	Ok(path)
}

/// Exports every table, creating `out_dir` if needed.
pub async fn export_tables(pool: &SqlitePool, out_dir: &Path) -> Result<Vec<PathBuf>> {
	std::fs::create_dir_all(out_dir)?;
	let mut paths = Vec::with_capacity(TABLES.len());
	for table in &TABLES {
		paths.push(export_table(pool, table.name, out_dir).await?);
	}
	Ok(paths)
}
