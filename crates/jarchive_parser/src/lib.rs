pub mod error;
pub mod parsers;
pub mod query_selectors;
pub mod schema;

use error::ParserError;
use scraper::Html;
use std::path::Path;

pub use parsers::ArchiveParser;
pub use schema::GameRecord;

pub fn read_html_file(file_path: &Path) -> Result<Html, ParserError> {
	let bytes = std::fs::read(file_path)?;
	Ok(Html::parse_document(&String::from_utf8_lossy(&bytes)))
}

/// Game pages are saved as `<game id>.html`; anything else has no id.
pub fn game_id_from_path(file_path: &Path) -> Option<i64> {
	file_path.file_stem()?.to_str()?.parse().ok()
}
