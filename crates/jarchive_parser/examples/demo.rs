use jarchive_parser::{game_id_from_path, read_html_file, ArchiveParser};
use std::path::PathBuf;

fn main() {
	let file_path = std::env::args().nth(1).map_or_else(|| PathBuf::from("tests/fixtures/show.html"), PathBuf::from);
	let game_id = game_id_from_path(&file_path).unwrap_or_default();

	let parser = match ArchiveParser::new("Alex") {
		Ok(parser) => parser,
		Err(e) => {
			eprintln!("Failed to build the parser: {}", e);
			return;
		}
	};

	match read_html_file(&file_path) {
		Ok(document) => {
			let record = parser.parse_game(game_id, &document);
			match serde_json::to_string_pretty(&record) {
				Ok(json) => println!("{}", json),
				Err(e) => eprintln!("Failed to render the game: {}", e),
			}
		}
		Err(e) => {
			eprintln!("Failed to read the HTML file: {}", e);
		}
	}
}
