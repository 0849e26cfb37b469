use clue_store::RecordSink;
use jarchive_parser::{game_id_from_path, read_html_file, ArchiveParser};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A game page waiting to be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	pub game_id: i64,
	pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
	pub parsed: usize,
	pub failed: usize,
	pub complete: usize,
}

/// Files in `dir` named by a numeric game id, lowest id first, capped at `limit`.
pub fn discover_documents(dir: &Path, limit: Option<usize>) -> std::io::Result<Vec<Document>> {
	let mut documents = Vec::new();
	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		if !path.is_file() {
			continue;
		}
		match game_id_from_path(&path) {
			Some(game_id) => documents.push(Document { game_id, path }),
			None => warn!(path = %path.display(), "skipping file without a numeric game id"),
		}
	}

	documents.sort_by_key(|d| d.game_id);
	if let Some(limit) = limit {
		documents.truncate(limit);
	}
	Ok(documents)
}

/// Parses each document and hands it to the sink, one at a time. A document that cannot be
/// read or stored is counted as failed and the batch moves on.
pub async fn run_batch<S: RecordSink + ?Sized>(documents: &[Document], parser: &ArchiveParser, sink: &mut S) -> BatchSummary {
	let mut summary = BatchSummary::default();
	let total = documents.len();

	for (idx, document) in documents.iter().enumerate() {
		info!(game_id = document.game_id, progress = %format!("{}/{}", idx + 1, total), "processing document");

		let record = match read_html_file(&document.path) {
			Ok(html) => parser.parse_game(document.game_id, &html),
			Err(e) => {
				warn!(path = %document.path.display(), error = %e, "could not read document");
				summary.failed += 1;
				continue;
			}
		};
		if let Err(e) = sink.write_game(&record).await {
			warn!(game_id = document.game_id, error = %e, "could not store game");
			summary.failed += 1;
			continue;
		}

		summary.parsed += 1;
		if record.game.complete {
			summary.complete += 1;
		}
	}
	summary
}
