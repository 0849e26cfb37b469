use clap::{Args, Parser, Subcommand};
use jarchive_parser::parsers::DEFAULT_HOST_NAME;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "clue_ingest", author, version, about = "Extracts J! Archive game pages into sqlite", long_about = None)]
pub struct Cli {
	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false", global = true)]
	pub log_json: bool,

	/// Log filter, e.g. `info` or `jarchive_parser=debug`
	#[arg(long, env = "RUST_LOG", global = true)]
	pub rust_log: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Parse a folder of game pages and store the records
	Ingest(IngestArgs),
	/// Write every table of the database to CSV files
	Export(ExportArgs),
}

#[derive(Debug, Args)]
pub struct IngestArgs {
	/// Folder holding `<game id>.html` pages
	#[arg(long, env = "ARCHIVE_DIR", value_name = "DIR")]
	pub dir: PathBuf,

	/// Only process the first N pages, by game id
	#[arg(long, env = "NUMBER_OF_FILES")]
	pub number_of_files: Option<usize>,

	/// Sqlite database file
	#[arg(long, env = "DATABASE_URL", default_value = "clues.db")]
	pub database: String,

	/// Print the records as JSON lines instead of writing the database
	#[arg(long)]
	pub stdout: bool,

	/// Drop and recreate every table before ingesting
	#[arg(long, conflicts_with = "stdout")]
	pub reset: bool,

	/// Name the host goes by in the response remarks
	#[arg(long, env = "ARCHIVE_HOST_NAME", default_value = DEFAULT_HOST_NAME)]
	pub host_name: String,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
	/// Sqlite database file
	#[arg(long, env = "DATABASE_URL", default_value = "clues.db")]
	pub database: String,

	/// Folder the CSV files are written to
	#[arg(long, value_name = "DIR")]
	pub out_dir: PathBuf,
}

/// Accepts either a bare file path or a full `sqlite:` url.
pub fn database_url(database: &str) -> String {
	if database.starts_with("sqlite:") {
		database.to_string()
	} else {
		format!("sqlite://{database}")
	}
}
