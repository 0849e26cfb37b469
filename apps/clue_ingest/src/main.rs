mod batch;
mod config;

use crate::batch::{discover_documents, run_batch};
use crate::config::{database_url, Cli, Command, ExportArgs, IngestArgs};
use anyhow::Context;
use clap::Parser;
use clue_store::{export_tables, ClueRepository, JsonLinesSink, RecordSink};
use jarchive_parser::ArchiveParser;
use std::io::BufWriter;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let cli = Cli::parse();
	init_tracing(&cli)?;

	match cli.command {
		Command::Ingest(args) => ingest(args).await,
		Command::Export(args) => export(args).await,
	}
}

async fn ingest(args: IngestArgs) -> anyhow::Result<()> {
	let documents = discover_documents(&args.dir, args.number_of_files).with_context(|| format!("could not read {}", args.dir.display()))?;
	info!(documents = documents.len(), dir = %args.dir.display(), "starting batch");

	let parser = ArchiveParser::new(args.host_name).context("could not build the page parser")?;

	let mut sink: Box<dyn RecordSink> = if args.stdout {
		Box::new(JsonLinesSink::new(BufWriter::new(std::io::stdout())))
	} else {
		let url = database_url(&args.database);
		let mut repo = ClueRepository::connect(&url).await.with_context(|| format!("could not connect to {}", url))?;
		if args.reset {
			repo.reset_schema().await.context("could not reset the schema")?;
		} else {
			repo.init_schema().await.context("could not create the schema")?;
		}
		Box::new(repo)
	};

	let summary = run_batch(&documents, &parser, sink.as_mut()).await;
	sink.finish().await.context("could not finish writing")?;

	info!(parsed = summary.parsed, failed = summary.failed, complete = summary.complete, "All done");
	Ok(())
}

async fn export(args: ExportArgs) -> anyhow::Result<()> {
	let url = database_url(&args.database);
	let repo = ClueRepository::connect(&url).await.with_context(|| format!("could not connect to {}", url))?;

	let paths = export_tables(&repo.pool, &args.out_dir).await.context("could not export tables")?;
	info!(files = paths.len(), out_dir = %args.out_dir.display(), "All done");
	Ok(())
}

/// Logs go to stderr so JSON lines on stdout stay machine readable.
fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::try_new(cli.rust_log.as_deref().unwrap_or("info")).context("invalid log filter")?;

	tracing_subscriber::registry()
		.with(if cli.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_writer(std::io::stderr)
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_writer(std::io::stderr)
					.with_filter(filter),
			)
		})
		.try_init()
		.context("could not install the tracing subscriber")?;
	Ok(())
}
