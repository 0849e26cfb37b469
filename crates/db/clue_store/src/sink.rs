use crate::core::ClueRepository;
use crate::error::Result;
use async_trait::async_trait;
use jarchive_parser::schema::GameRecord;
use std::io::Write;

/// Destination for parsed games. Games arrive one at a time, in batch order.
#[async_trait]
pub trait RecordSink: Send {
	async fn write_game(&mut self, record: &GameRecord) -> Result<()>;

	/// Called once after the last game.
	async fn finish(&mut self) -> Result<()> {
		Ok(())
	}
}

#[async_trait]
impl RecordSink for ClueRepository {
	async fn write_game(&mut self, record: &GameRecord) -> Result<()> {
		self.insert_game(record).await
	}

	async fn finish(&mut self) -> Result<()> {
		let counts = self.counts().await?;
		tracing::info!(?counts, "database totals");
		self.pool.close().await;
		Ok(())
	}
}

/// Dry run output: one JSON object per game, one game per line.
pub struct JsonLinesSink<W> {
	writer: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}

#[async_trait]
impl<W: Write + Send> RecordSink for JsonLinesSink<W> {
	async fn write_game(&mut self, record: &GameRecord) -> Result<()> {
		serde_json::to_writer(&mut self.writer, record)?;
		self.writer.write_all(b"\n")?;
		Ok(())
	}

	async fn finish(&mut self) -> Result<()> {
		self.writer.flush()?;
		Ok(())
	}
}
