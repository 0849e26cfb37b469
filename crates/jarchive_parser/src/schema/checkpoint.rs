use serde::{Deserialize, Serialize};

/// The five score snapshots a game page may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Checkpoint {
	FirstBreak,
	EndOfJeopardy,
	EndOfDoubleJeopardy,
	Final,
	Coryat,
}

impl Checkpoint {
	pub const ALL: [Checkpoint; 5] = [
		Checkpoint::FirstBreak,
		Checkpoint::EndOfJeopardy,
		Checkpoint::EndOfDoubleJeopardy,
		Checkpoint::Final,
		Checkpoint::Coryat,
	];

	/// Leading text of the `h3` heading that precedes the checkpoint table.
	pub fn heading_prefix(self) -> &'static str {
		match self {
			Checkpoint::FirstBreak => "Scores at the first commercial break",
			Checkpoint::EndOfJeopardy => "Scores at the end of the Jeopardy! Round",
			Checkpoint::EndOfDoubleJeopardy => "Scores at the end of the Double Jeopardy! Round",
			Checkpoint::Final => "Final scores",
			Checkpoint::Coryat => "Coryat scores",
		}
	}
}
