use crate::error::ParserError;
use regex::Regex;

/// Free-text conventions of the archive pages that are matched with regular expressions.
pub struct TextPatterns {
	/// `, a software engineer originally from Tulsa, Oklahoma (whose ...)`
	pub biography: Regex,
	pub player_id: Regex,
	/// `J! Archive - Show #4680, aired 2004-12-31`
	pub title: Regex,
}

impl TextPatterns {
	pub fn new() -> Result<Self, ParserError> {
		Ok(TextPatterns {
			biography: Regex::new(r"^,(?: an?)? (.*?) (?:(originally) from|from) (.*?)(?: \(.*\))?$")?,
			player_id: Regex::new(r"player_id=(\d+)")?,
			title: Regex::new(r"Show #(\d+), aired (\d{4}-\d{2}-\d{2})")?,
		})
	}
}
