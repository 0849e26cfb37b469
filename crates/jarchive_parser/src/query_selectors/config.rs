pub mod config {
	use crate::error::ParserError;
	use crate::schema::Round;
	use scraper::Selector;

	#[derive(Debug, Clone, Copy)]
	pub enum ArchiveSelectors {
		Title,
		GameComments,
		Contestant,
		Link,
		Heading,
		ScoreNickname,
		ScoreAmount,
		JeopardyRound,
		DoubleJeopardyRound,
		CategoryName,
		ClueCell,
		ClueValue,
		ClueOrderNumber,
		ClueText,
		Annotation,
		FinalRound,
		CorrectResponse,
		RightAnswerer,
		WrongAnswerer,
	}

	impl ArchiveSelectors {
		pub fn selector(&self) -> &'static str {
			match self {
				ArchiveSelectors::Title => "title",
				ArchiveSelectors::GameComments => "#game_comments",
				ArchiveSelectors::Contestant => "p.contestants",
				ArchiveSelectors::Link => "a",
				ArchiveSelectors::Heading => "h3",
				ArchiveSelectors::ScoreNickname => "td.score_player_nickname",
				ArchiveSelectors::ScoreAmount => "td.score_positive, td.score_negative",
				ArchiveSelectors::JeopardyRound => "#jeopardy_round",
				ArchiveSelectors::DoubleJeopardyRound => "#double_jeopardy_round",
				ArchiveSelectors::CategoryName => "td.category_name",
				ArchiveSelectors::ClueCell => "td.clue",
				ArchiveSelectors::ClueValue => "td.clue_value, td.clue_value_daily_double",
				ArchiveSelectors::ClueOrderNumber => "td.clue_order_number",
				ArchiveSelectors::ClueText => "td.clue_text",
				ArchiveSelectors::Annotation => "div[onmouseover]",
				ArchiveSelectors::FinalRound => "table.final_round",
				ArchiveSelectors::CorrectResponse => "em.correct_response",
				ArchiveSelectors::RightAnswerer => "td.right",
				ArchiveSelectors::WrongAnswerer => "td.wrong",
			}
		}

		pub fn parse(self) -> Result<Selector, ParserError> {
			Selector::parse(self.selector()).map_err(|_| ParserError::InvalidSelector(self.selector().to_string()))
		}
	}

	/// Every selector the extractors need, compiled once per run.
	pub struct ParsedSelectors {
		pub title: Selector,
		pub game_comments: Selector,
		pub contestant: Selector,
		pub link: Selector,
		pub heading: Selector,
		pub score_nickname: Selector,
		pub score_amount: Selector,
		pub jeopardy_round: Selector,
		pub double_jeopardy_round: Selector,
		pub category_name: Selector,
		pub clue_cell: Selector,
		pub clue_value: Selector,
		pub clue_order_number: Selector,
		pub clue_text: Selector,
		pub annotation: Selector,
		pub final_round: Selector,
		pub correct_response: Selector,
		pub right_answerer: Selector,
		pub wrong_answerer: Selector,
	}

	impl ParsedSelectors {
		pub fn new() -> Result<Self, ParserError> {
			Ok(ParsedSelectors {
				title: ArchiveSelectors::Title.parse()?,
				game_comments: ArchiveSelectors::GameComments.parse()?,
				contestant: ArchiveSelectors::Contestant.parse()?,
				link: ArchiveSelectors::Link.parse()?,
				heading: ArchiveSelectors::Heading.parse()?,
				score_nickname: ArchiveSelectors::ScoreNickname.parse()?,
				score_amount: ArchiveSelectors::ScoreAmount.parse()?,
				jeopardy_round: ArchiveSelectors::JeopardyRound.parse()?,
				double_jeopardy_round: ArchiveSelectors::DoubleJeopardyRound.parse()?,
				category_name: ArchiveSelectors::CategoryName.parse()?,
				clue_cell: ArchiveSelectors::ClueCell.parse()?,
				clue_value: ArchiveSelectors::ClueValue.parse()?,
				clue_order_number: ArchiveSelectors::ClueOrderNumber.parse()?,
				clue_text: ArchiveSelectors::ClueText.parse()?,
				annotation: ArchiveSelectors::Annotation.parse()?,
				final_round: ArchiveSelectors::FinalRound.parse()?,
				correct_response: ArchiveSelectors::CorrectResponse.parse()?,
				right_answerer: ArchiveSelectors::RightAnswerer.parse()?,
				wrong_answerer: ArchiveSelectors::WrongAnswerer.parse()?,
			})
		}

		/// Container of a regular round. The final round has its own table and no container id.
		pub fn round_container(&self, round: Round) -> Option<&Selector> {
			match round {
				Round::Jeopardy => Some(&self.jeopardy_round),
				Round::DoubleJeopardy => Some(&self.double_jeopardy_round),
				Round::Final => None,
			}
		}
	}

	#[cfg(test)]
	mod tests {
		use super::*;

		#[test]
		fn test_all_selectors_compile() {
			let selectors = ParsedSelectors::new().unwrap();
			assert!(selectors.round_container(Round::DoubleJeopardy).is_some());
			assert!(selectors.round_container(Round::Final).is_none());
		}
	}
}
