use super::answers::{parse_annotation, Annotation};
use crate::error::ParserError;
use crate::query_selectors::{element_text, has_class, select_first, select_text, ParsedSelectors};
use crate::schema::{ClueValue, Round, CATEGORIES_PER_ROUND};
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClue {
	pub round: Round,
	pub category: String,
	pub value: ClueValue,
	pub daily_double: bool,
	pub position: Option<u32>,
	pub text: String,
	pub annotation: Annotation,
}

/// `$800` or `DD: $1,200`
pub fn parse_clue_value(text: &str) -> Result<i64, ParserError> {
	let digits: String = text
		.trim()
		.trim_start_matches(|c: char| !c.is_ascii_digit())
		.chars()
		.filter(|&c| c != ',')
		.collect();
	digits.parse::<i64>().map_err(|e| ParserError::invalid_clue_value(text, e))
}

fn order_number(cell: &ElementRef, selectors: &ParsedSelectors) -> Option<u32> {
	let order = select_first(cell, &selectors.clue_order_number)?;
	let text = select_text(&order, &selectors.link).unwrap_or_else(|| element_text(&order));
	text.parse().ok()
}

// skip the `_r` response cell of newer pages
fn clue_text(scope: &ElementRef, selectors: &ParsedSelectors) -> Option<String> {
	scope
		.select(&selectors.clue_text)
		.find(|el| !el.value().id().is_some_and(|id| id.ends_with("_r")))
		.map(|el| element_text(&el))
}

fn annotation(scope: &ElementRef, selectors: &ParsedSelectors, host: &str) -> Result<Annotation, ParserError> {
	let attr = scope
		.select(&selectors.annotation)
		.find_map(|el| el.value().attr("onmouseover"))
		.ok_or(ParserError::missing("clue annotation"))?;
	parse_annotation(attr, selectors, host)
}

pub fn parse_clue_cell(cell: &ElementRef, round: Round, category: &str, selectors: &ParsedSelectors, host: &str) -> Result<ParsedClue, ParserError> {
	let value_cell = select_first(cell, &selectors.clue_value).ok_or(ParserError::missing("clue value"))?;
	let daily_double = has_class(&value_cell, "clue_value_daily_double");
	let value = parse_clue_value(&element_text(&value_cell))?;
	let text = clue_text(cell, selectors).ok_or(ParserError::missing("clue text"))?;

	Ok(ParsedClue {
		round,
		category: category.to_string(),
		value: ClueValue::Amount(value),
		daily_double,
		position: order_number(cell, selectors),
		text,
		annotation: annotation(cell, selectors, host)?,
	})
}

pub fn parse_round(document: &Html, round: Round, selectors: &ParsedSelectors, host: &str) -> Option<Vec<ParsedClue>> {
	let container = document.select(selectors.round_container(round)?).next()?;

	let categories: Vec<String> = container.select(&selectors.category_name).map(|el| element_text(&el)).collect();
	if categories.len() != CATEGORIES_PER_ROUND {
		warn!(%round, found = categories.len(), "unexpected number of categories");
	}

	let mut clues = Vec::new();
	for (cell_idx, cell) in container.select(&selectors.clue_cell).enumerate() {
		// Clues are laid out row by row, so every cell, revealed or not, moves the cursor.
		let cursor = cell_idx % CATEGORIES_PER_ROUND;
		if element_text(&cell).is_empty() {
			debug!(%round, cell = cell_idx, "clue was never revealed");
			continue;
		}

		let Some(category) = categories.get(cursor) else {
			let e = ParserError::MissingCategory {
				round: round.number(),
				position: cursor,
			};
			warn!(error = %e, "skipping clue");
			continue;
		};

		match parse_clue_cell(&cell, round, category, selectors, host) {
			Ok(clue) => clues.push(clue),
			Err(e) => warn!(%round, cell = cell_idx, error = %e, "skipping clue"),
		}
	}
	Some(clues)
}

pub fn parse_final_round(document: &Html, selectors: &ParsedSelectors, host: &str) -> Option<Result<ParsedClue, ParserError>> {
	let table = document.select(&selectors.final_round).next()?;

	let parse = || {
		let category = select_text(&table, &selectors.category_name).ok_or(ParserError::missing("final round category"))?;
		let text = clue_text(&table, selectors).ok_or(ParserError::missing("final round clue text"))?;
		let mut annotation = annotation(&table, selectors, host)?;
		// Every player writes down a final response, so no single answerer is recorded.
		annotation.right = None;
		annotation.wrong.clear();

		Ok(ParsedClue {
			round: Round::Final,
			category,
			value: ClueValue::NoPresetValue,
			daily_double: false,
			position: None,
			text,
			annotation,
		})
	};
	Some(parse())
}
