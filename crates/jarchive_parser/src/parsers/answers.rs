use super::names::unique_prefix_match;
use crate::error::ParserError;
use crate::query_selectors::{annotation_fragment, element_text, free_text, select_text, ParsedSelectors};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Labels put in the "wrong" cells when nobody rang in. They are not player names.
pub const NO_RESPONSE_LABELS: [&str; 2] = ["Triple Stumper", "Quadruple Stumper"];

pub const DEFAULT_HOST_NAME: &str = "Alex";

const GUESS_DELIMITERS: [char; 4] = [':', ';', ',', '-'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
	pub speaker: Option<String>,
	pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrongGuess {
	pub nickname: String,
	pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
	pub correct_response: String,
	pub right: Option<String>,
	pub wrong: Vec<WrongGuess>,
}

/// Top-level parenthesized groups. Unclosed groups are dropped.
pub fn paren_groups(text: &str) -> Vec<&str> {
	let mut groups = Vec::new();
	let mut depth = 0usize;
	let mut start = 0usize;

	for (idx, ch) in text.char_indices() {
		match ch {
			'(' => {
				if depth == 0 {
					start = idx + ch.len_utf8();
				}
				depth += 1;
			}
			')' if depth > 0 => {
				depth -= 1;
				if depth == 0 {
					groups.push(&text[start..idx]);
				}
			}
			_ => {}
		}
	}
	groups
}

pub fn split_guess(group: &str) -> Guess {
	match group.find(&GUESS_DELIMITERS[..]) {
		Some(idx) => {
			let speaker = group[..idx].trim();
			Guess {
				speaker: (!speaker.is_empty()).then(|| speaker.to_string()),
				text: group[idx + 1..].trim().to_string(),
			}
		}
		None => Guess {
			speaker: None,
			text: group.trim().to_string(),
		},
	}
}

fn attribute_speaker(speaker: &str, wrong: &[String], host: &str) -> Option<usize> {
	let exact = wrong.iter().position(|w| w == speaker);
	if speaker == host {
		return exact;
	}
	exact.or_else(|| unique_prefix_match(speaker, wrong))
}

fn speaks_for(speaker: &str, nickname: &str) -> bool {
	speaker == nickname || unique_prefix_match(speaker, &[nickname]).is_some()
}

fn sole_guess<'a>(nickname: &str, right: Option<&str>, guesses: &'a [Guess], host: &str) -> Option<&'a Guess> {
	let eligible = |g: &&Guess| match g.speaker.as_deref() {
		Some(speaker) => speaker != host && !right.is_some_and(|r| speaks_for(speaker, r)),
		None => true,
	};

	if let Some(named) = guesses.iter().find(|g| g.speaker.as_deref() == Some(nickname)) {
		return Some(named);
	}
	if let Some(named) = guesses.iter().filter(eligible).find(|g| g.speaker.as_deref().is_some_and(|s| speaks_for(s, nickname))) {
		return Some(named);
	}

	let mut rest = guesses.iter().filter(eligible);
	match (rest.next(), rest.next()) {
		(Some(only), None) => Some(only),
		_ => None,
	}
}

pub fn attribute_guesses(right: Option<&str>, wrong: &[String], guesses: &[Guess], host: &str) -> Vec<WrongGuess> {
	let mut texts: Vec<Option<String>> = vec![None; wrong.len()];

	if let [nickname] = wrong {
		texts[0] = sole_guess(nickname, right, guesses, host).map(|g| g.text.clone());
	} else {
		for guess in guesses {
			let Some(speaker) = guess.speaker.as_deref() else {
				debug!(text = %guess.text, "dropping unattributed guess");
				continue;
			};
			match attribute_speaker(speaker, wrong, host) {
				Some(idx) if texts[idx].is_none() => texts[idx] = Some(guess.text.clone()),
				Some(idx) => debug!(nickname = %wrong[idx], text = %guess.text, "player already has a guess"),
				None => debug!(%speaker, text = %guess.text, "dropping unattributable guess"),
			}
		}
	}

	wrong
		.iter()
		.zip(texts)
		.map(|(nickname, text)| WrongGuess {
			nickname: nickname.clone(),
			text: text.filter(|t| !t.is_empty()),
		})
		.collect()
}

pub fn parse_annotation(attr: &str, selectors: &ParsedSelectors, host: &str) -> Result<Annotation, ParserError> {
	let fragment = annotation_fragment(attr);
	let root = fragment.root_element();

	let correct_response = select_text(&root, &selectors.correct_response).ok_or(ParserError::missing("correct response"))?;
	let right = select_text(&root, &selectors.right_answerer).filter(|n| !n.is_empty());
	let wrong: Vec<String> = root
		.select(&selectors.wrong_answerer)
		.map(|el| element_text(&el))
		.filter(|n| !n.is_empty() && !NO_RESPONSE_LABELS.contains(&n.as_str()))
		.collect();

	let remarks = free_text(&fragment);
	let guesses: Vec<Guess> = paren_groups(&remarks).into_iter().map(split_guess).collect();

	let wrong = attribute_guesses(right.as_deref(), &wrong, &guesses, host);
	Ok(Annotation { correct_response, right, wrong })
}
