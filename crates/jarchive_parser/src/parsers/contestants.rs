use crate::error::ParserError;
use crate::query_selectors::{element_text, select_first, ParsedSelectors, TextPatterns};
use scraper::{ElementRef, Html};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contestant {
	pub player_id: i64,
	pub name: String,
	pub occupation: Option<String>,
	pub location: Option<String>,
	pub originally_from: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Biography {
	pub occupation: Option<String>,
	pub location: Option<String>,
	pub originally_from: bool,
}

/// Splits the clause that trails the name link, e.g. `, an attorney originally from Boise, Idaho`.
pub fn parse_biography(clause: &str, patterns: &TextPatterns) -> Option<Biography> {
	let caps = patterns.biography.captures(clause.trim())?;
	Some(Biography {
		occupation: caps.get(1).map(|m| m.as_str().to_string()),
		originally_from: caps.get(2).is_some(),
		location: caps.get(3).map(|m| m.as_str().to_string()),
	})
}

pub fn parse_contestant(paragraph: &ElementRef, selectors: &ParsedSelectors, patterns: &TextPatterns) -> Result<Contestant, ParserError> {
	let link = select_first(paragraph, &selectors.link).ok_or(ParserError::missing("contestant link"))?;
	let name = element_text(&link);
	let player_id = link
		.value()
		.attr("href")
		.and_then(|href| patterns.player_id.captures(href))
		.and_then(|caps| caps.get(1))
		.and_then(|m| m.as_str().parse::<i64>().ok())
		.ok_or(ParserError::missing("contestant player_id"))?;

	let full = element_text(paragraph);
	let clause = full.find(&name).map_or(full.as_str(), |idx| &full[idx + name.len()..]);
	let bio = parse_biography(clause, patterns).unwrap_or_else(|| {
		warn!(%name, %clause, "unrecognised contestant biography");
		Biography::default()
	});

	Ok(Contestant {
		player_id,
		name,
		occupation: bio.occupation,
		location: bio.location,
		originally_from: bio.originally_from,
	})
}

pub fn parse_contestants(document: &Html, selectors: &ParsedSelectors, patterns: &TextPatterns) -> Vec<Contestant> {
	document
		.select(&selectors.contestant)
		.filter_map(|p| match parse_contestant(&p, selectors, patterns) {
			Ok(contestant) => Some(contestant),
			Err(e) => {
				warn!(error = %e, "skipping contestant");
				None
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_biography_variants() {
		let patterns = TextPatterns::new().unwrap();

		let bio = parse_biography(", a software engineer from Salt Lake City, Utah (whose 1-day cash winnings total $20,000)", &patterns).unwrap();
		assert_eq!(bio.occupation.as_deref(), Some("software engineer"));
		assert_eq!(bio.location.as_deref(), Some("Salt Lake City, Utah"));
		assert!(!bio.originally_from);

		let bio = parse_biography(", an attorney originally from Boise, Idaho", &patterns).unwrap();
		assert_eq!(bio.occupation.as_deref(), Some("attorney"));
		assert_eq!(bio.location.as_deref(), Some("Boise, Idaho"));
		assert!(bio.originally_from);

		let bio = parse_biography(", homemaker from Reno, Nevada", &patterns).unwrap();
		assert_eq!(bio.occupation.as_deref(), Some("homemaker"));

		assert!(parse_biography("who shall remain nameless", &patterns).is_none());
	}

	#[test]
	fn test_parse_contestants_reads_player_ids() {
		let html = Html::parse_document(
			r#"<div id="contestants">
			<p class="contestants"><a href="showplayer.php?player_id=9015">Ken Jennings</a>, a software engineer from Salt Lake City, Utah</p>
			<p class="contestants"><a href="showplayer.php">Nobody Known</a>, a writer from Nowhere</p>
			<p class="contestants"><a href="showplayer.php?player_id=12">Ann Lee</a>, a librarian originally from Tulsa, Oklahoma (returning champion)</p>
			</div>"#,
		);
		let selectors = ParsedSelectors::new().unwrap();
		let patterns = TextPatterns::new().unwrap();

		let contestants = parse_contestants(&html, &selectors, &patterns);

		assert_eq!(contestants.len(), 2);
		assert_eq!(contestants[0].player_id, 9015);
		assert_eq!(contestants[0].name, "Ken Jennings");
		assert_eq!(contestants[1].player_id, 12);
		assert_eq!(contestants[1].location.as_deref(), Some("Tulsa, Oklahoma"));
		assert!(contestants[1].originally_from);
	}
}
