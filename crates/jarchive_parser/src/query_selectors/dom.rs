use scraper::{ElementRef, Html, Selector};

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
	s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn element_text(el: &ElementRef) -> String {
	normalize_ws(&el.text().collect::<String>())
}

pub fn has_class(el: &ElementRef, class: &str) -> bool {
	el.value().classes().any(|c| c == class)
}

pub fn select_first<'a>(scope: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
	scope.select(selector).next()
}

pub fn select_text(scope: &ElementRef, selector: &Selector) -> Option<String> {
	select_first(scope, selector).map(|el| element_text(&el))
}

pub fn next_element_sibling<'a>(el: &ElementRef<'a>) -> Option<ElementRef<'a>> {
	el.next_siblings().find_map(ElementRef::wrap)
}

/// Finds the `h3` whose text starts with `prefix` and returns the table that follows it.
pub fn table_after_heading<'a>(document: &'a Html, heading: &Selector, prefix: &str) -> Option<ElementRef<'a>> {
	document
		.select(heading)
		.find(|h| element_text(h).starts_with(prefix))
		.and_then(|h| next_element_sibling(&h))
		.filter(|el| el.value().name() == "table")
}

/// Pulls the markup argument out of `toggle('clue_J_1_1', 'clue_J_1_1_stuck', '<markup>')`.
/// Attributes in any other shape are returned trimmed.
pub fn toggle_payload(attr: &str) -> &str {
	let trimmed = attr.trim();
	let Some(mut rest) = trimmed.strip_prefix("toggle(") else {
		return trimmed;
	};
	for _ in 0..2 {
		match rest.find("', '") {
			Some(idx) => rest = &rest[idx + 4..],
			None => return trimmed,
		}
	}
	let rest = rest.trim_end();
	rest.strip_suffix("')").or_else(|| rest.strip_suffix(')')).unwrap_or(rest)
}

/// Undo the javascript string escaping applied to quotes inside the toggle argument.
pub fn unescape_js(s: &str) -> String {
	s.replace("\\'", "'").replace("\\\"", "\"")
}

/// Parses the annotation attribute of a clue as a nested document fragment.
pub fn annotation_fragment(attr: &str) -> Html {
	Html::parse_fragment(&unescape_js(toggle_payload(attr)))
}

/// Text of the fragment that sits outside the correct response and the right/wrong table.
pub fn free_text(fragment: &Html) -> String {
	let mut text = String::new();
	for node in fragment.root_element().descendants() {
		let Some(chunk) = node.value().as_text() else {
			continue;
		};
		let excluded = node.ancestors().filter_map(ElementRef::wrap).any(|el| {
			let name = el.value().name();
			name == "table" || (name == "em" && has_class(&el, "correct_response"))
		});
		if !excluded {
			text.push_str(chunk);
		}
	}
	normalize_ws(&text)
}
