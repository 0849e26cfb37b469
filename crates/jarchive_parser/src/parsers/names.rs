use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMatch {
	/// `(full name, nickname)`
	pub pairs: Vec<(String, String)>,
	pub unmatched_names: Vec<String>,
	pub unmatched_nicknames: Vec<String>,
}

impl NameMatch {
	pub fn is_complete(&self) -> bool {
		self.unmatched_names.is_empty()
	}

	pub fn nickname_for(&self, name: &str) -> Option<&str> {
		self.pairs.iter().find(|(n, _)| n == name).map(|(_, nick)| nick.as_str())
	}

	pub fn name_for(&self, nickname: &str) -> Option<&str> {
		self.pairs.iter().find(|(_, nick)| nick == nickname).map(|(n, _)| n.as_str())
	}
}

pub fn unique_prefix_match<S: AsRef<str>>(name: &str, candidates: &[S]) -> Option<usize> {
	let mut prefix = String::with_capacity(name.len());
	for ch in name.chars() {
		prefix.push(ch);
		let mut hits = candidates.iter().enumerate().filter(|(_, c)| c.as_ref().starts_with(prefix.as_str()));
		match (hits.next(), hits.next()) {
			(Some((idx, _)), None) => return Some(idx),
			(None, _) => return None,
			_ => {}
		}
	}
	None
}

// names are visited last to first at every step
pub fn reconcile_names(names: &[String], nicknames: &[String]) -> NameMatch {
	let mut names_left: Vec<usize> = (0..names.len()).collect();
	let mut nicks_left: Vec<usize> = (0..nicknames.len()).collect();
	let mut matched: Vec<(usize, usize)> = Vec::new();

	let mut take = |name_idx: usize, nick_idx: usize, names_left: &mut Vec<usize>, nicks_left: &mut Vec<usize>| {
		names_left.retain(|&i| i != name_idx);
		nicks_left.retain(|&j| j != nick_idx);
		matched.push((name_idx, nick_idx));
	};

	for name_idx in names_left.clone().into_iter().rev() {
		let Some(first) = names[name_idx].split_whitespace().next() else {
			continue;
		};
		let exact = nicks_left.iter().copied().find(|&j| nicknames[j] == first);
		if let Some(nick_idx) = exact {
			take(name_idx, nick_idx, &mut names_left, &mut nicks_left);
		}
	}

	if names_left.len() == 1 && nicks_left.len() == 1 {
		let (name_idx, nick_idx) = (names_left[0], nicks_left[0]);
		debug!(name = %names[name_idx], nickname = %nicknames[nick_idx], "pairing last remaining name");
		take(name_idx, nick_idx, &mut names_left, &mut nicks_left);
	}

	for name_idx in names_left.clone().into_iter().rev() {
		let candidates: Vec<&str> = nicks_left.iter().map(|&j| nicknames[j].as_str()).collect();
		if let Some(k) = unique_prefix_match(&names[name_idx], &candidates) {
			let nick_idx = nicks_left[k];
			debug!(name = %names[name_idx], nickname = %nicknames[nick_idx], "paired by unique prefix");
			take(name_idx, nick_idx, &mut names_left, &mut nicks_left);
		}
	}

	matched.sort_unstable();
	NameMatch {
		pairs: matched.into_iter().map(|(i, j)| (names[i].clone(), nicknames[j].clone())).collect(),
		unmatched_names: names_left.into_iter().map(|i| names[i].clone()).collect(),
		unmatched_nicknames: nicks_left.into_iter().map(|j| nicknames[j].clone()).collect(),
	}
}
