use anyhow::Result;
use searchbox::SearchOutcome;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(hit) => hit.doc_path.clone(),
		None => "No selection".to_string(),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
