use std::time::Duration;

/// Strings shown by the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub button: String,
	pub loading: String,
	pub no_suggestions: String,
	pub suggestions_failed: String,
	pub empty_query_alert: String,
	pub alert_title: String,
	pub no_results: String,
	pub search_failed: String,
	pub score: String,
	pub results_title: String,
	pub dismiss_hint: String,
	pub placeholder: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			button: "Search".to_string(),
			loading: "Searching…".to_string(),
			no_suggestions: "No matching suggestions".to_string(),
			suggestions_failed: "Failed to load suggestions".to_string(),
			empty_query_alert: "Please enter a search query!".to_string(),
			alert_title: "Notice".to_string(),
			no_results: "No results found".to_string(),
			search_failed: "An error occurred during search, please try again!".to_string(),
			score: "Relevance score".to_string(),
			results_title: "Results".to_string(),
			dismiss_hint: "Press any key to continue".to_string(),
			placeholder: "Type to search".to_string(),
		}
	}
}

impl UiLabels {
	/// Stats line shown after a search completes.
	#[must_use]
	pub fn results_found(&self, count: usize, elapsed: Duration) -> String {
		let noun = if count == 1 { "result" } else { "results" };
		format!(
			"Found {count} {noun} (search time: {:.2} s)",
			elapsed.as_secs_f64()
		)
	}
}

/// Behaviour and text for one search box session.
#[derive(Debug, Clone)]
pub struct UiConfig {
	/// Prompt shown left of the input field.
	pub title: String,
	pub labels: UiLabels,
	/// Quiet period before a suggestion request is sent.
	pub suggest_debounce: Duration,
	/// Minimum trimmed query length, in characters, that asks for suggestions.
	pub min_suggest_chars: usize,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Search".to_string(),
			labels: UiLabels::default(),
			suggest_debounce: Duration::from_millis(300),
			min_suggest_chars: 2,
		}
	}
}
