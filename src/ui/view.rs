//! Explicit view states for the search and suggestion areas.
//!
//! Every change to what the search area shows goes through
//! [`ViewState::transition`]; the renderer only reads these values.

use std::time::Duration;

use searchbox_api::SearchHit;

use super::config::UiLabels;

/// What the search area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
	#[default]
	Idle,
	Loading {
		query: String,
	},
	Results {
		query: String,
		hits: Vec<SearchHit>,
		elapsed: Duration,
	},
	NoResults {
		elapsed: Duration,
	},
	Error,
}

/// Inputs that move the search area between states.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
	Started { query: String },
	Completed { hits: Vec<SearchHit>, elapsed: Duration },
	Failed,
}

impl ViewState {
	/// Apply `event`. Completions only land on a loading view; anything else
	/// leaves the state untouched.
	#[must_use]
	pub fn transition(self, event: SearchEvent) -> Self {
		match (self, event) {
			(_, SearchEvent::Started { query }) => Self::Loading { query },
			(Self::Loading { query }, SearchEvent::Completed { hits, elapsed }) => {
				if hits.is_empty() {
					Self::NoResults { elapsed }
				} else {
					Self::Results {
						query,
						hits,
						elapsed,
					}
				}
			}
			(Self::Loading { .. }, SearchEvent::Failed) => Self::Error,
			(state, _) => state,
		}
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}

	#[must_use]
	pub fn shows_no_results(&self) -> bool {
		matches!(self, Self::NoResults { .. })
	}

	#[must_use]
	pub fn hits(&self) -> &[SearchHit] {
		match self {
			Self::Results { hits, .. } => hits,
			_ => &[],
		}
	}

	/// Query whose occurrences are emphasized in result previews.
	#[must_use]
	pub fn highlight_query(&self) -> Option<&str> {
		match self {
			Self::Results { query, .. } => Some(query),
			_ => None,
		}
	}

	/// Text of the count/timing line, if the state has one.
	#[must_use]
	pub fn stats_line(&self, labels: &UiLabels) -> Option<String> {
		match self {
			Self::Idle | Self::Loading { .. } => None,
			Self::Results { hits, elapsed, .. } => Some(labels.results_found(hits.len(), *elapsed)),
			Self::NoResults { elapsed } => Some(labels.results_found(0, *elapsed)),
			Self::Error => Some(labels.search_failed.clone()),
		}
	}
}

/// What the suggestion dropdown currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionsView {
	#[default]
	Hidden,
	Items {
		/// Query the suggestions were fetched for.
		query: String,
		items: Vec<String>,
	},
	/// The server had nothing to suggest.
	Empty,
	/// The request failed.
	Failed,
}

impl SuggestionsView {
	#[must_use]
	pub fn is_visible(&self) -> bool {
		!matches!(self, Self::Hidden)
	}

	/// Selectable entries; placeholders have none.
	#[must_use]
	pub fn items(&self) -> &[String] {
		match self {
			Self::Items { items, .. } => items,
			_ => &[],
		}
	}

	/// Number of rows the dropdown needs.
	#[must_use]
	pub fn row_count(&self) -> usize {
		match self {
			Self::Hidden => 0,
			Self::Items { items, .. } => items.len(),
			Self::Empty | Self::Failed => 1,
		}
	}
}

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Input,
	Suggestions,
	Results,
}
