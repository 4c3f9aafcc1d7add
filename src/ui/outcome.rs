use searchbox_api::SearchHit;
use serde::Serialize;

/// How a search box session ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	/// `true` when a result was accepted, `false` when the user left.
	pub accepted: bool,
	/// Trimmed contents of the input field at exit.
	pub query: String,
	pub selection: Option<SearchHit>,
}
