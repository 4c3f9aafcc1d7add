//! In-memory [`SearchApi`] used by the unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use searchbox_api::{ApiError, Endpoint, SearchApi, SearchHit, StatusCode};

/// Every call made against a [`FakeApi`], shared with the test body.
#[derive(Debug, Default)]
pub(crate) struct CallLog {
	calls: Mutex<Vec<(Endpoint, String)>>,
}

impl CallLog {
	fn record(&self, endpoint: Endpoint, query: &str) {
		self.calls.lock().unwrap().push((endpoint, query.to_string()));
	}

	pub(crate) fn queries(&self, endpoint: Endpoint) -> Vec<String> {
		self.calls
			.lock()
			.unwrap()
			.iter()
			.filter(|(recorded, _)| *recorded == endpoint)
			.map(|(_, query)| query.clone())
			.collect()
	}

	pub(crate) fn count(&self, endpoint: Endpoint) -> usize {
		self.queries(endpoint).len()
	}
}

/// Canned answers keyed by query. Unknown queries get an empty list.
#[derive(Debug, Default)]
pub(crate) struct FakeApi {
	suggestions: HashMap<String, Vec<String>>,
	hits: HashMap<String, Vec<SearchHit>>,
	failing: HashSet<Endpoint>,
	delays: HashMap<String, Duration>,
	calls: Arc<CallLog>,
}

impl FakeApi {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn with_suggestions<I, S>(mut self, query: &str, items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.suggestions
			.insert(query.to_string(), items.into_iter().map(Into::into).collect());
		self
	}

	pub(crate) fn with_hits(mut self, query: &str, hits: Vec<SearchHit>) -> Self {
		self.hits.insert(query.to_string(), hits);
		self
	}

	/// Make every call to `endpoint` answer HTTP 500.
	pub(crate) fn failing(mut self, endpoint: Endpoint) -> Self {
		self.failing.insert(endpoint);
		self
	}

	/// Hold the answer for `query` back by `delay`.
	pub(crate) fn with_delay(mut self, query: &str, delay: Duration) -> Self {
		self.delays.insert(query.to_string(), delay);
		self
	}

	pub(crate) fn call_log(&self) -> Arc<CallLog> {
		Arc::clone(&self.calls)
	}

	fn answer<T: Clone>(
		&self,
		endpoint: Endpoint,
		query: &str,
		canned: &HashMap<String, Vec<T>>,
	) -> Result<Vec<T>, ApiError> {
		self.calls.record(endpoint, query);
		if let Some(delay) = self.delays.get(query) {
			thread::sleep(*delay);
		}
		if self.failing.contains(&endpoint) {
			return Err(ApiError::Status {
				endpoint,
				status: StatusCode::INTERNAL_SERVER_ERROR,
			});
		}
		Ok(canned.get(query).cloned().unwrap_or_default())
	}
}

impl SearchApi for FakeApi {
	fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError> {
		self.answer(Endpoint::Suggest, query, &self.suggestions)
	}

	fn search(&self, query: &str) -> Result<Vec<SearchHit>, ApiError> {
		self.answer(Endpoint::Search, query, &self.hits)
	}
}
