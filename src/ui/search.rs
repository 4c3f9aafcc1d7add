use std::mem;
use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use searchbox_api::Query;
use tracing::{debug, error};

use super::App;
use super::view::{Focus, SearchEvent, SuggestionsView};
use crate::systems::requests::{RequestOutcome, RequestResult};

impl<'a> App<'a> {
	/// Restart the suggestion quiet period after an edit of the input field.
	pub(crate) fn on_query_edited(&mut self, now: Instant) {
		let raw = self.query().to_string();
		self.debounce.schedule(raw, now);
	}

	/// Fire the debounced suggestion fetch once its quiet period is over.
	pub(crate) fn tick(&mut self, now: Instant) {
		if let Some(raw) = self.debounce.poll(now) {
			self.fetch_suggestions(&raw);
		}
	}

	/// Clear the dropdown and ask for suggestions when the query is long enough.
	pub(crate) fn fetch_suggestions(&mut self, raw: &str) {
		self.hide_suggestions();
		let Ok(query) = Query::parse(raw) else {
			return;
		};
		if query.char_len() < self.ui.min_suggest_chars {
			debug!(query = %query, "query too short for suggestions");
			return;
		}
		self.suggest.issue(query.into_string());
	}

	/// Validate `raw` and send it to the search endpoint.
	///
	/// An empty query raises the alert instead and nothing is sent.
	pub(crate) fn perform_search(&mut self, raw: &str) {
		self.dismiss_suggestions();
		let query = match Query::parse(raw) {
			Ok(query) => query,
			Err(err) => {
				debug!(%err, "search not sent");
				self.alert = Some(self.ui.labels.empty_query_alert.clone());
				return;
			}
		};

		let query = query.into_string();
		self.apply_search_event(SearchEvent::Started {
			query: query.clone(),
		});
		self.search.issue(query);
	}

	/// Search for whatever the input field holds.
	pub(crate) fn submit_search(&mut self) {
		let raw = self.query().to_string();
		self.perform_search(&raw);
	}

	/// Copy the suggestion at `index` into the input field and search for it.
	pub(crate) fn select_suggestion(&mut self, index: usize) {
		let Some(item) = self.suggestions.items().get(index).cloned() else {
			return;
		};
		self.set_query(item);
		self.set_focus(Focus::Input);
		self.submit_search();
	}

	/// Hide the dropdown and forget any pending or in-flight suggestion fetch.
	pub(crate) fn dismiss_suggestions(&mut self) {
		self.debounce.cancel();
		self.hide_suggestions();
	}

	fn hide_suggestions(&mut self) {
		self.suggest.supersede();
		self.suggestions = SuggestionsView::Hidden;
		self.suggestion_state.select(None);
		if self.focus == Focus::Suggestions {
			self.set_focus(Focus::Input);
		}
	}

	/// Drain completed requests from both lanes.
	pub(crate) fn pump_responses(&mut self) {
		loop {
			match self.responses().try_recv() {
				Ok(result) => self.handle_response(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	fn handle_response(&mut self, result: RequestResult) {
		let endpoint = result.endpoint();
		let RequestResult { id, elapsed, outcome } = result;
		match outcome {
			RequestOutcome::Suggestions(outcome) => {
				if !self.suggest.matches_latest(id) {
					debug!(%endpoint, id, "dropping stale response");
					return;
				}
				let query = self.suggest.complete().unwrap_or_default();
				self.suggestion_state.select(None);
				self.suggestions = match outcome {
					Ok(items) if items.is_empty() => SuggestionsView::Empty,
					Ok(items) => SuggestionsView::Items { query, items },
					Err(err) => {
						error!(error = %err, "failed to load suggestions");
						SuggestionsView::Failed
					}
				};
			}
			RequestOutcome::Hits(outcome) => {
				if !self.search.matches_latest(id) {
					debug!(%endpoint, id, "dropping stale response");
					return;
				}
				self.search.complete();
				let event = match outcome {
					Ok(hits) => {
						debug!(count = hits.len(), ?elapsed, "search completed");
						SearchEvent::Completed { hits, elapsed }
					}
					Err(err) => {
						error!(error = %err, "search failed");
						SearchEvent::Failed
					}
				};
				self.apply_search_event(event);
			}
		}
	}

	fn apply_search_event(&mut self, event: SearchEvent) {
		self.view = mem::take(&mut self.view).transition(event);
		self.result_state.select(None);
		if self.focus == Focus::Results {
			self.set_focus(Focus::Input);
		}
	}
}
