use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::Sender;

use searchbox_api::Endpoint;
use tracing::debug;

use crate::systems::requests::RequestCommand;

/// UI-side bookkeeping for one request lane.
///
/// Only the answer to the most recently issued id is ever applied.
pub(crate) struct RequestRuntime {
	endpoint: Endpoint,
	tx: Sender<RequestCommand>,
	latest_id: Arc<AtomicU64>,
	next_id: u64,
	current_id: Option<u64>,
	current_query: Option<String>,
	in_flight: bool,
}

impl RequestRuntime {
	pub(crate) fn new(endpoint: Endpoint, tx: Sender<RequestCommand>, latest_id: Arc<AtomicU64>) -> Self {
		Self {
			endpoint,
			tx,
			latest_id,
			next_id: 0,
			current_id: None,
			current_query: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(RequestCommand::Shutdown);
	}

	fn advance(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.current_id = Some(id);
		self.latest_id.store(id, AtomicOrdering::Release);
		id
	}

	/// Send `query` to the lane under a fresh id.
	pub(crate) fn issue(&mut self, query: String) -> u64 {
		let id = self.advance();
		self.in_flight = true;
		self.current_query = Some(query.clone());
		if self.tx.send(RequestCommand::Dispatch { id, query }).is_err() {
			debug!(endpoint = %self.endpoint, id, "request lane is gone");
			self.in_flight = false;
		}
		id
	}

	/// Invalidate whatever is in flight without sending anything new.
	pub(crate) fn supersede(&mut self) {
		if self.in_flight {
			debug!(endpoint = %self.endpoint, "superseding in-flight request");
		}
		self.advance();
		self.in_flight = false;
		self.current_query = None;
	}

	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		self.in_flight && Some(id) == self.current_id
	}

	/// Mark the latest request as answered, returning the query it was for.
	pub(crate) fn complete(&mut self) -> Option<String> {
		self.in_flight = false;
		self.current_query.take()
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	#[cfg(test)]
	pub(crate) fn latest_id(&self) -> Option<u64> {
		self.current_id
	}
}
