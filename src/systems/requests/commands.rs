use std::time::Duration;

use searchbox_api::{ApiError, Endpoint, SearchHit};

/// Commands understood by a request lane.
#[derive(Debug)]
pub(crate) enum RequestCommand {
	/// Call the lane's endpoint with an already trimmed query.
	Dispatch {
		/// Identifier that lets the UI match the answer to the request.
		id: u64,
		query: String,
	},
	/// Stop the lane thread.
	Shutdown,
}

/// Payload of a finished request.
#[derive(Debug)]
pub(crate) enum RequestOutcome {
	Suggestions(Result<Vec<String>, ApiError>),
	Hits(Result<Vec<SearchHit>, ApiError>),
}

/// A completed request reported back to the UI thread.
#[derive(Debug)]
pub(crate) struct RequestResult {
	pub id: u64,
	/// Wall-clock time between dispatch and response.
	pub elapsed: Duration,
	pub outcome: RequestOutcome,
}

impl RequestResult {
	pub(crate) fn endpoint(&self) -> Endpoint {
		match self.outcome {
			RequestOutcome::Suggestions(_) => Endpoint::Suggest,
			RequestOutcome::Hits(_) => Endpoint::Search,
		}
	}
}
