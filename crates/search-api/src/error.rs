use reqwest::StatusCode;
use thiserror::Error;

use crate::client::Endpoint;

/// Failures talking to one of the remote endpoints.
///
/// Callers treat every variant the same way; the split only exists so log
/// lines say what went wrong.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request never produced a response (connection refused, timeout, ...).
	#[error("{endpoint} request failed: {source}")]
	Request {
		endpoint: Endpoint,
		#[source]
		source: reqwest::Error,
	},

	/// The server answered with a non-2xx status.
	#[error("{endpoint} returned HTTP {status}")]
	Status {
		endpoint: Endpoint,
		status: StatusCode,
	},

	/// The body could not be decoded as the expected JSON shape.
	#[error("{endpoint} returned an unreadable body: {source}")]
	Decode {
		endpoint: Endpoint,
		#[source]
		source: reqwest::Error,
	},

	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
}

impl ApiError {
	/// Status code for [`ApiError::Status`], if any.
	#[must_use]
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Rejections for user-supplied query text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
	#[error("query is empty")]
	Empty,
}
