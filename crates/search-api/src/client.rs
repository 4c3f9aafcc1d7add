use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::types::SearchHit;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The two read-only endpoints exposed by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	Suggest,
	Search,
}

impl Endpoint {
	#[must_use]
	pub fn path(self) -> &'static str {
		match self {
			Self::Suggest => "suggest",
			Self::Search => "search",
		}
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "/{}", self.path())
	}
}

/// Backend reachable by the search box.
///
/// Both calls block the calling thread; the UI runs them on worker threads.
/// Queries are passed already trimmed.
pub trait SearchApi: Send + Sync {
	/// Candidate completions for a partial query.
	fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError>;

	/// Ranked documents matching `query`, in server order.
	fn search(&self, query: &str) -> Result<Vec<SearchHit>, ApiError>;
}

/// [`SearchApi`] over HTTP using a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSearchApi {
	client: Client,
	base_url: String,
}

impl HttpSearchApi {
	/// Build a client for `base_url`. `timeout` of `None` waits forever.
	pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
		let client = Client::builder()
			.timeout(timeout)
			.build()
			.map_err(ApiError::Client)?;
		let base_url = base_url.into().trim_end_matches('/').to_string();
		Ok(Self { client, base_url })
	}

	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Full request URL for `endpoint` with `query` percent-encoded into `q`.
	#[must_use]
	pub fn url_for(&self, endpoint: Endpoint, query: &str) -> String {
		format!(
			"{}/{}?q={}",
			self.base_url,
			endpoint.path(),
			urlencoding::encode(query)
		)
	}

	fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint, query: &str) -> Result<T, ApiError> {
		let url = self.url_for(endpoint, query);
		debug!(%endpoint, %url, "sending request");

		let response = self
			.client
			.get(&url)
			.send()
			.map_err(|source| ApiError::Request { endpoint, source })?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status { endpoint, status });
		}

		response
			.json::<T>()
			.map_err(|source| ApiError::Decode { endpoint, source })
	}
}

impl SearchApi for HttpSearchApi {
	fn suggest(&self, query: &str) -> Result<Vec<String>, ApiError> {
		self.get_json(Endpoint::Suggest, query)
	}

	fn search(&self, query: &str) -> Result<Vec<SearchHit>, ApiError> {
		self.get_json(Endpoint::Search, query)
	}
}
