use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A trimmed, non-empty query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
	/// Trim `raw` and reject it when nothing is left.
	pub fn parse(raw: &str) -> Result<Self, QueryError> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return Err(QueryError::Empty);
		}
		Ok(Self(trimmed.to_string()))
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Length in characters, which is what the suggestion threshold counts.
	#[must_use]
	pub fn char_len(&self) -> usize {
		self.0.chars().count()
	}

	#[must_use]
	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Query {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// One ranked document returned by `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
	pub doc_path: String,
	pub score: f64,
	pub preview: String,
}

impl SearchHit {
	pub fn new(doc_path: impl Into<String>, score: f64, preview: impl Into<String>) -> Self {
		Self {
			doc_path: doc_path.into(),
			score,
			preview: preview.into(),
		}
	}

	/// Score rendered the way the result list shows it.
	#[must_use]
	pub fn formatted_score(&self) -> String {
		format!("{:.4}", self.score)
	}
}
