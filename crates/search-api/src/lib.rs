//! Wire types and HTTP client for the searchbox suggest/search endpoints.
//!
//! The search engine itself lives behind two read-only GET endpoints. This
//! crate models their payloads and exposes the [`SearchApi`] trait so the
//! terminal front-end can be driven by a real HTTP backend or an in-memory
//! stand-in.

mod client;
mod error;
mod types;

pub use reqwest::StatusCode;

pub use client::{DEFAULT_BASE_URL, Endpoint, HttpSearchApi, SearchApi};
pub use error::{ApiError, QueryError};
pub use types::{Query, SearchHit};
