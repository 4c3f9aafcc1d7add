use std::fmt;

use thiserror::Error;

use super::SettingSource;

/// Why a setting was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rejection {
	NotPositive,
	BelowMinimum(usize),
	Unparsable(String),
	UnsupportedScheme(String),
}

impl fmt::Display for Rejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotPositive => f.write_str("must be greater than zero"),
			Self::BelowMinimum(min) => write!(f, "must be at least {min}"),
			Self::Unparsable(detail) => write!(f, "not a URL ({detail})"),
			Self::UnsupportedScheme(scheme) => {
				write!(f, "scheme `{scheme}` is not http or https")
			}
		}
	}
}

#[derive(Debug, Error)]
#[error("{key} = `{value}` set by {origin}: {rejection}")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) rejection: Rejection,
}

impl ConfigError {
	pub(crate) fn base_url(value: &str, origin: SettingSource, rejection: Rejection) -> Self {
		Self {
			key: "api.base_url",
			value: value.to_string(),
			origin,
			rejection,
		}
	}

	pub(crate) fn not_positive(key: &'static str, origin: SettingSource) -> Self {
		Self {
			key,
			value: "0".to_string(),
			origin,
			rejection: Rejection::NotPositive,
		}
	}

	pub(crate) fn below_minimum(
		key: &'static str,
		value: usize,
		min: usize,
		origin: SettingSource,
	) -> Self {
		Self {
			key,
			value: value.to_string(),
			origin,
			rejection: Rejection::BelowMinimum(min),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_key_value_and_origin() {
		let err = ConfigError::below_minimum(
			"suggest.min_chars",
			0,
			1,
			SettingSource::CliFlag("--min-chars"),
		);
		assert_eq!(
			err.to_string(),
			"suggest.min_chars = `0` set by CLI flag `--min-chars`: must be at least 1"
		);
	}

	#[test]
	fn base_url_errors_carry_the_rejected_url() {
		let err = ConfigError::base_url(
			"ftp://search.local",
			SettingSource::Environment("SEARCHBOX__API__BASE_URL"),
			Rejection::UnsupportedScheme("ftp".into()),
		);
		assert_eq!(err.key, "api.base_url");
		let message = err.to_string();
		assert!(message.contains("`ftp://search.local`"));
		assert!(message.contains("environment variable `SEARCHBOX__API__BASE_URL`"));
		assert!(message.ends_with("scheme `ftp` is not http or https"));
	}
}
