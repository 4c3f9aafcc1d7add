//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while it runs, so log records go to a file.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "SEARCHBOX_LOG";

const DEFAULT_FILTER: &str = "searchbox=info,searchbox_api=info";
const LOG_FILE_NAME: &str = "searchbox.log";

/// `<cache dir>/searchbox.log`.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to `path`, or to the default log
/// file when `None`.
///
/// Returns the file being written, or `None` when logging stays off because
/// the file could not be opened or a subscriber was already installed.
pub fn initialize(path: Option<&Path>) -> Option<PathBuf> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => default_log_path().ok()?,
	};
	let file = open_log_file(&path).ok()?;
	let filter = build_filter(env::var(LOG_ENV).ok().as_deref());

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.ok()?;

	tracing::info!(path = %path.display(), "logging initialized");
	Some(path)
}

fn open_log_file(path: &Path) -> io::Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)?;
	}
	OpenOptions::new().create(true).append(true).open(path)
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
	directives
		.filter(|directives| !directives.trim().is_empty())
		.and_then(|directives| EnvFilter::try_new(directives).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_filter_targets_both_crates() {
		let filter = build_filter(None).to_string();
		assert!(filter.contains("searchbox=info"));
		assert!(filter.contains("searchbox_api=info"));
	}

	#[test]
	fn custom_directives_are_used() {
		assert_eq!(build_filter(Some("searchbox=debug")).to_string(), "searchbox=debug");
	}

	#[test]
	fn blank_or_invalid_directives_fall_back() {
		assert!(build_filter(Some("  ")).to_string().contains("searchbox=info"));
		assert!(build_filter(Some("searchbox=[")).to_string().contains("searchbox=info"));
	}

	#[test]
	fn log_file_parent_is_created() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("searchbox.log");
		open_log_file(&path).unwrap();
		assert!(path.exists());
	}
}
