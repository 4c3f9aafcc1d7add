use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use searchbox::{DEFAULT_BASE_URL, app_dirs, logging};

/// `--version` output: the default endpoint plus where settings and logs live.
pub(super) fn long_version() -> &'static str {
	let details = version_details(
		app_dirs::get_config_dir().map_err(|err| err.to_string()),
		logging::default_log_path().map_err(|err| err.to_string()),
	);
	Box::leak(details.into_boxed_str())
}

fn version_details(
	config_dir: Result<PathBuf, String>,
	log_file: Result<PathBuf, String>,
) -> String {
	let mut details = String::from(env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "default endpoint: {DEFAULT_BASE_URL}");
	let settings = config_dir.map(|dir| dir.join("config.toml"));
	let _ = writeln!(details, "settings file: {}", located(settings));
	let _ = writeln!(details, "log file: {}", located(log_file));
	let _ = write!(
		details,
		"overrides: SEARCHBOX__<SECTION>__<KEY>, log filter: {}",
		logging::LOG_ENV
	);
	details
}

fn located(path: Result<PathBuf, String>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(reason) => format!("unavailable ({reason})"),
	}
}

/// Help colours: keys stand out, placeholders stay muted.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
