use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `searchbox` binary.
#[derive(Parser, Debug)]
#[command(
	name = "searchbox",
	version,
	long_version = long_version(),
	about = "Terminal search box with live suggestions for a remote search API",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SEARCHBOX_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'u',
		long,
		value_name = "URL",
		help = "Base URL of the search service (default: http://localhost:8080)"
	)]
	pub(crate) url: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before suggestions are requested (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "min-chars",
		value_name = "NUM",
		help = "Minimum query length that asks for suggestions (default: 2)"
	)]
	pub(crate) min_chars: Option<usize>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Per-request timeout in seconds (default: none)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input prompt title (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Search for this query as soon as the UI opens (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		help = "Write logs to this file (default: searchbox.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
