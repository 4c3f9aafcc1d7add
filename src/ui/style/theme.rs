use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub button: Style,
	pub error: Style,
	pub border: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn button_style(&self) -> Style {
		self.button
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	button: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::LightCyan)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(219, 234, 254))
		.fg(Color::Rgb(30, 64, 175)),
	prompt: Style::new().fg(Color::Blue),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new()
		.fg(Color::Rgb(194, 65, 12))
		.add_modifier(Modifier::BOLD),
	button: Style::new()
		.fg(Color::White)
		.bg(Color::Blue)
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Red),
	border: Style::new().fg(Color::Gray),
};

const BUILTINS: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a built-in theme, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|(builtin, _)| builtin.eq_ignore_ascii_case(name.trim()))
		.map(|(_, theme)| *theme)
}

/// Names of the built-in themes, default first.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|(name, _)| *name)
}
