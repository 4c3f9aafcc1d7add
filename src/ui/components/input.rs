use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query field.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
	placeholder: String,
	placeholder_style: Style,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			focused: false,
			placeholder: String::new(),
			placeholder_style: Style::default(),
		};
		input.set_text(initial);
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents and put the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let line = text.into().replace(['\r', '\n'], " ");
		let mut textarea = TextArea::new(vec![line]);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_styles();
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		self.placeholder = text.into();
		self.placeholder_style = style;
		self.apply_styles();
	}

	pub fn focus(&mut self) {
		self.focused = true;
		self.apply_styles();
	}

	pub fn blur(&mut self) {
		self.focused = false;
		self.apply_styles();
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Feed a key to the field. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_styles(&mut self) {
		self.textarea.set_cursor_line_style(Style::default());
		let cursor = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		if !self.placeholder.is_empty() {
			self.textarea.set_placeholder_text(self.placeholder.clone());
			self.textarea.set_placeholder_style(self.placeholder_style);
		}
	}
}

fn is_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
