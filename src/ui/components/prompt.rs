use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub title: &'a str,
	pub button_label: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Screen regions of the input row, kept for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputAreas {
	pub input: Rect,
	pub button: Rect,
}

/// Render the prompt, the query field and the search button on one row.
pub fn render_input_row(frame: &mut Frame, context: InputContext<'_>) -> InputAreas {
	let InputContext {
		search_input,
		title,
		button_label,
		area,
		theme,
	} = context;

	let prompt_width = calculate_prompt_width(title);
	let button_width = calculate_button_width(button_label);
	let constraints = layout_constraints(!title.is_empty(), prompt_width, button_width);

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(constraints)
		.split(area);

	if !title.is_empty() {
		let prompt = Paragraph::new(format!("{title} > ")).style(theme.prompt_style());
		frame.render_widget(prompt, horizontal[0]);
	}

	let input_index = if title.is_empty() { 0 } else { 1 };
	let input_area = horizontal[input_index];
	search_input.render(frame, input_area);

	let slot = horizontal[horizontal.len() - 1];
	let button = Rect {
		x: slot.x.saturating_add(1),
		width: slot.width.saturating_sub(1),
		..slot
	};
	frame.render_widget(Paragraph::new(button_line(button_label, theme)), button);

	InputAreas {
		input: input_area,
		button,
	}
}

fn button_line(label: &str, theme: &Theme) -> Line<'static> {
	Line::from(Span::styled(format!(" {label} "), theme.button_style()))
}

fn calculate_prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		prompt.width() as u16 + 3
	}
}

fn calculate_button_width(label: &str) -> u16 {
	// one column gap plus a space either side of the label
	(label.width() as u16).saturating_add(3)
}

fn layout_constraints(has_prompt: bool, prompt_width: u16, button_width: u16) -> Vec<Constraint> {
	if has_prompt {
		vec![
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(button_width),
		]
	} else {
		vec![Constraint::Min(1), Constraint::Length(button_width)]
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	#[test]
	fn prompt_width_accounts_for_separator() {
		assert_eq!(calculate_prompt_width(""), 0);
		assert_eq!(calculate_prompt_width("Search"), 9);
	}

	#[test]
	fn button_width_pads_label() {
		assert_eq!(calculate_button_width("Search"), 9);
	}

	#[test]
	fn layout_constraints_include_prompt_section() {
		let constraints = layout_constraints(true, 5, 10);

		assert_eq!(constraints.len(), 3);
		assert!(matches!(constraints[0], Constraint::Length(5)));
		assert!(matches!(constraints[1], Constraint::Min(1)));
		assert!(matches!(constraints[2], Constraint::Length(10)));
	}

	#[test]
	fn layout_constraints_without_prompt_are_compact() {
		let constraints = layout_constraints(false, 5, 10);

		assert_eq!(constraints.len(), 2);
		assert!(matches!(constraints[0], Constraint::Min(1)));
		assert!(matches!(constraints[1], Constraint::Length(10)));
	}

	#[test]
	fn row_places_button_at_right_edge() {
		let input = SearchInput::new("apple");
		let theme = Theme::default();
		let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
		let mut areas = InputAreas::default();
		terminal
			.draw(|frame| {
				areas = render_input_row(
					frame,
					InputContext {
						search_input: &input,
						title: "Search",
						button_label: "Go",
						area: frame.area(),
						theme: &theme,
					},
				);
			})
			.unwrap();

		assert_eq!(areas.button.right(), 40);
		assert_eq!(areas.button.width, 4);
		assert_eq!(areas.input.x, 9);
		let row: String = (0..40)
			.map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
			.collect();
		assert!(row.starts_with("Search > apple"));
		assert!(row.ends_with(" Go "));
	}
}
