use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::App;
use super::components::{
	InputContext, ResultsContext, StatusContext, build_suggestion_items, dropdown_area,
	render_alert, render_input_row, render_results, render_status, render_suggestions,
};
use super::state::HitAreas;
use super::view::Focus;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		let input_areas = render_input_row(
			frame,
			InputContext {
				search_input: &self.search_input,
				title: &self.ui.title,
				button_label: &self.ui.labels.button,
				area: layout[0],
				theme: &self.theme,
			},
		);
		render_status(
			frame,
			layout[1],
			StatusContext {
				view: &self.view,
				labels: &self.ui.labels,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);
		let results = render_results(
			frame,
			layout[2],
			ResultsContext {
				view: &self.view,
				labels: &self.ui.labels,
				theme: &self.theme,
				focused: self.focus == Focus::Results,
			},
			&mut self.result_state,
		);

		// drawn after the results so the dropdown overlays them
		let (suggestions, suggestion_rows) = self.draw_suggestions(frame, input_areas.input, area);

		if let Some(message) = &self.alert {
			render_alert(frame, message, &self.ui.labels, &self.theme);
		}

		self.hit_areas = HitAreas {
			input: input_areas.input,
			button: input_areas.button,
			suggestions,
			suggestion_rows,
			results,
		};
	}

	fn draw_suggestions(
		&mut self,
		frame: &mut Frame,
		anchor: Rect,
		bounds: Rect,
	) -> (Option<Rect>, Option<Rect>) {
		if !self.suggestions.is_visible() {
			return (None, None);
		}
		let area = dropdown_area(anchor, bounds, self.suggestions.row_count());
		if area.height < 3 {
			return (None, None);
		}
		let items = build_suggestion_items(
			&self.suggestions,
			&self.ui.labels,
			area.width.saturating_sub(2) as usize,
			&self.theme,
		);
		let rows = render_suggestions(frame, area, items, &mut self.suggestion_state, &self.theme);
		(Some(area), Some(rows))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::time::Duration;

	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::buffer::Buffer;
	use searchbox_api::SearchHit;

	use crate::test_support::FakeApi;
	use crate::ui::App;
	use crate::ui::config::UiConfig;
	use crate::ui::style::Theme;
	use crate::ui::view::{SuggestionsView, ViewState};

	fn app() -> App<'static> {
		App::new(Arc::new(FakeApi::new()), UiConfig::default())
	}

	fn draw(app: &mut App<'_>, width: u16, height: u16) -> Buffer {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().buffer().clone()
	}

	fn row(buffer: &Buffer, y: u16) -> String {
		(0..buffer.area.width)
			.map(|x| buffer[(x, y)].symbol().to_string())
			.collect()
	}

	fn screen(buffer: &Buffer) -> String {
		(0..buffer.area.height)
			.map(|y| row(buffer, y))
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Text of every run of cells drawn with the emphasis style.
	fn emphasized(buffer: &Buffer) -> Vec<String> {
		let emphasis = Theme::default().highlight_style().fg;
		let mut runs = Vec::new();
		for y in 0..buffer.area.height {
			let mut current = String::new();
			for x in 0..buffer.area.width {
				let cell = &buffer[(x, y)];
				if Some(cell.fg) == emphasis {
					current.push_str(cell.symbol());
				} else if !current.is_empty() {
					runs.push(std::mem::take(&mut current));
				}
			}
			if !current.is_empty() {
				runs.push(current);
			}
		}
		runs
	}

	#[test]
	fn idle_screen_shows_prompt_and_button() {
		let mut app = app();
		let buffer = draw(&mut app, 60, 10);
		let first = row(&buffer, 0);
		assert!(first.contains("Search > "));
		assert!(first.trim_end().ends_with("Search"));
	}

	#[test]
	fn suggestions_emphasize_query_prefix() {
		let mut app = app();
		app.set_query("app");
		app.suggestions = SuggestionsView::Items {
			query: "app".into(),
			items: vec!["apple".into(), "application".into()],
		};
		let buffer = draw(&mut app, 60, 12);

		let text = screen(&buffer);
		assert!(text.contains("apple"));
		assert!(text.contains("application"));
		assert_eq!(emphasized(&buffer), vec!["app".to_string(), "app".to_string()]);
		assert!(app.hit_areas.suggestion_rows.is_some());
	}

	#[test]
	fn failed_suggestions_show_placeholder() {
		let mut app = app();
		app.suggestions = SuggestionsView::Failed;
		let text = screen(&draw(&mut app, 60, 12));
		assert!(text.contains("Failed to load suggestions"));
	}

	#[test]
	fn results_show_rank_score_and_emphasized_query() {
		let mut app = app();
		app.view = ViewState::Results {
			query: "apple".into(),
			hits: vec![SearchHit::new("a.txt", 0.9321, "the apple tree")],
			elapsed: Duration::from_millis(120),
		};
		let buffer = draw(&mut app, 60, 12);
		let text = screen(&buffer);

		assert!(text.contains("Found 1 result (search time: 0.12 s)"));
		assert!(text.contains("1. a.txt"));
		assert!(text.contains("Relevance score: 0.9321"));
		assert!(text.contains("the apple tree"));
		assert_eq!(emphasized(&buffer), vec!["apple".to_string()]);
	}

	#[test]
	fn zero_hits_show_no_results_message() {
		let mut app = app();
		app.view = ViewState::NoResults {
			elapsed: Duration::from_millis(50),
		};
		let text = screen(&draw(&mut app, 60, 10));
		assert!(text.contains("No results found"));
		assert!(text.contains("Found 0 results"));
		assert!(!text.contains("Relevance score"));
	}

	#[test]
	fn failure_replaces_stats_line() {
		let mut app = app();
		app.view = ViewState::Error;
		let text = screen(&draw(&mut app, 70, 10));
		assert!(text.contains("An error occurred during search, please try again!"));
	}

	#[test]
	fn alert_is_drawn_over_everything() {
		let mut app = app();
		app.alert = Some("Please enter a search query!".into());
		let text = screen(&draw(&mut app, 70, 12));
		assert!(text.contains("Notice"));
		assert!(text.contains("Please enter a search query!"));
	}

	#[test]
	fn draw_records_click_regions() {
		let mut app = app();
		draw(&mut app, 60, 10);
		let areas = app.hit_areas;
		assert_eq!(areas.input.y, 0);
		assert_eq!(areas.button.y, 0);
		assert!(areas.button.x > areas.input.x);
		assert!(areas.results.y >= 3);
		assert!(areas.suggestions.is_none());
	}
}
