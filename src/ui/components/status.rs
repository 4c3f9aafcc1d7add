use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::config::UiLabels;
use crate::ui::style::Theme;
use crate::ui::view::ViewState;

/// Argument bundle for the line under the input row.
pub struct StatusContext<'a> {
	pub view: &'a ViewState,
	pub labels: &'a UiLabels,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Spinner while loading, otherwise the count/timing or failure text.
pub fn status_line(context: &StatusContext<'_>) -> Line<'static> {
	let StatusContext {
		view,
		labels,
		throbber_state,
		theme,
	} = context;

	if view.is_loading() {
		let muted = theme.empty_style();
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		return Line::from(vec![
			spinner.to_symbol_span(throbber_state),
			Span::styled(labels.loading.clone(), muted),
		]);
	}

	let style = if matches!(view, ViewState::Error) {
		theme.error_style()
	} else {
		theme.empty_style()
	};
	match view.stats_line(labels) {
		Some(text) => Line::from(Span::styled(text, style)),
		None => Line::default(),
	}
}

pub fn render_status(frame: &mut Frame, area: Rect, context: StatusContext<'_>) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	frame.render_widget(Paragraph::new(status_line(&context)), area);
}
