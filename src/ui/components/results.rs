use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use searchbox_api::SearchHit;

use crate::ui::config::UiLabels;
use crate::ui::highlight::{TruncationStyle, highlight_line, occurrence_indices};
use crate::ui::style::Theme;
use crate::ui::view::ViewState;

/// Each hit renders as path, score and preview.
pub const ROWS_PER_HIT: u16 = 3;

const RANK_WIDTH: usize = 5;

/// Argument bundle for rendering the results pane.
pub struct ResultsContext<'a> {
	pub view: &'a ViewState,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
	pub focused: bool,
}

/// Build the rows for `hits` in server order, ranked from 1.
pub fn build_result_items(
	hits: &[SearchHit],
	query: Option<&str>,
	labels: &UiLabels,
	width: usize,
	theme: &Theme,
) -> Vec<ListItem<'static>> {
	let text_width = width.saturating_sub(RANK_WIDTH).max(1);
	let indent = " ".repeat(RANK_WIDTH);
	hits.iter()
		.enumerate()
		.map(|(index, hit)| {
			let rank = Span::styled(format!("{:>3}. ", index + 1), theme.header_style());
			let path = highlight_line(
				&hit.doc_path,
				None,
				Some(text_width),
				TruncationStyle::Left,
				theme.header_style(),
				theme.header_style(),
			);
			let mut path_spans = vec![rank];
			path_spans.extend(path.spans);

			let score = Line::from(vec![
				Span::raw(indent.clone()),
				Span::styled(
					format!("{}: {}", labels.score, hit.formatted_score()),
					theme.empty_style(),
				),
			]);

			let preview_indices = query.and_then(|query| occurrence_indices(&hit.preview, query));
			let preview = highlight_line(
				&flatten(&hit.preview),
				preview_indices,
				Some(text_width),
				TruncationStyle::Right,
				Style::default(),
				theme.highlight_style(),
			);
			let mut preview_spans = vec![Span::raw(indent.clone())];
			preview_spans.extend(preview.spans);

			ListItem::new(Text::from(vec![
				Line::from(path_spans),
				score,
				Line::from(preview_spans),
			]))
		})
		.collect()
}

// Previews can span lines; they're shown on one row with the same char count.
fn flatten(text: &str) -> String {
	text.chars()
		.map(|ch| if ch == '\n' || ch == '\r' || ch == '\t' { ' ' } else { ch })
		.collect()
}

/// Draw the results pane. Returns the inner list area.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	context: ResultsContext<'_>,
	state: &mut ListState,
) -> Rect {
	let ResultsContext {
		view,
		labels,
		theme,
		focused,
	} = context;

	let block = Block::default()
		.borders(Borders::TOP)
		.border_style(theme.border_style())
		.title(Span::styled(labels.results_title.clone(), theme.header_style()));
	let inner = block.inner(area);

	if view.shows_no_results() {
		let empty = Paragraph::new(labels.no_results.clone())
			.alignment(Alignment::Center)
			.style(theme.empty_style())
			.block(block);
		frame.render_widget(empty, area);
		return inner;
	}

	let items = build_result_items(
		view.hits(),
		view.highlight_query(),
		labels,
		inner.width as usize,
		theme,
	);
	let highlight = if focused {
		theme.row_highlight_style()
	} else {
		Style::default()
	};
	let list = List::new(items).block(block).highlight_style(highlight);
	frame.render_stateful_widget(list, area, state);
	inner
}
