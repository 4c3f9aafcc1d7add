use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::ui::config::UiLabels;
use crate::ui::highlight::{TruncationStyle, highlight_line, prefix_indices};
use crate::ui::style::Theme;
use crate::ui::view::SuggestionsView;

/// Rows shown before the dropdown starts scrolling.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// Build one list row per suggestion, or a single placeholder row.
pub fn build_suggestion_items(
	view: &SuggestionsView,
	labels: &UiLabels,
	width: usize,
	theme: &Theme,
) -> Vec<ListItem<'static>> {
	match view {
		SuggestionsView::Hidden => Vec::new(),
		SuggestionsView::Items { query, items } => items
			.iter()
			.map(|item| {
				ListItem::new(highlight_line(
					item,
					prefix_indices(item, query),
					Some(width),
					TruncationStyle::Right,
					ratatui::style::Style::default(),
					theme.highlight_style(),
				))
			})
			.collect(),
		SuggestionsView::Empty => vec![placeholder(&labels.no_suggestions, theme.empty_style())],
		SuggestionsView::Failed => vec![placeholder(&labels.suggestions_failed, theme.error_style())],
	}
}

fn placeholder(text: &str, style: ratatui::style::Style) -> ListItem<'static> {
	ListItem::new(Line::from(Span::styled(text.to_string(), style)))
}

/// Area of the dropdown: directly under `anchor`, clipped to `bounds`.
#[must_use]
pub fn dropdown_area(anchor: Rect, bounds: Rect, rows: usize) -> Rect {
	let visible = rows.min(MAX_VISIBLE_SUGGESTIONS) as u16;
	let y = anchor.bottom();
	let available = bounds.bottom().saturating_sub(y);
	Rect {
		x: anchor.x,
		y,
		width: anchor.width,
		height: visible.saturating_add(2).min(available),
	}
}

/// Draw the dropdown over whatever is below it. Returns the rows area.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	items: Vec<ListItem<'static>>,
	state: &mut ListState,
	theme: &Theme,
) -> Rect {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style());
	let rows = block.inner(area);
	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight_style());
	frame.render_widget(Clear, area);
	frame.render_stateful_widget(list, area, state);
	rows
}
