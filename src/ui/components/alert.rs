use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

const ALERT_WIDTH: u16 = 48;
const ALERT_HEIGHT: u16 = 5;

/// Rectangle of at most `width` x `height` centered in `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

/// Modal notice drawn over the whole screen.
pub fn render_alert(frame: &mut Frame, message: &str, labels: &UiLabels, theme: &Theme) {
	let area = centered_rect(frame.area(), ALERT_WIDTH, ALERT_HEIGHT);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style())
		.title(Span::styled(labels.alert_title.clone(), theme.header_style()));
	let body = Paragraph::new(vec![
		Line::from(message.to_string()),
		Line::default(),
		Line::from(Span::styled(labels.dismiss_hint.clone(), theme.empty_style())),
	])
	.alignment(Alignment::Center)
	.wrap(Wrap { trim: true })
	.block(block);
	frame.render_widget(Clear, area);
	frame.render_widget(body, area);
}
