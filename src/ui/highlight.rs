//! Match emphasis for suggestions and result previews.
//!
//! Matching is literal: the query is escaped before it becomes a pattern, so
//! characters like `(` or `*` in user input match themselves.

use std::mem;
use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use regex::{Regex, RegexBuilder};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

/// Which end of an over-long string gets cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationStyle {
	Left,
	Right,
}

fn literal_pattern(query: &str, anchored: bool) -> Option<Regex> {
	if query.is_empty() {
		return None;
	}
	let escaped = regex::escape(query);
	let source = if anchored {
		format!("^{escaped}")
	} else {
		escaped
	};
	RegexBuilder::new(&source)
		.case_insensitive(true)
		.build()
		.ok()
}

/// Character indices covered by every case-insensitive occurrence of `query`.
#[must_use]
pub fn occurrence_indices(text: &str, query: &str) -> Option<Vec<usize>> {
	let pattern = literal_pattern(query, false)?;
	let indices = char_indices_for(text, pattern.find_iter(text).map(|found| found.range()));
	(!indices.is_empty()).then_some(indices)
}

/// Character indices of a case-insensitive match of `query` at the start of `text`.
#[must_use]
pub fn prefix_indices(text: &str, query: &str) -> Option<Vec<usize>> {
	let pattern = literal_pattern(query, true)?;
	let found = pattern.find(text)?;
	let indices = char_indices_for(text, std::iter::once(found.range()));
	(!indices.is_empty()).then_some(indices)
}

fn char_indices_for(text: &str, ranges: impl Iterator<Item = Range<usize>>) -> Vec<usize> {
	let mut ranges = ranges.peekable();
	let mut indices = Vec::new();
	for (char_index, (byte_index, _)) in text.char_indices().enumerate() {
		while ranges.peek().is_some_and(|range| range.end <= byte_index) {
			ranges.next();
		}
		if ranges.peek().is_some_and(|range| range.contains(&byte_index)) {
			indices.push(char_index);
		}
	}
	indices
}

/// Build a line that emphasizes the characters at `indices`.
#[must_use]
pub fn highlight_line(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: Option<usize>,
	truncation: TruncationStyle,
	base: Style,
	emphasis: Style,
) -> Line<'static> {
	let (display_text, indices) = if let Some(width) = max_width {
		truncate_with_highlight(text, indices, width, truncation)
	} else {
		(text.to_string(), indices)
	};

	let Some(mut sorted_indices) = indices.filter(|indices| !indices.is_empty()) else {
		return Line::from(Span::styled(display_text, base));
	};
	sorted_indices.sort_unstable();
	let mut next = sorted_indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (idx, ch) in display_text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				let style = if highlighted { emphasis } else { base };
				spans.push(Span::styled(mem::take(&mut buffer), style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		let style = if highlighted { emphasis } else { base };
		spans.push(Span::styled(buffer, style));
	}

	Line::from(spans)
}

fn truncate_with_highlight(
	text: &str,
	indices: Option<Vec<usize>>,
	max_width: usize,
	truncation: TruncationStyle,
) -> (String, Option<Vec<usize>>) {
	if max_width == 0 {
		return (String::new(), None);
	}

	if text.width() <= max_width {
		return (text.to_string(), indices);
	}

	let ellipsis = "…";
	let ellipsis_width = ellipsis.width();
	if max_width <= ellipsis_width {
		return (ellipsis.to_string(), None);
	}

	let available = max_width - ellipsis_width;
	match truncation {
		TruncationStyle::Right => {
			let (slice, _) = text.unicode_truncate(available);
			let mut truncated = slice.to_string();
			truncated.push_str(ellipsis);
			let limit = slice.chars().count();
			let indices = indices.and_then(|indices| {
				let adjusted: Vec<usize> = indices.into_iter().filter(|&idx| idx < limit).collect();
				(!adjusted.is_empty()).then_some(adjusted)
			});
			(truncated, indices)
		}
		TruncationStyle::Left => {
			let (slice, _) = text.unicode_truncate_start(available);
			let mut truncated = ellipsis.to_string();
			truncated.push_str(slice);
			let slice_len = slice.chars().count();
			let trimmed = text.chars().count().saturating_sub(slice_len);
			let indices = indices.and_then(|indices| {
				let adjusted: Vec<usize> = indices
					.into_iter()
					.filter_map(|idx| idx.checked_sub(trimmed))
					.filter(|&idx| idx < slice_len)
					.map(|idx| idx + 1)
					.collect();
				(!adjusted.is_empty()).then_some(adjusted)
			});
			(truncated, indices)
		}
	}
}
