use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::App;
use super::components::ROWS_PER_HIT;
use super::outcome::SearchOutcome;
use super::view::Focus;

impl<'a> App<'a> {
	/// React to a key press. Returns the outcome once the session should end.
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.outcome(false, None));
		}
		// the key that dismisses an alert does nothing else
		if self.alert.take().is_some() {
			return None;
		}

		match key.code {
			KeyCode::Esc => {
				if self.suggestions.is_visible() {
					self.dismiss_suggestions();
					return None;
				}
				return Some(self.outcome(false, None));
			}
			KeyCode::Enter => match self.focus {
				Focus::Input => self.submit_search(),
				Focus::Suggestions => {
					if let Some(index) = self.suggestion_state.selected() {
						self.select_suggestion(index);
					}
				}
				Focus::Results => {
					let hit = self.selected_hit().cloned();
					if hit.is_some() {
						return Some(self.outcome(true, hit));
					}
				}
			},
			KeyCode::Down => self.move_selection_down(),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Tab | KeyCode::BackTab => {}
			_ => {
				if self.focus != Focus::Input {
					self.set_focus(Focus::Input);
				}
				if self.search_input.input(key) {
					self.on_query_edited(now);
				}
			}
		}
		None
	}

	/// React to a mouse event using the regions recorded by the last draw.
	pub(crate) fn handle_mouse(&mut self, event: MouseEvent) -> Option<SearchOutcome> {
		if event.kind != MouseEventKind::Down(MouseButton::Left) {
			return None;
		}
		if self.alert.take().is_some() {
			return None;
		}

		let position = Position::new(event.column, event.row);
		let areas = self.hit_areas;
		if areas.button.contains(position) {
			self.set_focus(Focus::Input);
			self.submit_search();
			return None;
		}
		if let Some(index) = self.suggestion_at(position) {
			self.select_suggestion(index);
			return None;
		}
		if areas.input.contains(position) {
			self.set_focus(Focus::Input);
			return None;
		}
		if areas.suggestions.is_some_and(|area| area.contains(position)) {
			// border or placeholder; whatever lies underneath is hidden
			return None;
		}
		self.dismiss_suggestions();
		if let Some(index) = self.result_at(position) {
			// a second click on the selected row accepts it
			if self.focus == Focus::Results && self.result_state.selected() == Some(index) {
				let hit = self.selected_hit().cloned();
				return Some(self.outcome(true, hit));
			}
			self.set_focus(Focus::Results);
			self.result_state.select(Some(index));
		}
		None
	}

	fn suggestion_at(&self, position: Position) -> Option<usize> {
		let rows = self.hit_areas.suggestion_rows?;
		if !rows.contains(position) {
			return None;
		}
		let index = usize::from(position.y - rows.y) + self.suggestion_state.offset();
		(index < self.suggestions.items().len()).then_some(index)
	}

	fn result_at(&self, position: Position) -> Option<usize> {
		let area = self.hit_areas.results;
		if !area.contains(position) {
			return None;
		}
		let index = usize::from((position.y - area.y) / ROWS_PER_HIT) + self.result_state.offset();
		(index < self.view.hits().len()).then_some(index)
	}

	fn move_selection_down(&mut self) {
		match self.focus {
			Focus::Input => {
				if !self.suggestions.items().is_empty() {
					self.set_focus(Focus::Suggestions);
				} else if !self.view.hits().is_empty() {
					self.set_focus(Focus::Results);
				}
			}
			Focus::Suggestions => {
				let len = self.suggestions.items().len();
				if let Some(next) = next_index(self.suggestion_state.selected(), len) {
					self.suggestion_state.select(Some(next));
				}
			}
			Focus::Results => {
				let len = self.view.hits().len();
				if let Some(next) = next_index(self.result_state.selected(), len) {
					self.result_state.select(Some(next));
				}
			}
		}
	}

	fn move_selection_up(&mut self) {
		match self.focus {
			Focus::Input => {}
			Focus::Suggestions => match self.suggestion_state.selected() {
				Some(selected) if selected > 0 => self.suggestion_state.select(Some(selected - 1)),
				_ => {
					self.suggestion_state.select(None);
					self.set_focus(Focus::Input);
				}
			},
			Focus::Results => match self.result_state.selected() {
				Some(selected) if selected > 0 => self.result_state.select(Some(selected - 1)),
				_ => self.set_focus(Focus::Input),
			},
		}
	}
}

fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
	let next = selected.map_or(0, |selected| selected + 1);
	(next < len).then_some(next)
}
