//! Core state container for the search box front-end.
//!
//! [`App`] owns the input field, the two request lanes and every view value
//! the renderer reads. Behaviour lives in the sibling `search`, `actions` and
//! `render` modules.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use searchbox_api::{Endpoint, SearchApi, SearchHit};
use throbber_widgets_tui::ThrobberState;

use super::components::SearchInput;
use super::config::UiConfig;
use super::outcome::SearchOutcome;
use super::style::Theme;
use super::view::{Focus, SuggestionsView, ViewState};
use crate::systems::debounce::Debouncer;
use crate::systems::requests::{self, RequestResult};

mod request_runtime;

pub(crate) use request_runtime::RequestRuntime;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.suggest.shutdown();
		self.search.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub search_input: SearchInput<'a>,
	pub theme: Theme,
	pub(crate) ui: UiConfig,
	pub(crate) focus: Focus,
	pub(crate) view: ViewState,
	pub(crate) suggestions: SuggestionsView,
	pub(crate) suggestion_state: ListState,
	pub(crate) result_state: ListState,
	/// Blocking notice; while set, the next key or click only dismisses it.
	pub(crate) alert: Option<String>,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) debounce: Debouncer<String>,
	pub(crate) hit_areas: HitAreas,
	pub(in crate::ui) suggest: RequestRuntime,
	pub(in crate::ui) search: RequestRuntime,
	responses: Receiver<RequestResult>,
}

/// Screen regions from the last draw, used to route mouse clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct HitAreas {
	pub input: Rect,
	pub button: Rect,
	/// Whole dropdown including its border.
	pub suggestions: Option<Rect>,
	/// Rows inside the dropdown border.
	pub suggestion_rows: Option<Rect>,
	pub results: Rect,
}

impl<'a> App<'a> {
	/// Start both request lanes against `api`.
	pub fn new(api: Arc<dyn SearchApi>, ui: UiConfig) -> Self {
		let (result_tx, responses) = mpsc::channel();
		let (suggest_tx, suggest_latest) =
			requests::spawn(Arc::clone(&api), Endpoint::Suggest, result_tx.clone());
		let (search_tx, search_latest) = requests::spawn(api, Endpoint::Search, result_tx);

		let theme = Theme::default();
		let mut search_input = SearchInput::new(String::new());
		search_input.set_placeholder(ui.labels.placeholder.clone(), theme.empty_style());
		search_input.focus();

		Self {
			search_input,
			theme,
			debounce: Debouncer::new(ui.suggest_debounce),
			ui,
			focus: Focus::Input,
			view: ViewState::Idle,
			suggestions: SuggestionsView::Hidden,
			suggestion_state: ListState::default(),
			result_state: ListState::default(),
			alert: None,
			throbber_state: ThrobberState::default(),
			hit_areas: HitAreas::default(),
			suggest: RequestRuntime::new(Endpoint::Suggest, suggest_tx, suggest_latest),
			search: RequestRuntime::new(Endpoint::Search, search_tx, search_latest),
			responses,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(self.ui.labels.placeholder.clone(), theme.empty_style());
	}

	/// Put `query` in the input field without asking for suggestions.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.search_input.text()
	}

	#[must_use]
	pub fn view(&self) -> &ViewState {
		&self.view
	}

	#[must_use]
	pub fn suggestions(&self) -> &SuggestionsView {
		&self.suggestions
	}

	pub(crate) fn responses(&self) -> &Receiver<RequestResult> {
		&self.responses
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		if focus == Focus::Input {
			self.search_input.focus();
		} else {
			self.search_input.blur();
		}
		match focus {
			Focus::Suggestions if self.suggestion_state.selected().is_none() => {
				self.suggestion_state.select(Some(0));
			}
			Focus::Results if self.result_state.selected().is_none() => {
				self.result_state.select(Some(0));
			}
			_ => {}
		}
	}

	/// The result row highlighted in the results list.
	pub(crate) fn selected_hit(&self) -> Option<&SearchHit> {
		self.result_state
			.selected()
			.and_then(|index| self.view.hits().get(index))
	}

	pub(crate) fn outcome(&self, accepted: bool, selection: Option<SearchHit>) -> SearchOutcome {
		SearchOutcome {
			accepted,
			query: self.query().trim().to_string(),
			selection,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::FakeApi;

	fn app() -> App<'static> {
		App::new(Arc::new(FakeApi::new()), UiConfig::default())
	}

	#[test]
	fn starts_idle_with_focused_input() {
		let app = app();
		assert_eq!(app.view(), &ViewState::Idle);
		assert_eq!(app.suggestions(), &SuggestionsView::Hidden);
		assert_eq!(app.focus, Focus::Input);
		assert!(app.search_input.is_focused());
		assert!(app.alert.is_none());
	}

	#[test]
	fn set_query_does_not_schedule_suggestions() {
		let mut app = app();
		app.set_query("apple");
		assert_eq!(app.query(), "apple");
		assert!(!app.debounce.is_pending());
	}

	#[test]
	fn moving_focus_selects_first_row_and_blurs_input() {
		let mut app = app();
		app.set_focus(Focus::Results);
		assert!(!app.search_input.is_focused());
		assert_eq!(app.result_state.selected(), Some(0));
		app.set_focus(Focus::Input);
		assert!(app.search_input.is_focused());
	}

	#[test]
	fn outcome_carries_trimmed_query() {
		let mut app = app();
		app.set_query("  apple pie ");
		let outcome = app.outcome(false, None);
		assert_eq!(outcome.query, "apple pie");
		assert!(!outcome.accepted);
		assert!(outcome.selection.is_none());
	}
}
