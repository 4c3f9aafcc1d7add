use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use searchbox_api::SearchApi;
use tracing::{debug, warn};

use super::App;
use super::config::UiConfig;
use super::outcome::SearchOutcome;

const FRAME: Duration = Duration::from_millis(16);

/// Construct an [`App`] talking to `api` and run it to completion.
pub fn run(api: Arc<dyn SearchApi>, config: UiConfig) -> Result<SearchOutcome> {
	let mut app = App::new(api, config);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(io::stdout(), EnableMouseCapture) {
			warn!(error = %err, "mouse capture unavailable");
		}
		let result = terminal
			.clear()
			.context("failed to clear terminal")
			.and_then(|()| self.event_loop(&mut terminal));

		let _ = execute!(io::stdout(), DisableMouseCapture);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<SearchOutcome> {
		self.hydrate_initial_query();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			self.tick(Instant::now());
			self.pump_responses();
			if self.view.is_loading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						self.handle_key(key, Instant::now())
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if outcome.is_some() {
					maybe_outcome = outcome;
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(self.frame_delay(Instant::now()));
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Search right away when the session starts with a query.
	fn hydrate_initial_query(&mut self) {
		if self.query().trim().is_empty() {
			return;
		}
		debug!(query = self.query(), "searching for initial query");
		self.submit_search();
	}

	/// Sleep until the next frame, or sooner when the debounce fires first.
	fn frame_delay(&self, now: Instant) -> Duration {
		self.debounce
			.deadline()
			.map_or(FRAME, |deadline| deadline.saturating_duration_since(now).min(FRAME))
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
	fn initial_query_is_searched_on_start() {
		let mut app = app();
		app.set_query("apple");
		app.hydrate_initial_query();
		assert!(app.view().is_loading());
	}

	#[test]
	fn blank_initial_query_does_nothing() {
		let mut app = app();
		app.set_query("  ");
		app.hydrate_initial_query();
		assert!(!app.view().is_loading());
		assert!(app.alert.is_none());
	}

	#[test]
	fn frame_delay_shortens_for_pending_debounce() {
		let mut app = app();
		let now = Instant::now();
		assert_eq!(app.frame_delay(now), FRAME);

		app.set_query("apple");
		app.on_query_edited(now);
		let almost = now + app.ui.suggest_debounce - Duration::from_millis(5);
		assert_eq!(app.frame_delay(almost), Duration::from_millis(5));
		assert_eq!(app.frame_delay(now + app.ui.suggest_debounce), Duration::ZERO);
	}
}
