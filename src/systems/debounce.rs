use std::time::{Duration, Instant};

/// Collapses a burst of calls into one, delivered after a quiet period.
///
/// The clock is passed in by the caller so the event loop and the tests
/// drive time the same way.
#[derive(Debug)]
pub(crate) struct Debouncer<T> {
	quiet_period: Duration,
	pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
	value: T,
	scheduled_at: Instant,
}

impl<T> Debouncer<T> {
	pub(crate) fn new(quiet_period: Duration) -> Self {
		Self {
			quiet_period,
			pending: None,
		}
	}

	/// Replace any pending value and restart the quiet period from `now`.
	pub(crate) fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			scheduled_at: now,
		});
	}

	/// Take the pending value once the quiet period has elapsed.
	pub(crate) fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self.pending.as_ref().is_some_and(|pending| {
			now.saturating_duration_since(pending.scheduled_at) >= self.quiet_period
		});
		if due {
			self.pending.take().map(|pending| pending.value)
		} else {
			None
		}
	}

	/// Drop the pending value, returning whether there was one.
	pub(crate) fn cancel(&mut self) -> bool {
		self.pending.take().is_some()
	}

	pub(crate) fn deadline(&self) -> Option<Instant> {
		self.pending
			.as_ref()
			.map(|pending| pending.scheduled_at + self.quiet_period)
	}

	pub(crate) fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}
