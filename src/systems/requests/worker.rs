use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Instant;

use searchbox_api::{Endpoint, SearchApi};
use tracing::debug;

use super::commands::{RequestCommand, RequestOutcome, RequestResult};

/// Launch the lane thread for `endpoint`.
///
/// Returns the command sender and the shared "latest id" the UI publishes so
/// the lane can skip commands that were superseded before dispatch.
pub(crate) fn spawn(
	api: Arc<dyn SearchApi>,
	endpoint: Endpoint,
	result_tx: Sender<RequestResult>,
) -> (Sender<RequestCommand>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let latest_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_id);

	thread::spawn(move || lane_loop(&api, endpoint, command_rx, &result_tx, &thread_latest));

	(command_tx, latest_id)
}

fn lane_loop(
	api: &Arc<dyn SearchApi>,
	endpoint: Endpoint,
	command_rx: Receiver<RequestCommand>,
	result_tx: &Sender<RequestResult>,
	latest_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(api, endpoint, result_tx, latest_id, command) {
			break;
		}
	}
	debug!(%endpoint, "request lane stopped");
}

fn handle_command(
	api: &Arc<dyn SearchApi>,
	endpoint: Endpoint,
	result_tx: &Sender<RequestResult>,
	latest_id: &AtomicU64,
	command: RequestCommand,
) -> bool {
	match command {
		RequestCommand::Dispatch { id, query } => {
			if id < latest_id.load(Ordering::Acquire) {
				debug!(%endpoint, id, "skipping superseded request");
				return true;
			}
			// Requests are never aborted, so each one gets its own thread and a
			// hung call cannot hold up the ones issued after it.
			let api = Arc::clone(api);
			let result_tx = result_tx.clone();
			thread::spawn(move || {
				let result = execute(api.as_ref(), endpoint, id, &query);
				let _ = result_tx.send(result);
			});
			true
		}
		RequestCommand::Shutdown => false,
	}
}

fn execute(api: &dyn SearchApi, endpoint: Endpoint, id: u64, query: &str) -> RequestResult {
	debug!(%endpoint, id, query, "dispatching request");
	let started = Instant::now();
	let outcome = match endpoint {
		Endpoint::Suggest => RequestOutcome::Suggestions(api.suggest(query)),
		Endpoint::Search => RequestOutcome::Hits(api.search(query)),
	};
	RequestResult {
		id,
		elapsed: started.elapsed(),
		outcome,
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use searchbox_api::SearchHit;

	use super::*;
	use crate::test_support::FakeApi;

	fn lane(api: FakeApi, endpoint: Endpoint) -> (Sender<RequestCommand>, Arc<AtomicU64>, Receiver<RequestResult>) {
		let (result_tx, result_rx) = mpsc::channel();
		let (command_tx, latest) = spawn(Arc::new(api), endpoint, result_tx);
		(command_tx, latest, result_rx)
	}

	#[test]
	fn search_results_are_forwarded() {
		let api = FakeApi::new().with_hits("apple", vec![SearchHit::new("a.txt", 0.9, "apple")]);
		let (tx, latest, rx) = lane(api, Endpoint::Search);
		latest.store(1, Ordering::Release);
		tx.send(RequestCommand::Dispatch {
			id: 1,
			query: "apple".into(),
		})
		.unwrap();

		let result = rx.recv_timeout(Duration::from_secs(1)).expect("result");
		assert_eq!(result.id, 1);
		assert_eq!(result.endpoint(), Endpoint::Search);
		match result.outcome {
			RequestOutcome::Hits(Ok(hits)) => assert_eq!(hits.len(), 1),
			other => panic!("unexpected outcome: {other:?}"),
		}

		tx.send(RequestCommand::Shutdown).unwrap();
	}

	#[test]
	fn failures_are_forwarded() {
		let api = FakeApi::new().failing(Endpoint::Suggest);
		let (tx, latest, rx) = lane(api, Endpoint::Suggest);
		latest.store(7, Ordering::Release);
		tx.send(RequestCommand::Dispatch {
			id: 7,
			query: "ap".into(),
		})
		.unwrap();

		let result = rx.recv_timeout(Duration::from_secs(1)).expect("result");
		assert!(matches!(result.outcome, RequestOutcome::Suggestions(Err(_))));
	}

	#[test]
	fn superseded_commands_are_skipped() {
		let api = FakeApi::new();
		let calls = api.call_log();
		let (tx, latest, rx) = lane(api, Endpoint::Suggest);
		latest.store(5, Ordering::Release);

		tx.send(RequestCommand::Dispatch {
			id: 3,
			query: "old".into(),
		})
		.unwrap();
		tx.send(RequestCommand::Dispatch {
			id: 5,
			query: "new".into(),
		})
		.unwrap();

		let result = rx.recv_timeout(Duration::from_secs(1)).expect("result");
		assert_eq!(result.id, 5);
		assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
		assert_eq!(calls.queries(Endpoint::Suggest), vec!["new".to_string()]);
	}

	#[test]
	fn shutdown_stops_lane() {
		let (tx, _latest, _rx) = lane(FakeApi::new(), Endpoint::Search);
		tx.send(RequestCommand::Shutdown).unwrap();
		thread::sleep(Duration::from_millis(50));
		assert!(
			tx.send(RequestCommand::Dispatch {
				id: 1,
				query: "late".into()
			})
			.is_err()
		);
	}
}
