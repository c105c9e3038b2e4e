//! Background search job.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::board::{search, Position, SearchLimits, SearchResult};
use crate::sync::StopFlag;

/// One search running on its own thread against a private copy of the position.
///
/// The caller's position is never touched by the worker, so the caller stays
/// free to render it while the search runs.
pub struct SearchJob {
    stop: StopFlag,
    result: Arc<Mutex<Option<SearchResult>>>,
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Start searching `position` on a new thread.
    pub fn spawn(mut position: Position, limits: SearchLimits) -> io::Result<Self> {
        let stop = StopFlag::new();
        let result = Arc::new(Mutex::new(None));

        let worker_stop = stop.clone();
        let slot = Arc::clone(&result);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || {
                let legal_moves = position.get_legal_moves();
                let outcome = search(&mut position, &legal_moves, limits, &worker_stop);
                *slot.lock() = Some(outcome);
            })?;

        debug!("search job started at depth {}", limits.depth);
        Ok(SearchJob {
            stop,
            result,
            handle,
        })
    }

    /// Whether the worker has published its result
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.result.lock().is_some()
    }

    /// Ask the worker to stop at its next sibling boundary, without waiting.
    pub fn cancel(&self) {
        self.stop.stop();
    }

    /// Block until the worker is done and take its result.
    ///
    /// A worker that died without publishing yields an empty result.
    #[must_use]
    pub fn wait(self) -> SearchResult {
        let _ = self.handle.join();
        self.result.lock().take().unwrap_or(SearchResult {
            best_move: None,
            score: 0,
            nodes: 0,
        })
    }
}
