//! Mock producer for testing without feed access.
//!
//! Serves a queue of scripted responses, so scheduler and handler tests can
//! exercise success, failure, and hang behavior deterministically.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::ScheduleSnapshot;
use crate::refresh::Producer;

use super::error::CapacityError;

enum MockResponse {
    Snapshot(ScheduleSnapshot),
    Error(CapacityError),
    /// Never resolves; for exercising the scheduler's timeout handling.
    Hang,
}

/// Mock producer that serves scripted responses in order.
///
/// Once the queue is exhausted, further fetches fail.
#[derive(Clone, Default)]
pub struct MockProducer {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

impl MockProducer {
    /// Create a mock producer with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful fetch returning the given snapshot.
    pub fn push_snapshot(&self, snapshot: ScheduleSnapshot) {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Snapshot(snapshot));
    }

    /// Queue a failed fetch returning the given error.
    pub fn push_error(&self, error: CapacityError) {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
    }

    /// Queue a fetch that never completes.
    pub fn push_hang(&self) {
        self.responses.lock().unwrap().push_back(MockResponse::Hang);
    }

    /// Number of responses still queued.
    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

impl Producer for MockProducer {
    async fn fetch(&self) -> Result<ScheduleSnapshot, CapacityError> {
        let next = self.responses.lock().unwrap().pop_front();

        match next {
            Some(MockResponse::Snapshot(snapshot)) => Ok(snapshot),
            Some(MockResponse::Error(error)) => Err(error),
            Some(MockResponse::Hang) => std::future::pending().await,
            None => Err(CapacityError::Api {
                status: 0,
                message: "mock producer exhausted".to_string(),
            }),
        }
    }
}
