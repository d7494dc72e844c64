use crate::differ::line_diff::{LineDiffAlgorithm, SimilarLineDiff};
use crate::differ::stats::DiffStats;
use crate::differ::{DiffSequence, Differ, DifferError, ProcessOutcome};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Diff worker has stopped")]
    Disconnected,
}

/// Texts to diff, tagged with a caller-chosen generation
#[derive(Debug, Clone)]
pub struct DiffRequest {
    pub generation: u64,
    pub source: String,
    pub target: String,
}

pub enum WorkerMessage {
    Diff(DiffRequest),
    Stop,
}

#[derive(Debug, Clone)]
pub struct DiffSnapshot {
    pub outcome: ProcessOutcome,
    pub lhs: DiffSequence,
    pub rhs: DiffSequence,
    pub stats: DiffStats,
}

pub enum WorkerResponse {
    Processed {
        generation: u64,
        snapshot: DiffSnapshot,
    },
    /// Not produced by `DiffWorker` today: every request binds its buffers
    /// before processing, so `BuffersNotSet` cannot occur. Kept so callers
    /// already handle any `DifferError` variants added later.
    Failed {
        generation: u64,
        error: DifferError,
    },
}

impl WorkerResponse {
    pub fn generation(&self) -> u64 {
        match self {
            WorkerResponse::Processed { generation, .. }
            | WorkerResponse::Failed { generation, .. } => *generation,
        }
    }
}

/// Runs diffs off the caller's thread, one at a time. When several requests
/// queue up while a diff is running, only the newest one is processed.
pub struct DiffWorker<A = SimilarLineDiff> {
    receiver: Receiver<WorkerMessage>,
    response_sender: Sender<WorkerResponse>,
    differ: Differ<A>,
}

impl<A: LineDiffAlgorithm> DiffWorker<A> {
    pub fn new(
        receiver: Receiver<WorkerMessage>,
        response_sender: Sender<WorkerResponse>,
        differ: Differ<A>,
    ) -> Self {
        Self {
            receiver,
            response_sender,
            differ,
        }
    }

    pub fn run(&mut self) {
        while let Ok(message) = self.receiver.recv() {
            let WorkerMessage::Diff(mut request) = message else {
                break;
            };

            // Skip to the newest queued request, remembering a stop for afterwards
            let mut stop = false;
            while let Ok(next) = self.receiver.try_recv() {
                match next {
                    WorkerMessage::Diff(newer) => {
                        debug!(
                            "Diff request {} superseded by {}",
                            request.generation, newer.generation
                        );
                        request = newer;
                    }
                    WorkerMessage::Stop => {
                        stop = true;
                        break;
                    }
                }
            }

            let response = self.handle(request);
            if self.response_sender.send(response).is_err() {
                error!("Failed to send diff result: receiver dropped");
                break;
            }
            if stop {
                break;
            }
        }
    }

    fn handle(&mut self, request: DiffRequest) -> WorkerResponse {
        let DiffRequest {
            generation,
            source,
            target,
        } = request;

        self.differ.set_buffer_views(Arc::new(source), Arc::new(target));

        match self.differ.process() {
            Ok(outcome) => WorkerResponse::Processed {
                generation,
                snapshot: DiffSnapshot {
                    outcome,
                    lhs: self.differ.lhs_diff().to_vec(),
                    rhs: self.differ.rhs_diff().to_vec(),
                    stats: self.differ.stats(),
                },
            },
            Err(e) => {
                error!("Diff request {} failed: {}", generation, e);
                WorkerResponse::Failed {
                    generation,
                    error: e,
                }
            }
        }
    }
}

/// Handle to a background [`DiffWorker`]; dropping it stops the worker
pub struct DiffWorkerHandle {
    sender: Sender<WorkerMessage>,
    pub responses: Receiver<WorkerResponse>,
    thread: Option<JoinHandle<()>>,
}

impl DiffWorkerHandle {
    pub fn request(&self, request: DiffRequest) -> Result<(), WorkerError> {
        self.sender
            .send(WorkerMessage::Diff(request))
            .map_err(|_| WorkerError::Disconnected)
    }

    /// Stop the worker and wait for its thread to exit
    pub fn shutdown(mut self) {
        let _ = self.sender.send(WorkerMessage::Stop);
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            error!("Diff worker thread panicked");
        }
    }
}

impl Drop for DiffWorkerHandle {
    fn drop(&mut self) {
        let _ = self.sender.send(WorkerMessage::Stop);
    }
}

pub fn spawn_diff_worker<A>(differ: Differ<A>) -> DiffWorkerHandle
where
    A: LineDiffAlgorithm + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    let (response_sender, responses) = mpsc::channel();
    let thread = thread::spawn(move || {
        let mut worker = DiffWorker::new(receiver, response_sender, differ);
        worker.run();
    });
    DiffWorkerHandle {
        sender,
        responses,
        thread: Some(thread),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn request(generation: u64, source: &str, target: &str) -> DiffRequest {
        DiffRequest {
            generation,
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn processes_a_request() {
        let handle = spawn_diff_worker(Differ::new());
        handle.request(request(1, "a\nc", "a\nb\nc")).unwrap();

        let response = handle.responses.recv_timeout(Duration::from_secs(5)).unwrap();
        match response {
            WorkerResponse::Processed {
                generation,
                snapshot,
            } => {
                assert_eq!(generation, 1);
                assert_eq!(snapshot.outcome, ProcessOutcome::Changed);
                assert_eq!(snapshot.lhs.len(), snapshot.rhs.len());
                assert_eq!(snapshot.stats.inserted, 1);
            }
            WorkerResponse::Failed { error, .. } => panic!("unexpected failure: {error}"),
        }
    }

    #[test]
    fn newest_request_is_always_answered() {
        let (sender, receiver) = mpsc::channel();
        let (response_sender, responses) = mpsc::channel();

        for generation in 1..=3 {
            sender
                .send(WorkerMessage::Diff(request(generation, "x\n", "y\n")))
                .unwrap();
        }
        sender.send(WorkerMessage::Stop).unwrap();

        // queue is full before the worker starts, so everything but the last is skipped
        DiffWorker::new(receiver, response_sender, Differ::new()).run();

        let generations: Vec<u64> = responses.try_iter().map(|r| r.generation()).collect();
        assert_eq!(generations, vec![3]);
    }

    #[test]
    fn shutdown_stops_the_worker() {
        let handle = spawn_diff_worker(Differ::new());
        let sender = handle.sender.clone();

        handle.shutdown();

        assert!(sender.send(WorkerMessage::Stop).is_err());
    }

    #[test]
    fn dropped_handle_stops_the_worker() {
        let mut handle = spawn_diff_worker(Differ::new());
        let sender = handle.sender.clone();
        let thread = handle.thread.take();
        drop(handle);

        if let Some(thread) = thread {
            thread.join().unwrap();
        }
        assert!(sender.send(WorkerMessage::Stop).is_err());
    }
}
