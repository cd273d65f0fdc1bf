//! Background shredding with pull-based progress
//!
//! [`Shredder::spawn`] moves the engine onto a worker thread and returns a
//! [`ShredHandle`]. The worker produces [`ShredEvent::Progress`] whenever the
//! whole percentage changes, then exactly one [`ShredEvent::Finished`]. The
//! channel is unbounded so the worker never waits on the observer.
//!
//! The handle guarantees the terminal event: if the worker dies without
//! sending one, the handle reports [`Error::WorkerPanicked`] instead.

use crate::error::{Error, Result};
use crate::shredder::{ShredReport, Shredder};
use crate::target::Target;
use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

/// No percentage has been sent yet
const NO_PERCENT: u8 = u8::MAX;

/// Event observed by the consumer of a background shred
#[derive(Debug)]
pub enum ShredEvent {
    /// Overall completion in `[0, 100]`
    Progress(u8),

    /// Terminal outcome; always the last event
    Finished(Result<ShredReport>),
}

impl ShredEvent {
    /// Whether this is the terminal event
    pub fn is_finished(&self) -> bool {
        matches!(self, ShredEvent::Finished(_))
    }
}

/// Consumer side of a background shred
pub struct ShredHandle {
    receiver: Receiver<ShredEvent>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

impl Shredder {
    /// Run the shred on a worker thread
    ///
    /// Any callback registered with [`Shredder::on_progress`] still runs, on
    /// the worker thread, before the percentage is forwarded to the handle.
    pub fn spawn<P: Into<PathBuf>>(self, path: P) -> Result<ShredHandle> {
        let path = path.into();
        self.spawn_job(path.display().to_string(), move |shredder| {
            shredder.shred(&path)
        })
    }

    /// Run the shred of an already-resolved target on a worker thread
    ///
    /// The target length is not re-read, so the worker overwrites exactly
    /// the range the caller resolved.
    pub fn spawn_target(self, target: Target) -> Result<ShredHandle> {
        self.spawn_job(target.path.display().to_string(), move |shredder| {
            shredder.shred_target(&target)
        })
    }

    fn spawn_job<F>(mut self, label: String, job: F) -> Result<ShredHandle>
    where
        F: FnOnce(&Shredder) -> Result<ShredReport> + Send + 'static,
    {
        let (sender, receiver) = crossbeam_channel::unbounded();

        let user_callback = self.take_progress_callback();
        let progress_sender = sender.clone();
        let last_percent = AtomicU8::new(NO_PERCENT);
        let shredder = self.on_progress(move |progress| {
            if let Some(ref callback) = user_callback {
                callback(progress);
            }
            let percent = progress.percent();
            if last_percent.swap(percent, Ordering::Relaxed) != percent {
                // Receiver gone means the observer stopped listening
                let _ = progress_sender.send(ShredEvent::Progress(percent));
            }
        });

        let worker = std::thread::Builder::new()
            .name("shred-worker".to_string())
            .spawn(move || {
                let result = job(&shredder);
                if let Err(ref e) = result {
                    tracing::debug!("Shred of {} failed: {}", label, e);
                }
                let _ = sender.send(ShredEvent::Finished(result));
            })
            .map_err(Error::WorkerSpawn)?;

        Ok(ShredHandle {
            receiver,
            worker: Some(worker),
            finished: false,
        })
    }
}

impl ShredHandle {
    /// Block until the next event
    ///
    /// Returns `None` once the terminal event has been delivered.
    pub fn next_event(&mut self) -> Option<ShredEvent> {
        if self.finished {
            return None;
        }
        match self.receiver.recv() {
            Ok(event) => Some(self.observe(event)),
            Err(_) => Some(self.worker_lost()),
        }
    }

    /// Return the next event if one is ready, without blocking
    pub fn try_next_event(&mut self) -> Option<ShredEvent> {
        if self.finished {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(event) => Some(self.observe(event)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.worker_lost()),
        }
    }

    /// Wait up to `timeout` for the next event
    pub fn next_event_timeout(&mut self, timeout: Duration) -> Option<ShredEvent> {
        if self.finished {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Some(self.observe(event)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(self.worker_lost()),
        }
    }

    /// Whether the terminal event has been delivered
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drain remaining events and return the terminal outcome
    pub fn wait(mut self) -> Result<ShredReport> {
        while let Some(event) = self.next_event() {
            if let ShredEvent::Finished(result) = event {
                return result;
            }
        }
        Err(Error::WorkerPanicked)
    }

    fn observe(&mut self, event: ShredEvent) -> ShredEvent {
        if event.is_finished() {
            self.finished = true;
            self.join_worker();
        }
        event
    }

    fn worker_lost(&mut self) -> ShredEvent {
        self.finished = true;
        self.join_worker();
        ShredEvent::Finished(Err(Error::WorkerPanicked))
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("Shred worker panicked");
            }
        }
    }
}

impl Iterator for ShredHandle {
    type Item = ShredEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event()
    }
}
