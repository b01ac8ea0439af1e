//! Fire-and-forget progress writes on a background thread.
//!
//! The reader never waits on disk. Requests are queued in order; a burst of
//! saves collapses to the last one before it is written.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use super::ProgressStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Save { chapter: usize, line: usize },
    Clear,
}

/// Owns the writer thread. Dropping it flushes queued requests.
#[derive(Debug)]
pub struct ProgressWriter {
    tx: Option<Sender<Request>>,
    handle: Option<JoinHandle<()>>,
}

impl ProgressWriter {
    /// Spawn a writer for `store`.
    ///
    /// A disabled store gets no thread; requests are dropped.
    pub fn spawn(store: ProgressStore) -> Self {
        if !store.is_enabled() {
            return Self {
                tx: None,
                handle: None,
            };
        }
        let (tx, rx) = mpsc::channel();
        let handle = std::thread::Builder::new()
            .name("focal-progress".to_string())
            .spawn(move || run(&store, &rx))
            .inspect_err(|err| tracing::warn!("progress writer unavailable: {err}"))
            .ok();
        Self {
            tx: handle.as_ref().map(|_| tx),
            handle,
        }
    }

    /// Queue a save of the given position.
    pub fn save(&self, chapter: usize, line: usize) {
        self.send(Request::Save { chapter, line });
    }

    /// Queue deletion of the saved record.
    pub fn clear(&self) {
        self.send(Request::Clear);
    }

    fn send(&self, request: Request) {
        if let Some(tx) = &self.tx
            && tx.send(request).is_err()
        {
            tracing::debug!("progress writer stopped, dropping {request:?}");
        }
    }
}

impl Drop for ProgressWriter {
    fn drop(&mut self) {
        self.tx = None;
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("progress writer thread panicked; queued writes may be lost");
            crate::perf::log_event("progress.writer.panic", "");
        }
    }
}

fn run(store: &ProgressStore, rx: &Receiver<Request>) {
    while let Ok(first) = rx.recv() {
        let mut pending = first;
        // Drain what is already queued; consecutive saves collapse.
        while let Ok(next) = rx.try_recv() {
            if let (Request::Save { .. }, Request::Save { .. }) = (pending, next) {
                pending = next;
            } else {
                apply(store, pending);
                pending = next;
            }
        }
        apply(store, pending);
    }
}

fn apply(store: &ProgressStore, request: Request) {
    match request {
        Request::Save { chapter, line } => {
            store.save(chapter, line);
            crate::perf::log_event("progress.save", format!("chapter={chapter} line={line}"));
        }
        Request::Clear => {
            store.clear();
            crate::perf::log_event("progress.clear", "");
        }
    }
}
