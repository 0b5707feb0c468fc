//! Small background thread pool (image decoding, form submission).
//!
//! Jobs go through an unbounded crossbeam channel; each worker blocks on
//! `recv()` so idle threads cost nothing. Dropping the pool closes the
//! channel and joins the threads after the queued jobs finish.

use crossbeam_channel::{Sender, unbounded};
use log::{trace, warn};
use std::thread;

type Job = Box<dyn FnOnce() + Send + 'static>;

pub struct Workers {
    sender: Option<Sender<Job>>,
    handles: Vec<thread::JoinHandle<()>>,
}

impl std::fmt::Debug for Workers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workers")
            .field("threads", &self.handles.len())
            .finish()
    }
}

impl Workers {
    /// Spawn `num_threads` workers (at least one).
    pub fn new(num_threads: usize) -> Self {
        let (sender, receiver) = unbounded::<Job>();
        let mut handles = Vec::new();

        for worker_id in 0..num_threads.max(1) {
            let receiver = receiver.clone();
            let spawned = thread::Builder::new()
                .name(format!("folio-worker-{}", worker_id))
                .spawn(move || {
                    trace!("Worker {} started", worker_id);
                    // recv() fails once every sender is gone
                    while let Ok(job) = receiver.recv() {
                        job();
                    }
                    trace!("Worker {} stopped", worker_id);
                });
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => warn!("Failed to spawn worker {}: {}", worker_id, e),
            }
        }

        Self {
            sender: Some(sender),
            handles,
        }
    }

    /// Queue a job. Runs inline if no worker thread could be spawned.
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.handles.is_empty() {
            job();
            return;
        }
        if let Some(sender) = &self.sender
            && let Err(e) = sender.send(Box::new(job))
        {
            warn!("Worker queue closed, running job inline");
            (e.into_inner())();
        }
    }

    pub fn num_threads(&self) -> usize {
        self.handles.len()
    }
}

impl Drop for Workers {
    fn drop(&mut self) {
        self.sender.take();
        for handle in self.handles.drain(..) {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_jobs_complete_before_drop_returns() {
        let counter = Arc::new(AtomicUsize::new(0));
        {
            let workers = Workers::new(3);
            assert_eq!(workers.num_threads(), 3);
            for _ in 0..50 {
                let c = Arc::clone(&counter);
                workers.execute(move || {
                    c.fetch_add(1, Ordering::SeqCst);
                });
            }
        }
        assert_eq!(counter.load(Ordering::SeqCst), 50);
    }

    #[test]
    fn test_results_over_channel() {
        let workers = Workers::new(2);
        let (tx, rx) = unbounded();
        for i in 0..4 {
            let tx = tx.clone();
            workers.execute(move || {
                let _ = tx.send(i * i);
            });
        }
        drop(tx);
        let mut got: Vec<i32> = rx.iter().collect();
        got.sort();
        assert_eq!(got, vec![0, 1, 4, 9]);
    }
}
