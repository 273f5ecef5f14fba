use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use audit_logging::audit_info;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;

/// Snapshot of a running dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchProgress {
    pub completed: usize,
    pub total: usize,
    pub elapsed: Duration,
    /// Set on the last notice, emitted once all workers have joined.
    pub finished: bool,
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, progress: DispatchProgress);
}

/// Writes progress notices to the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, progress: DispatchProgress) {
        if progress.finished {
            audit_info!(
                "Finished {}/{} urls in {:.1}s",
                progress.completed,
                progress.total,
                progress.elapsed.as_secs_f64()
            );
        } else {
            audit_info!(
                "Processed {}/{} urls ({:.1}s elapsed)",
                progress.completed,
                progress.total,
                progress.elapsed.as_secs_f64()
            );
        }
    }
}

const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Periodic reporter bound to one dispatch call.
pub(crate) struct ProgressReporter {
    completed: Arc<AtomicUsize>,
    total: usize,
    interval: Duration,
    started: Instant,
    sink: Arc<dyn ProgressSink>,
}

impl ProgressReporter {
    pub(crate) fn new(
        completed: Arc<AtomicUsize>,
        total: usize,
        interval: Duration,
        sink: Arc<dyn ProgressSink>,
    ) -> Self {
        Self {
            completed,
            total,
            interval: interval.max(MIN_INTERVAL),
            started: Instant::now(),
            sink,
        }
    }

    /// Emit a notice every interval until `shutdown` fires, then a final one.
    pub(crate) async fn run(self, shutdown: CancellationToken) {
        let mut ticker = interval_at(self.started + self.interval, self.interval);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    self.sink.emit(self.snapshot(true));
                    break;
                }
                _ = ticker.tick() => {
                    self.sink.emit(self.snapshot(false));
                }
            }
        }
    }

    fn snapshot(&self, finished: bool) -> DispatchProgress {
        DispatchProgress {
            completed: self.completed.load(Ordering::Relaxed),
            total: self.total,
            elapsed: self.started.elapsed(),
            finished,
        }
    }
}
