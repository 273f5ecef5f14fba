use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use audit_logging::{audit_debug, audit_info, audit_warn};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use urlaudit_core::{
    full_target, outcome_text, partition, Mode, NonRedirectPolicy, Outcome, Probe, WorkItem,
};

use crate::progress::ProgressReporter;
use crate::{DispatchError, ProgressSink, Prober};

pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(15) {
    Some(size) => size,
    None => unreachable!(),
};

/// Everything one dispatch run needs besides the items themselves.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Prepended verbatim to every item target.
    pub base_url: String,
    pub mode: Mode,
    /// Items handled sequentially by one worker.
    pub batch_size: NonZeroUsize,
    pub non_redirect: NonRedirectPolicy,
    pub progress_interval: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            mode: Mode::default(),
            batch_size: DEFAULT_BATCH_SIZE,
            non_redirect: NonRedirectPolicy::default(),
            progress_interval: Duration::from_secs(3),
        }
    }
}

/// Probe every item and return one outcome per item, ordered by index.
///
/// Items are split into chunks of `config.batch_size`; each chunk runs on its
/// own task, one item after another. Chunks run in parallel and push their
/// outcomes onto a shared queue that is drained and sorted once every worker
/// has joined. A progress reporter runs for the lifetime of the call.
pub async fn dispatch(
    items: Vec<WorkItem>,
    config: &DispatchConfig,
    prober: Arc<dyn Prober>,
    sink: Arc<dyn ProgressSink>,
) -> Result<Vec<Outcome>, DispatchError> {
    if items.is_empty() {
        audit_debug!("Nothing to dispatch");
        return Ok(Vec::new());
    }

    let total = items.len();
    let chunks = partition(items, config.batch_size);
    audit_info!(
        "Dispatching {} urls over {} workers (batch size {}, {} mode)",
        total,
        chunks.len(),
        config.batch_size,
        config.mode
    );

    let completed = Arc::new(AtomicUsize::new(0));
    let shutdown = CancellationToken::new();
    // Stops the reporter even if this future is dropped before the barrier.
    let _reporter_guard = shutdown.clone().drop_guard();
    let reporter = ProgressReporter::new(completed.clone(), total, config.progress_interval, sink);
    let reporter_handle = tokio::spawn(reporter.run(shutdown.clone()));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let shared = Arc::new(config.clone());
    // Dropping the set aborts any worker still running.
    let mut workers = JoinSet::new();
    let mut chunk_of_task = HashMap::with_capacity(chunks.len());
    for (chunk_index, chunk) in chunks.into_iter().enumerate() {
        let tx = tx.clone();
        let prober = prober.clone();
        let config = shared.clone();
        let completed = completed.clone();
        let handle = workers.spawn(async move {
            for item in chunk {
                let outcome = process_item(prober.as_ref(), &config, &item).await;
                completed.fetch_add(1, Ordering::Relaxed);
                // The receiver lives until every worker has joined.
                let _ = tx.send(outcome);
            }
        });
        chunk_of_task.insert(handle.id(), chunk_index);
    }
    drop(tx);

    let mut failure = None;
    while let Some(joined) = workers.join_next().await {
        if let Err(source) = joined {
            if failure.is_none() {
                let chunk = chunk_of_task.get(&source.id()).copied().unwrap_or_default();
                failure = Some(DispatchError::WorkerFailed { chunk, source });
            }
        }
    }
    shutdown.cancel();
    let _ = reporter_handle.await;

    if let Some(err) = failure {
        return Err(err);
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Ok(outcome) = rx.try_recv() {
        outcomes.push(outcome);
    }
    outcomes.sort_by_key(|outcome| outcome.index);
    Ok(outcomes)
}

async fn process_item(prober: &dyn Prober, config: &DispatchConfig, item: &WorkItem) -> Outcome {
    let target = full_target(&config.base_url, &item.target);

    let probe = match prober.probe(&target).await {
        Ok(probe) => probe,
        Err(err) => {
            audit_warn!("Request to {} failed: {}", target, err);
            Probe::failed()
        }
    };
    audit_debug!("{} -> {} {:?}", target, probe.status, probe.location);

    let text = outcome_text(
        config.mode,
        config.non_redirect,
        &target,
        &probe,
        item.expectation(),
    );
    Outcome {
        index: item.index,
        status: probe.status,
        text,
    }
}
