//! Supervised cache warming. Search hands URL batches to a long-lived supervisor task that
//! runs each batch in a `JoinSet` and logs what happened to it.

use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, warn};

use crate::jobs::enrichment::{EnrichmentClient, FetchOutcome};

enum Command {
    Prefetch(Vec<String>),
    /// Wait for every running batch, then acknowledge.
    Flush(oneshot::Sender<()>),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchReport {
    pub fetched: usize,
    pub already_cached: usize,
    pub placeholders: usize,
}

pub struct Prefetcher {
    tx: mpsc::UnboundedSender<Command>,
}

impl Prefetcher {
    /// Starts the supervisor on the current tokio runtime.
    pub fn spawn(enrichment: EnrichmentClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(supervise(enrichment, rx));
        Self { tx }
    }

    /// Queues `urls` for background fetching. Returns immediately.
    pub fn schedule(&self, urls: Vec<String>) {
        if urls.is_empty() {
            return;
        }
        debug!("Scheduling prefetch of {} job(s)", urls.len());
        if self.tx.send(Command::Prefetch(urls)).is_err() {
            warn!("Prefetch supervisor has stopped; dropping prefetch batch");
        }
    }

    /// Resolves once every batch scheduled so far has finished.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(Command::Flush(ack_tx)).is_err() {
            return;
        }
        let _ = ack_rx.await;
    }
}

async fn supervise(enrichment: EnrichmentClient, mut rx: mpsc::UnboundedReceiver<Command>) {
    let mut tasks = JoinSet::new();

    loop {
        tokio::select! {
            command = rx.recv() => match command {
                Some(Command::Prefetch(urls)) => {
                    let enrichment = enrichment.clone();
                    tasks.spawn(async move { prefetch_batch(&enrichment, urls).await });
                }
                Some(Command::Flush(ack)) => {
                    while let Some(result) = tasks.join_next().await {
                        log_batch_result(result);
                    }
                    let _ = ack.send(());
                }
                None => break,
            },
            Some(result) = tasks.join_next(), if !tasks.is_empty() => {
                log_batch_result(result);
            }
        }
    }

    while let Some(result) = tasks.join_next().await {
        log_batch_result(result);
    }
    debug!("Prefetch supervisor stopped");
}

/// Fetches every URL in the batch that is not cached yet, one at a time.
async fn prefetch_batch(enrichment: &EnrichmentClient, urls: Vec<String>) -> PrefetchReport {
    let mut report = PrefetchReport::default();
    for url in urls {
        if enrichment.cache().contains(&url) {
            report.already_cached += 1;
            continue;
        }
        match enrichment.fetch(&url).await {
            FetchOutcome::Placeholder(_) => report.placeholders += 1,
            FetchOutcome::Fetched(_) => report.fetched += 1,
            FetchOutcome::Cached(_) => report.already_cached += 1,
        }
    }
    report
}

fn log_batch_result(result: Result<PrefetchReport, JoinError>) {
    match result {
        Ok(report) if report.placeholders > 0 => warn!(
            fetched = report.fetched,
            placeholders = report.placeholders,
            "Prefetch batch finished with upstream failures"
        ),
        Ok(report) => debug!(
            fetched = report.fetched,
            already_cached = report.already_cached,
            "Prefetch batch finished"
        ),
        Err(e) => error!("Prefetch batch task failed: {e}"),
    }
}
