//! Search pipeline: backend fan-out, dedup, page resolution, ranking.
//!
//! Each concurrent stage runs as one phase: its futures are driven through a
//! bounded unordered buffer and all of them are finished (or dropped at the
//! deadline) before the next stage starts. Outputs are put back in task
//! order afterwards.

pub mod dedup;
pub mod fanout;
pub mod ranking;
pub mod resolve;

use std::future::Future;
use std::time::Duration;

use futures::stream::{self, StreamExt};

/// Drive `tasks` with at most `max_concurrency` in flight and collect their
/// outputs in task order.
///
/// Tasks complete in any order; a slow task never holds back the ones
/// behind it. With a `deadline`, tasks still pending when it elapses are
/// dropped and every output finished so far is returned.
pub(crate) async fn run_phase<I, F>(
    phase: &'static str,
    tasks: I,
    max_concurrency: usize,
    deadline: Option<Duration>,
) -> Vec<F::Output>
where
    I: IntoIterator<Item = F>,
    F: Future,
{
    let indexed = tasks
        .into_iter()
        .enumerate()
        .map(|(idx, task)| async move { (idx, task.await) });
    let mut pending =
        std::pin::pin!(stream::iter(indexed).buffer_unordered(max_concurrency.max(1)));

    let mut finished = Vec::new();
    match deadline {
        None => {
            while let Some(output) = pending.next().await {
                finished.push(output);
            }
        }
        Some(deadline) => {
            let timer = tokio::time::sleep(deadline);
            tokio::pin!(timer);
            loop {
                tokio::select! {
                    next = pending.next() => match next {
                        Some(output) => finished.push(output),
                        None => break,
                    },
                    () = &mut timer => {
                        tracing::warn!(
                            phase,
                            completed = finished.len(),
                            "phase deadline elapsed, continuing with partial results"
                        );
                        break;
                    }
                }
            }
        }
    }

    finished.sort_by_key(|(idx, _)| *idx);
    finished.into_iter().map(|(_, output)| output).collect()
}
