use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;
use tracing::debug;

/// Run `op` over every item concurrently and keep only the successes.
///
/// All operations are started before any is awaited, and the call resolves
/// once every one of them has settled. Successes keep their input order;
/// failures are dropped without reaching the caller.
pub async fn fetch_fulfilled<I, F, Fut, T, E>(items: I, op: F) -> Vec<T>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let settled = join_all(items.into_iter().map(op)).await;
    let total = settled.len();

    let fulfilled: Vec<T> = settled
        .into_iter()
        .filter_map(|outcome| match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("dropping failed lookup: {}", err);
                None
            }
        })
        .collect();

    if fulfilled.len() < total {
        debug!("{} of {} lookups fulfilled", fulfilled.len(), total);
    }
    fulfilled
}
