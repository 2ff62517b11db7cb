use crate::{error::CleanError, function_version::DeleteRequest};
use futures::{stream, StreamExt};
use std::future::Future;

/// Run `delete` once per request, concurrently, and wait for all of them.
///
/// A failed call does not stop the others. Each failure is logged and the
/// last one observed is returned. `max_concurrency` bounds the number of
/// calls in flight; `None` starts every call at once.
#[tracing::instrument(skip(requests, delete), fields(count = requests.len()))]
pub async fn delete_all<F, Fut>(
    requests: Vec<DeleteRequest>,
    max_concurrency: Option<usize>,
    delete: F,
) -> Result<(), CleanError>
where
    F: Fn(DeleteRequest) -> Fut,
    Fut: Future<Output = Result<(), CleanError>>,
{
    let limit = max_concurrency.unwrap_or(requests.len()).max(1);

    let results: Vec<_> = stream::iter(requests)
        .map(|request| {
            let call = delete(request.clone());
            async move { (request, call.await) }
        })
        .buffer_unordered(limit)
        .collect()
        .await;

    let mut last_error = None;
    for (request, result) in results {
        if let Err(err) = result {
            tracing::error!(
                function = %request.function_name,
                qualifier = %request.qualifier,
                error = %err,
                "failed to delete version"
            );
            last_error = Some(err);
        }
    }

    match last_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
