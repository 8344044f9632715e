//! Deadline racing for operations that would otherwise wait forever.

#[cfg(test)]
#[path = "timeout_test.rs"]
mod timeout_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

/// Run `work` until it finishes or `deadline` fires, whichever is first.
///
/// Returns `None` when the deadline won. The losing future is dropped.
pub async fn race_deadline<W, D>(work: W, deadline: D) -> Option<W::Output>
where
    W: Future,
    D: Future<Output = ()>,
{
    match select(pin!(work), pin!(deadline)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

/// Browser timer future.
#[cfg(feature = "hydrate")]
pub async fn sleep(duration: std::time::Duration) {
    gloo_timers::future::sleep(duration).await;
}
