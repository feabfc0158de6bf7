//! HTTP route handlers.

mod health;
mod signatures;

pub use health::*;
pub use signatures::*;

use crate::error::GuestbookError;

/// Run a store call on the blocking pool; redb transactions do disk I/O.
pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T, GuestbookError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, GuestbookError> + Send + 'static,
{
    tokio::task::spawn_blocking(task).await?
}
