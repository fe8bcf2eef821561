pub mod admin;
pub mod booking;
pub mod catalog;
pub mod extract;
pub mod order;
pub mod room;
pub mod spa;

use std::future::Future;

use crate::server::error::AppError;

/// Runs a write on its own task.
///
/// A client that disconnects drops the handler future, but the spawned unit of work
/// still runs to commit or rollback.
pub(crate) async fn run_detached<F, T>(work: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(work)
        .await
        .map_err(|err| AppError::InternalError(format!("Request task failed: {}", err)))?
}
