//! Cancellable request handles.
//!
//! This module provides the handle type returned by operations that can be
//! aborted before they settle. The request future is spawned onto the tokio
//! runtime so it is live immediately, and the handle exposes cooperative
//! cancellation over the in-flight task.

use crate::client::error::ApiError;
use log::debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A pending API request that can be cancelled before it settles.
///
/// Awaiting the handle yields the request's result. Cancelling it aborts the
/// underlying task; a cancelled request never delivers a partial result and
/// awaiting it afterwards yields [`ApiError::Cancelled`].
///
/// Must be created from within a tokio runtime.
#[derive(Debug)]
pub struct CancellableRequest<T> {
    /// Unique identifier for this request, for logging and correlation.
    request_id: String,

    /// Flag set once cancellation has been requested.
    cancelled: Arc<Mutex<bool>>,

    /// Task handle driving the request to completion.
    task: JoinHandle<Result<T, ApiError>>,
}

impl<T: Send + 'static> CancellableRequest<T> {
    /// Spawns `future` onto the current tokio runtime and returns a handle
    /// to its eventual result.
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self {
            request_id: Uuid::new_v4().to_string(),
            cancelled: Arc::new(Mutex::new(false)),
            task: tokio::spawn(future),
        }
    }
}

impl<T> CancellableRequest<T> {
    /// Returns the unique identifier of this request.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Checks if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.lock().unwrap()
    }

    /// Cancels the in-flight request.
    ///
    /// Aborts the underlying task. Idempotent; cancelling a request that has
    /// already completed has no effect on its delivered result.
    pub fn cancel(&self) {
        debug!("cancelling request {}", self.request_id);
        *self.cancelled.lock().unwrap() = true;
        self.task.abort();
    }
}

impl<T> Future for CancellableRequest<T> {
    type Output = Result<T, ApiError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.task).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(join_err)) => {
                if join_err.is_cancelled() {
                    Poll::Ready(Err(ApiError::Cancelled))
                } else {
                    Poll::Ready(Err(ApiError::Network(format!(
                        "request task failed: {}",
                        join_err
                    ))))
                }
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> Drop for CancellableRequest<T> {
    /// Dropping the handle abandons the request.
    fn drop(&mut self) {
        self.task.abort();
    }
}
