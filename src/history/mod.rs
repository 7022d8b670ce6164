//! Query history fetching.
//!
//! This module wraps the notebook backend's history listing endpoint, which
//! serves the paginated record of previously executed statements shown in the
//! editor's history panel. The request is returned as a cancellable handle so
//! the UI can abandon a stale page load when the user navigates away.

pub mod models;

pub use models::{ExecutionStatus, FetchHistoryResponse, HistoryEntry, HistoryEntryData};

use crate::client::{ApiClient, CancellableRequest};
use serde::Serialize;

/// Endpoint for listing executed statement history.
const HISTORY_API_PATH: &str = "/notebook/api/get_history";

/// Default page number when the caller supplies none.
const DEFAULT_PAGE: u32 = 1;

/// Default page size when the caller supplies none.
const DEFAULT_LIMIT: u32 = 50;

/// Options for [`fetch_history`].
#[derive(Debug, Clone)]
pub struct FetchHistoryOptions {
    /// Document type to list, e.g. `query-history`. Required.
    pub doc_type: String,

    /// 1-based page number. `None` and `Some(0)` both resolve to page 1.
    pub page: Option<u32>,

    /// Page size. `None` and `Some(0)` both resolve to 50.
    pub limit: Option<u32>,

    /// Free-text filter over document contents, passed through verbatim.
    pub doc_filter: Option<String>,

    /// Flag altering server-side semantics for the notification manager
    /// view, passed through verbatim.
    pub is_notification_manager: Option<bool>,
}

impl FetchHistoryOptions {
    /// Creates options listing documents of the given type with default
    /// pagination.
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            page: None,
            limit: None,
            doc_filter: None,
            is_notification_manager: None,
        }
    }

    /// Sets the 1-based page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the free-text document filter.
    pub fn doc_filter(mut self, filter: impl Into<String>) -> Self {
        self.doc_filter = Some(filter.into());
        self
    }

    /// Sets the notification manager flag.
    pub fn notification_manager(mut self, value: bool) -> Self {
        self.is_notification_manager = Some(value);
        self
    }
}

/// Query parameters as the history endpoint expects them.
///
/// `None` fields are omitted from the query string entirely.
#[derive(Debug, Serialize)]
struct HistoryQueryParams {
    doc_type: String,
    limit: u32,
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_notification_manager: Option<bool>,
}

impl From<FetchHistoryOptions> for HistoryQueryParams {
    fn from(options: FetchHistoryOptions) -> Self {
        // Zero counts as omitted, matching the server's own falsy handling.
        Self {
            doc_type: options.doc_type,
            limit: options.limit.filter(|l| *l != 0).unwrap_or(DEFAULT_LIMIT),
            page: options.page.filter(|p| *p != 0).unwrap_or(DEFAULT_PAGE),
            doc_text: options.doc_filter,
            is_notification_manager: options.is_notification_manager,
        }
    }
}

/// Fetches a page of executed statement history.
///
/// Issues one `GET /notebook/api/get_history` request and returns a handle
/// that resolves to the parsed response. The handle can be cancelled before
/// it settles, in which case no result is delivered and awaiting it yields
/// [`ApiError::Cancelled`](crate::ApiError::Cancelled). Transport errors are
/// not interpreted here; they propagate through the handle unchanged.
///
/// Must be called from within a tokio runtime.
pub fn fetch_history(
    client: &ApiClient,
    options: FetchHistoryOptions,
) -> CancellableRequest<FetchHistoryResponse> {
    let client = client.clone();
    let params = HistoryQueryParams::from(options);
    CancellableRequest::spawn(async move { client.get_json(HISTORY_API_PATH, &params).await })
}
