//! Client library for the SQL notebook REST API.
//!
//! This crate provides typed access to the notebook backend endpoints used by
//! the SQL editor: server-side statement formatting and the paginated history
//! of previously executed statements.
//!
//! # Architecture
//!
//! The crate is organized into three modules:
//!
//! - **client**: Generic HTTP transport built on reqwest — configuration,
//!   error types, and cancellable request handles
//! - **format**: The statement formatting operation
//! - **history**: The query history operation and its wire models
//!
//! Both operations are stateless; an [`ApiClient`] is a cheap-to-clone handle
//! and any number of calls may be in flight concurrently, with no ordering
//! guarantee between their completions.
//!
//! # Usage
//!
//! ```no_run
//! use notebook_api_client::{ApiClient, ClientConfig};
//! use notebook_api_client::format::{format_sql, FormatSqlOptions};
//! use notebook_api_client::history::{fetch_history, FetchHistoryOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:8888"))?;
//!
//! let formatted = format_sql(&client, FormatSqlOptions::new("select 1")).await?;
//!
//! let request = fetch_history(&client, FetchHistoryOptions::new("query-history"));
//! let history = request.await?;
//! println!("{} matching documents", history.count);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod format;
pub mod history;

pub use client::cancellation::CancellableRequest;
pub use client::config::ClientConfig;
pub use client::error::ApiError;
pub use client::ApiClient;
