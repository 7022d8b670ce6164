//! SQL statement formatting.
//!
//! The notebook backend exposes a formatting service that rewrites raw SQL
//! text for display and editing. This module wraps that endpoint: on any
//! failure the caller gets the original text back, leaving the statement
//! simply unformatted rather than breaking the editor flow.

use crate::client::{ApiClient, ApiError};
use log::debug;
use serde::{Deserialize, Serialize};

/// Endpoint for server-side statement formatting.
const FORMAT_API_PATH: &str = "/notebook/api/format";

/// Sentinel status the server uses to report failure inside a 2xx body.
const STATUS_FAILED: i32 = -1;

/// Options for [`format_sql`].
#[derive(Debug, Clone, Default)]
pub struct FormatSqlOptions {
    /// Raw SQL text to format. May be empty.
    pub statements: String,

    /// When true, transport and server errors are swallowed and the original
    /// text is returned instead. Defaults to false.
    pub silence_errors: bool,
}

impl FormatSqlOptions {
    /// Creates options for formatting the given statements.
    pub fn new(statements: impl Into<String>) -> Self {
        Self {
            statements: statements.into(),
            silence_errors: false,
        }
    }

    /// Sets whether transport errors are silenced.
    pub fn silence_errors(mut self, silence: bool) -> Self {
        self.silence_errors = silence;
        self
    }
}

/// Form body sent to the formatting endpoint.
#[derive(Serialize)]
struct FormatForm<'a> {
    statements: &'a str,
}

/// Response body of the formatting endpoint.
#[derive(Debug, Deserialize)]
struct FormatApiResponse {
    status: i32,
    formatted_statements: Option<String>,
}

/// Formats SQL statements using the backend formatting service.
///
/// Issues one `POST /notebook/api/format` request carrying the statements as
/// form-encoded data. Returns the formatted text when the server reports
/// success and includes a non-empty result; in every other soft-failure case
/// (sentinel status, missing or empty formatted text) the original statements
/// are returned unchanged.
///
/// # Errors
///
/// Transport and server errors propagate unless
/// [`silence_errors`](FormatSqlOptions::silence_errors) is set, in which case
/// the original statements are returned instead.
pub async fn format_sql(client: &ApiClient, options: FormatSqlOptions) -> Result<String, ApiError> {
    let form = FormatForm {
        statements: &options.statements,
    };

    match client
        .post_form::<_, FormatApiResponse>(FORMAT_API_PATH, &form)
        .await
    {
        Ok(response) => {
            if response.status != STATUS_FAILED {
                if let Some(formatted) = response.formatted_statements {
                    if !formatted.is_empty() {
                        return Ok(formatted);
                    }
                }
            }
            Ok(options.statements)
        }
        Err(err) if options.silence_errors => {
            debug!("formatting failed, returning original text: {}", err);
            Ok(options.statements)
        }
        Err(err) => Err(err),
    }
}
