//! Shared request/response plumbing.

use crate::error::{ClientError, Result};
use crate::types::ApiErrorBody;
use serde::de::DeserializeOwned;

/// Map a transport-level failure, distinguishing unreachable servers.
pub(crate) fn transport_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

/// Turn a non-success response into the matching error class.
///
/// 401 is an authorization failure, 400/422 a validation failure, the
/// rest a generic server error. The backend's error body message is
/// surfaced when present.
pub(crate) async fn response_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = match response.text().await {
        Ok(text) => match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) => text,
        },
        Err(_) => String::new(),
    };

    match status {
        401 => ClientError::AuthRequired,
        400 | 422 => ClientError::Validation { status, message },
        _ => ClientError::Api { status, message },
    }
}

/// Parse a JSON body, labeling parse failures with context.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(format!("Failed to parse {what}: {e}")))
}
