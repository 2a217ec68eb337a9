use reqwest::{Response, StatusCode};
use url::Url;

use crate::domain::{ApiErrorBody, ClassificationResult};

use super::error::RemoteError;

pub const CLASSIFY_PATH: &str = "classify";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "unknown communication error with the classification API";

/// `{base}/classify` with a single separating slash, keeping any path prefix
/// of the base. `None` for URLs that cannot carry a path.
pub fn classify_endpoint(base: &Url) -> Option<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(CLASSIFY_PATH);
    Some(url)
}

pub async fn parse_response(response: Response) -> Result<ClassificationResult, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RemoteError::Service {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }

    response
        .json::<ClassificationResult>()
        .await
        .map_err(RemoteError::Decode)
}

pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message())
        .unwrap_or_else(|| format!("HTTP Error: {}", status.as_u16()))
}
