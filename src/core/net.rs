use url::Url;

use crate::core::{SnapshotError, client::redact_url};

/// Read the response body as text, mapping non-2xx statuses to [`SnapshotError::Status`].
///
/// The body of an error response is logged at debug level and dropped.
/// Transport errors lose their URL so the API key never reaches a log line.
pub(crate) async fn get_text(resp: reqwest::Response, url: &Url) -> Result<String, SnapshotError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| SnapshotError::Http(e.without_url()))?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), body = %text, "non-success response body");
        return Err(SnapshotError::Status {
            status: status.as_u16(),
            url: redact_url(url),
        });
    }

    Ok(text)
}
