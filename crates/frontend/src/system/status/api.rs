use contracts::shared::api_error::ApiError;

use crate::shared::http::HttpBackend;

/// `GET {base}/`: the backend's self-description, pretty-printed.
pub async fn fetch_backend_status(backend: &HttpBackend) -> Result<String, ApiError> {
    let value: serde_json::Value = backend
        .get_json("/", "Backend non disponibile")
        .await?;
    serde_json::to_string_pretty(&value).map_err(|e| ApiError::Decode(e.to_string()))
}
