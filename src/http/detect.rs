use reqwest::Client;
use serde_json::{Value, json};

use crate::constants::{
    API_HOST, API_URL, BODY_EXCERPT_LIMIT, RAPIDAPI_HOST_HEADER, RAPIDAPI_KEY_HEADER,
};
use crate::error::ScanError;

/// Call the Technology Detection API for a single URL. Non-2xx
/// responses become ScanError::Http with a bounded body excerpt;
/// transport and decode failures become ScanError::Network.
pub async fn detect(client: &Client, url: &str, api_key: &str) -> Result<Value, ScanError> {
    let resp = client
        .post(API_URL)
        .header(RAPIDAPI_KEY_HEADER, api_key)
        .header(RAPIDAPI_HOST_HEADER, API_HOST)
        .json(&json!({ "url": url }))
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ScanError::Http {
            status: status.as_u16(),
            body: excerpt(&body),
        });
    }

    Ok(resp.json().await?)
}

/// Truncate a response body for diagnostics
fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_LIMIT).collect()
}
