use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

use crate::constants::REQUEST_TIMEOUT_SECS;

/// Build the HTTP client used for every detection request
pub fn build_http_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    Ok(client)
}
