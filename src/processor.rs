use reqwest::Client;
use serde_json::Value;

use crate::error::ScanError;
use crate::http::detect;
use crate::types::{ScanRequest, ScanResult, TechnologyEntry};

/// Scan every URL sequentially. One ScanResult per input, in input
/// order; per-URL failures are folded in and never stop the loop.
pub async fn scan_urls(client: &Client, urls: &[String], api_key: &str) -> Vec<ScanResult> {
    let mut results = Vec::with_capacity(urls.len());

    for raw_url in urls {
        let request = ScanRequest::new(raw_url);
        let outcome = detect(client, &request.url, api_key).await;
        results.push(aggregate(request.url, outcome));
    }

    results
}

/// Fold a raw detection outcome into a ScanResult
pub fn aggregate(url: String, outcome: Result<Value, ScanError>) -> ScanResult {
    match outcome {
        Ok(payload) => match extract_technologies(&payload) {
            Some(technologies) => ScanResult::success(url, technologies),
            None => {
                eprintln!(
                    "[Warning] Unrecognized response shape for {}; treating as no detections",
                    url
                );
                ScanResult::success(url, Vec::new())
            }
        },
        Err(err) => ScanResult::failure(url, err.to_string()),
    }
}

/// Pull the technology list out of the service's response. The API has
/// returned several shapes over time: a bare array, an object with a
/// "technologies" array, or an object whose "results" field holds
/// either the array or another object wrapping it. First match wins;
/// `None` means none of the known shapes applied.
pub fn extract_technologies(payload: &Value) -> Option<Vec<TechnologyEntry>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("technologies") {
            Some(Value::Array(items)) => items,
            _ => match map.get("results") {
                Some(Value::Array(items)) => items,
                Some(Value::Object(inner)) => match inner.get("technologies") {
                    Some(Value::Array(items)) => items,
                    _ => return None,
                },
                _ => return None,
            },
        },
        _ => return None,
    };

    // Entries that are not objects (or carry out-of-range fields) are dropped.
    Some(
        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
    )
}
