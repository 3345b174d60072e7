use crate::types::ScanResult;

/// Serialize the full result set as pretty-printed JSON. This is the
/// machine-facing format: every field of every ScanResult round-trips.
pub fn format_results(results: &[ScanResult]) -> String {
    let mut rendered = serde_json::to_string_pretty(results).unwrap_or_default();
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TechnologyEntry;

    fn sample_results() -> Vec<ScanResult> {
        vec![
            ScanResult::success(
                "https://example.com".to_string(),
                vec![TechnologyEntry {
                    name: "React".to_string(),
                    category: Some("JavaScript Frameworks".to_string()),
                    version: Some("18.2".to_string()),
                    confidence: Some(95),
                }],
            ),
            ScanResult::failure(
                "https://bad.test".to_string(),
                "HTTP 403: Forbidden".to_string(),
            ),
        ]
    }

    #[test]
    fn test_round_trip_fidelity() {
        let results = sample_results();
        let rendered = format_results(&results);
        let parsed: Vec<ScanResult> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_error_field_omitted_on_success() {
        let rendered = format_results(&sample_results());
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(parsed[0].get("error").is_none());
        assert_eq!(parsed[1]["error"], "HTTP 403: Forbidden");
    }

    #[test]
    fn test_optional_fields_serialized_as_null() {
        let results = vec![ScanResult::success(
            "https://example.com".to_string(),
            vec![TechnologyEntry {
                name: "Unknown".to_string(),
                category: None,
                version: None,
                confidence: None,
            }],
        )];
        let rendered = format_results(&results);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(parsed[0]["technologies"][0]["version"].is_null());
        assert!(parsed[0]["technologies"][0]["confidence"].is_null());
    }

    #[test]
    fn test_two_space_indentation() {
        let rendered = format_results(&sample_results());
        assert!(rendered.lines().nth(1).unwrap().starts_with("  {"));
    }
}
