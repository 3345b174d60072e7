/// Normalize a URL by prefixing https:// when no scheme is present.
/// Never fails; deeper validation is left to the remote service.
pub fn normalize_url_scheme(url_str: &str) -> String {
    let trimmed_url = url_str.trim();
    if trimmed_url.starts_with("http://") || trimmed_url.starts_with("https://") {
        return trimmed_url.to_string();
    }

    format!("https://{}", trimmed_url)
}
