use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read URLs from a file, one per line. Blank lines and '#' comment
/// lines are skipped.
pub fn read_urls_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL file: {}", path.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_urls_skips_blanks_and_comments() {
        let path = write_temp(
            "techscan_test_urls.txt",
            "example.com\n\n# a comment\n  https://other.test  \n",
        );
        let urls = read_urls_file(&path).unwrap();
        assert_eq!(urls, vec!["example.com", "https://other.test"]);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_urls_missing_file() {
        assert!(read_urls_file("/nonexistent/urls.txt").is_err());
    }
}
