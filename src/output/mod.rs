pub mod json;
pub mod plain;
pub mod table;

use std::env;
use std::io::IsTerminal;

use crate::types::{OutputFormat, ScanResult, TechnologyEntry};

/// Render the full result set to stdout. Explicit JSON always wins;
/// table output uses the rich renderer when the terminal supports it
/// and falls back to fixed-width plain text otherwise.
pub fn print_results(results: &[ScanResult], format: &OutputFormat, no_color: bool) {
    let rendered = match format {
        OutputFormat::Json => json::format_results(results),
        OutputFormat::Table => {
            if rich_output_enabled(no_color) {
                table::format_results(results)
            } else {
                plain::format_results(results)
            }
        }
    };
    print!("{}", rendered);
}

/// Rich output requires a terminal on stdout and no opt-out via
/// --no-color or the NO_COLOR convention.
fn rich_output_enabled(no_color: bool) -> bool {
    !no_color && std::io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none()
}

/// Technologies sorted by category ascending; the sort is stable so
/// ties keep the service's original order. A missing category sorts
/// like an empty string.
pub(crate) fn sorted_by_category(techs: &[TechnologyEntry]) -> Vec<&TechnologyEntry> {
    let mut sorted: Vec<&TechnologyEntry> = techs.iter().collect();
    sorted.sort_by(|a, b| {
        let ka = a.category.as_deref().unwrap_or("");
        let kb = b.category.as_deref().unwrap_or("");
        ka.cmp(kb)
    });
    sorted
}

pub(crate) fn category_cell(tech: &TechnologyEntry) -> &str {
    tech.category.as_deref().unwrap_or("-")
}

pub(crate) fn version_cell(tech: &TechnologyEntry) -> &str {
    tech.version
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
}

pub(crate) fn confidence_cell(tech: &TechnologyEntry) -> String {
    match tech.confidence {
        Some(confidence) => format!("{}%", confidence),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech(name: &str, category: Option<&str>) -> TechnologyEntry {
        TechnologyEntry {
            name: name.to_string(),
            category: category.map(str::to_string),
            version: None,
            confidence: None,
        }
    }

    #[test]
    fn test_sort_by_category_ascending() {
        let techs = vec![
            tech("Nginx", Some("Web Servers")),
            tech("React", Some("JavaScript Frameworks")),
        ];
        let sorted = sorted_by_category(&techs);
        assert_eq!(sorted[0].name, "React");
        assert_eq!(sorted[1].name, "Nginx");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let techs = vec![
            tech("Vue", Some("JavaScript Frameworks")),
            tech("React", Some("JavaScript Frameworks")),
        ];
        let sorted = sorted_by_category(&techs);
        assert_eq!(sorted[0].name, "Vue");
        assert_eq!(sorted[1].name, "React");
    }

    #[test]
    fn test_missing_category_sorts_first() {
        let techs = vec![tech("Nginx", Some("Web Servers")), tech("Mystery", None)];
        let sorted = sorted_by_category(&techs);
        assert_eq!(sorted[0].name, "Mystery");
    }

    #[test]
    fn test_cell_defaults() {
        let entry = tech("Mystery", None);
        assert_eq!(category_cell(&entry), "-");
        assert_eq!(version_cell(&entry), "-");
        assert_eq!(confidence_cell(&entry), "-");
    }

    #[test]
    fn test_empty_version_renders_dash() {
        let mut entry = tech("Nginx", Some("Web Servers"));
        entry.version = Some(String::new());
        assert_eq!(version_cell(&entry), "-");
    }

    #[test]
    fn test_confidence_percent() {
        let mut entry = tech("React", Some("JavaScript Frameworks"));
        entry.confidence = Some(95);
        assert_eq!(confidence_cell(&entry), "95%");
    }
}
