use crate::output::{category_cell, confidence_cell, sorted_by_category, version_cell};
use crate::types::ScanResult;

const RULE_WIDTH: usize = 60;

/// Plain-text fallback renderer for terminals without color support.
/// Same content and ordering as the rich table, fixed-width columns.
pub fn format_results(results: &[ScanResult]) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str("  TechStack Scanner\n");
    out.push_str("  Powered by Technology Detection API\n");
    out.push_str(&format!("{}\n\n", "=".repeat(RULE_WIDTH)));

    for result in results {
        if let Some(error) = &result.error {
            out.push_str(&format!("  [ERROR] {} — {}\n\n", result.url, error));
            continue;
        }

        out.push_str(&format!(
            "  {}  —  {} technologies detected\n",
            result.url,
            result.technologies.len()
        ));
        out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

        if result.technologies.is_empty() {
            out.push_str("    No technologies detected.\n\n");
            continue;
        }

        out.push_str(&format!(
            "  {:<22} {:<20} {:<10} {:>10}\n",
            "Technology", "Category", "Version", "Confidence"
        ));
        out.push_str(&format!("  {}\n", "-".repeat(56)));

        for tech in sorted_by_category(&result.technologies) {
            out.push_str(&format!(
                "  {:<22} {:<20} {:<10} {:>10}\n",
                tech.name,
                category_cell(tech),
                version_cell(tech),
                confidence_cell(tech)
            ));
        }

        out.push('\n');
    }

    out
}
