use colored::*;

use crate::output::{category_cell, confidence_cell, sorted_by_category, version_cell};
use crate::types::ScanResult;

const BANNER_WIDTH: usize = 60;
const COLUMNS: [&str; 4] = ["Technology", "Category", "Version", "Confidence"];

/// Rich terminal renderer: banner, colored per-URL status lines, and a
/// column-aligned technology table per successful scan.
pub fn format_results(results: &[ScanResult]) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!("{}\n", "═".repeat(BANNER_WIDTH).cyan()));
    out.push_str(&format!(
        "{}\n",
        format!("{:^width$}", "TechStack Scanner", width = BANNER_WIDTH)
            .bold()
            .cyan()
    ));
    out.push_str(&format!(
        "{}\n",
        format!(
            "{:^width$}",
            "Powered by Technology Detection API",
            width = BANNER_WIDTH
        )
        .dimmed()
    ));
    out.push_str(&format!("{}\n\n", "═".repeat(BANNER_WIDTH).cyan()));

    for result in results {
        if let Some(error) = &result.error {
            out.push_str(&format!(
                "  {} {} — {}\n\n",
                "✗".red().bold(),
                result.url,
                error.red()
            ));
            continue;
        }

        out.push_str(&format!(
            "  {} {}  —  {}\n\n",
            "✓".green().bold(),
            result.url.bold(),
            format!("{} technologies detected", result.technologies.len()).dimmed()
        ));

        if result.technologies.is_empty() {
            out.push_str(&format!("    {}\n\n", "No technologies detected.".dimmed()));
            continue;
        }

        out.push_str(&format_table(result));
        out.push('\n');
    }

    out
}

fn format_table(result: &ScanResult) -> String {
    let sorted = sorted_by_category(&result.technologies);

    // Column widths grow with content so nothing is clipped.
    let mut widths = [
        COLUMNS[0].len(),
        COLUMNS[1].len(),
        COLUMNS[2].len(),
        COLUMNS[3].len(),
    ];
    for tech in &sorted {
        widths[0] = widths[0].max(tech.name.chars().count());
        widths[1] = widths[1].max(category_cell(tech).chars().count());
        widths[2] = widths[2].max(version_cell(tech).chars().count());
        widths[3] = widths[3].max(confidence_cell(tech).chars().count());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "    {}  {}  {}  {}\n",
        pad(COLUMNS[0], widths[0]).magenta().bold(),
        pad(COLUMNS[1], widths[1]).magenta().bold(),
        pad(COLUMNS[2], widths[2]).magenta().bold(),
        pad_right(COLUMNS[3], widths[3]).magenta().bold(),
    ));
    out.push_str(&format!(
        "    {}\n",
        "─".repeat(widths.iter().sum::<usize>() + 6).dimmed()
    ));

    for tech in sorted {
        out.push_str(&format!(
            "    {}  {}  {}  {}\n",
            pad(&tech.name, widths[0]).cyan(),
            pad(category_cell(tech), widths[1]).yellow(),
            pad(version_cell(tech), widths[2]).green(),
            pad_right(&confidence_cell(tech), widths[3]),
        ));
    }

    out
}

// Pad before coloring; ANSI escapes would throw off format! widths.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text)
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{:>width$}", text)
}
