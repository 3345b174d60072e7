use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::constants::SIGNUP_URL;
use crate::utils::normalize_url_scheme;

/// Output format options
#[derive(clap::ValueEnum, Debug, Clone, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, after_help = format!("Get your API key at {}", SIGNUP_URL))]
pub struct Cli {
    /// One or more URLs to scan.
    pub urls: Vec<String>,

    // INPUT
    /// File containing URLs to scan, one per line ('#' lines are skipped).
    #[arg(short, long, help_heading = "INPUT")]
    pub file: Option<String>,

    // OUTPUT
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, help_heading = "OUTPUT")]
    pub output: OutputFormat,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,

    // AUTH
    /// RapidAPI key (or set the RAPIDAPI_KEY environment variable).
    #[arg(short, long, help_heading = "AUTH")]
    pub key: Option<String>,
}

/// A single input URL together with its normalized absolute form
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub raw: String,
    pub url: String,
}

impl ScanRequest {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            url: normalize_url_scheme(raw),
        }
    }
}

/// One technology detected by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologyEntry {
    #[serde(default = "unknown_name")]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub confidence: Option<u8>,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

/// Scan outcome for one input URL. `error` set means the technology
/// list is empty and the scan failed; otherwise the list is the
/// service's detections in its original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    pub technologies: Vec<TechnologyEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanResult {
    pub fn success(url: String, technologies: Vec<TechnologyEntry>) -> Self {
        Self {
            url,
            technologies,
            error: None,
        }
    }

    pub fn failure(url: String, error: String) -> Self {
        Self {
            url,
            technologies: Vec::new(),
            error: Some(error),
        }
    }
}
