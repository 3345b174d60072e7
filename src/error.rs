use thiserror::Error;

/// Per-URL scan failures. These never abort the run; the aggregator
/// folds them into the ScanResult error field using `Display`.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Network(err.to_string())
    }
}

/// No credential could be resolved from flag, environment, or .env file.
/// The only fatal error in the taxonomy; raised before any network activity.
#[derive(Error, Debug)]
#[error("no API credential available")]
pub struct MissingCredential;
