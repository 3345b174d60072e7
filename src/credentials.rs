use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{ENV_FILE_NAME, RAPIDAPI_KEY_VAR};
use crate::error::MissingCredential;

/// Resolve the RapidAPI key: explicit --key value, then the environment
/// variable, then a .env file beside the executable or in the current
/// directory. Empty values never satisfy a step.
pub fn resolve_api_key(explicit: Option<&str>) -> Result<String, MissingCredential> {
    if let Some(key) = explicit
        && !key.trim().is_empty()
    {
        return Ok(key.trim().to_string());
    }

    if let Ok(key) = env::var(RAPIDAPI_KEY_VAR)
        && !key.trim().is_empty()
    {
        return Ok(key.trim().to_string());
    }

    for path in env_file_candidates() {
        if let Some(key) = key_from_env_file(&path) {
            return Ok(key);
        }
    }

    Err(MissingCredential)
}

fn env_file_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe) = env::current_exe()
        && let Some(dir) = exe.parent()
    {
        paths.push(dir.join(ENV_FILE_NAME));
    }
    paths.push(PathBuf::from(ENV_FILE_NAME));
    paths
}

/// Read the first RAPIDAPI_KEY entry from a .env file. dotenvy handles
/// comments, blank lines, and quote stripping; an unreadable or
/// malformed file simply yields nothing.
fn key_from_env_file(path: &Path) -> Option<String> {
    let entries = dotenvy::from_path_iter(path).ok()?;
    for (key, value) in entries.flatten() {
        if key == RAPIDAPI_KEY_VAR && !value.is_empty() {
            return Some(value);
        }
    }
    None
}
