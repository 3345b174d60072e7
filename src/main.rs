use anyhow::Result;
use clap::{CommandFactory, Parser};

mod constants;
mod credentials;
mod error;
mod http;
mod output;
mod processor;
mod types;
mod utils;

use crate::constants::{ENV_FILE_NAME, RAPIDAPI_KEY_VAR, SIGNUP_URL};
use crate::credentials::resolve_api_key;
use crate::http::build_http_client;
use crate::output::print_results;
use crate::processor::scan_urls;
use crate::types::Cli;
use crate::utils::read_urls_file;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut urls = cli.urls.clone();
    if let Some(path) = &cli.file {
        urls.extend(read_urls_file(path)?);
    }

    if urls.is_empty() {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let api_key = match resolve_api_key(cli.key.as_deref()) {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Error: No API key provided.");
            eprintln!(
                "Set the {} environment variable, create a {} file, or use --key.",
                RAPIDAPI_KEY_VAR, ENV_FILE_NAME
            );
            eprintln!("Get your key at {}", SIGNUP_URL);
            std::process::exit(1);
        }
    };

    let client = build_http_client()?;
    let results = scan_urls(&client, &urls, &api_key).await;

    // Per-URL failures are reported in the output; the exit code only
    // reflects whether the tool itself could run.
    print_results(&results, &cli.output, cli.no_color);

    Ok(())
}
