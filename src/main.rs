// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::{Context, Result};
use clap::Parser;
use metro_catalog::app::{App, VERSION};
use metro_catalog::models::query::{QueryTemplate, DEFAULT_CATEGORY, DEFAULT_STORE_ID};
use metro_catalog::models::settings::{
    CatalogSettings, DEFAULT_ENDPOINT, DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_SIZE,
    DEFAULT_SITE_URL, DEFAULT_USER_AGENT,
};
use metro_catalog::services::logging::init_tracing;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Export a store category from the products GraphQL API to CSV
#[derive(Parser, Debug)]
#[command(name = "metro-catalog", version = VERSION, long_about = None)]
struct Cli {
    /// GraphQL endpoint URL
    #[arg(long, env = "METRO_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Prefix prepended to product paths in the link column
    #[arg(long, env = "METRO_SITE_URL", default_value = DEFAULT_SITE_URL)]
    site_url: String,

    /// Products requested per page
    #[arg(long, env = "METRO_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE,
          value_parser = clap::value_parser!(u32).range(1..))]
    page_size: u32,

    /// Maximum page requests in flight (all pages at once when unset)
    #[arg(long, env = "METRO_MAX_CONCURRENCY")]
    max_concurrency: Option<NonZeroUsize>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long, env = "METRO_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,

    /// Store whose catalog is exported
    #[arg(long, env = "METRO_STORE_ID", default_value_t = DEFAULT_STORE_ID)]
    store_id: u32,

    /// Category slug
    #[arg(long, env = "METRO_CATEGORY", default_value = DEFAULT_CATEGORY)]
    category: String,

    /// JSON file with {"query", "variables"} replacing the built-in category query
    #[arg(long, env = "METRO_QUERY_FILE")]
    query_file: Option<PathBuf>,

    /// Directory the CSV file is written to
    #[arg(long, env = "METRO_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// File name prefix, followed by the run timestamp
    #[arg(long, env = "METRO_FILE_PREFIX", default_value = DEFAULT_FILE_PREFIX)]
    file_prefix: String,

    #[arg(long, env = "METRO_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_settings(self) -> Result<CatalogSettings> {
        let query = match &self.query_file {
            Some(path) => QueryTemplate::from_file(path)
                .with_context(|| format!("Failed to load query file {}", path.display()))?,
            None => QueryTemplate::category(self.store_id, &self.category),
        };

        Ok(CatalogSettings {
            endpoint: self.endpoint,
            site_url: self.site_url,
            page_size: self.page_size,
            max_concurrency: self.max_concurrency.map(NonZeroUsize::get),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent,
            query,
            output_dir: self.output_dir,
            file_prefix: self.file_prefix,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let print_json = cli.json;
    let settings = cli.into_settings()?;

    info!(
        "metro-catalog v{} exporting from {} (page size {})",
        VERSION, settings.endpoint, settings.page_size
    );

    let app = App::new(settings).context("Invalid configuration")?;
    let report = app.run().await.context("Failed to export catalog")?;

    if report.is_partial() {
        warn!(
            "Export is partial: {} of {} pages fetched",
            report.pages_fetched, report.pages_planned
        );
    }

    info!(
        "Saved {} products to {}",
        report.records,
        report.path.display()
    );

    if print_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_settings_defaults() {
        let cli = Cli::try_parse_from(["metro-catalog"]).unwrap();
        let settings = cli.into_settings().unwrap();
        let defaults = CatalogSettings::default();

        assert_eq!(settings.endpoint, defaults.endpoint);
        assert_eq!(settings.page_size, 30);
        assert_eq!(settings.output_dir, PathBuf::from("csv"));
        assert_eq!(settings.file_prefix, "metro");
        assert_eq!(settings.query, defaults.query);
        assert!(settings.max_concurrency.is_none());
        assert!(settings.request_timeout.is_none());
    }

    #[test]
    fn test_cli_rejects_zero_page_size() {
        assert!(Cli::try_parse_from(["metro-catalog", "--page-size", "0"]).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "metro-catalog",
            "--page-size",
            "50",
            "--max-concurrency",
            "4",
            "--request-timeout-secs",
            "15",
            "--store-id",
            "12",
            "--category",
            "kofe",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let settings = cli.into_settings().unwrap();
        assert_eq!(settings.page_size, 50);
        assert_eq!(settings.max_concurrency, Some(4));
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.query.variables["storeId"], 12);
        assert_eq!(settings.query.variables["slug"], "kofe");
    }
}
