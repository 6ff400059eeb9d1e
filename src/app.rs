// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! One catalog run: count probe, page fan-out, CSV export.
//!
//! This module is `pub` so that integration tests can drive a full run against a
//! mock endpoint without starting the binary.

use crate::error::{CatalogError, Result};
use crate::models::page::plan_pages;
use crate::models::settings::CatalogSettings;
use crate::services::aggregator::{gather_pages, Aggregation};
use crate::services::catalog::CatalogClient;
use crate::services::exporter::CsvExporter;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `METRO_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("METRO_VERSION");

/// Summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub path: PathBuf,
    pub started_at: DateTime<Local>,
    /// Category size reported by the count probe, if it succeeded
    pub total_reported: Option<u64>,
    pub pages_planned: usize,
    pub pages_fetched: usize,
    pub records: usize,
    /// Error that stopped fetching, if any
    pub failure: Option<String>,
}

impl RunReport {
    pub fn is_partial(&self) -> bool {
        self.failure.is_some()
    }
}

pub struct App {
    settings: CatalogSettings,
}

impl App {
    /// Validate settings and build the app
    pub fn new(settings: CatalogSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Fetch the whole category and export it.
    ///
    /// A fetch failure ends fetching but never skips the export: whatever was
    /// collected is written. Only export errors are returned.
    pub async fn run(&self) -> Result<RunReport> {
        let started_at = Local::now();
        let exporter = CsvExporter::new(&self.settings.output_dir, &self.settings.file_prefix);

        let (total_reported, aggregation) = match CatalogClient::new(&self.settings) {
            Ok(client) => self.collect(&client).await,
            Err(e) => (None, failed(e)),
        };

        let failure = aggregation.failure.as_ref().map(describe_failure);
        if let Some(message) = &failure {
            error!("{}", message);
        }

        let path = exporter.export(&aggregation.records)?;

        Ok(RunReport {
            path,
            started_at,
            total_reported,
            pages_planned: aggregation.pages_planned,
            pages_fetched: aggregation.pages_fetched,
            records: aggregation.records.len(),
            failure,
        })
    }

    /// Probe the total, then fetch every page. The probe finishes before any page starts.
    async fn collect(&self, client: &CatalogClient) -> (Option<u64>, Aggregation) {
        let total = match client.fetch_total().await {
            Ok(total) => total,
            Err(e) => return (None, failed(e)),
        };

        let pages = plan_pages(total, self.settings.page_size);
        info!(total, pages = pages.len(), "Fetching category pages");

        let aggregation = gather_pages(pages, self.settings.max_concurrency, move |page| {
            client.fetch_page(page)
        })
        .await;

        (Some(total), aggregation)
    }
}

fn failed(error: CatalogError) -> Aggregation {
    Aggregation {
        failure: Some(error),
        ..Default::default()
    }
}

/// Log line for the error that stopped a run
pub fn describe_failure(err: &CatalogError) -> String {
    if err.is_fetch_error() {
        format!("Connection error: {}", err)
    } else {
        err.to_string()
    }
}
