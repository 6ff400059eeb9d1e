// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::{CatalogError, Result};
use crate::models::query::QueryTemplate;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.metro-cc.ru/products-api/graph";
pub const DEFAULT_SITE_URL: &str = "https://online.metro-cc.ru";
pub const DEFAULT_PAGE_SIZE: u32 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "csv";
pub const DEFAULT_FILE_PREFIX: &str = "metro";
pub const DEFAULT_USER_AGENT: &str = concat!("metro-catalog/", env!("CARGO_PKG_VERSION"));

/// Everything a catalog run needs. Read-only once the run starts.
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// GraphQL endpoint the catalog is POSTed to
    pub endpoint: String,
    /// Prefix prepended to product paths to build links
    pub site_url: String,
    pub page_size: u32,
    /// Upper bound on page requests in flight; `None` fans out every page at once
    pub max_concurrency: Option<usize>,
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
    pub query: QueryTemplate,
    pub output_dir: PathBuf,
    pub file_prefix: String,
}

impl CatalogSettings {
    /// Check the values a run cannot start without
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.endpoint).map_err(|e| {
            CatalogError::InvalidConfig(format!("endpoint '{}' is not a URL: {}", self.endpoint, e))
        })?;

        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page size must be at least 1".to_string(),
            ));
        }

        if self.max_concurrency == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "max concurrency must be at least 1".to_string(),
            ));
        }

        if self.file_prefix.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "file prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_concurrency: None,
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            query: QueryTemplate::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = CatalogSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.page_size, 30);
        assert!(settings.max_concurrency.is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let settings = CatalogSettings {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(CatalogError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let settings = CatalogSettings {
            max_concurrency: Some(0),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let settings = CatalogSettings {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("not a URL"));
    }
}
