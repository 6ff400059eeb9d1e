// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::Result;
use crate::models::page::PageRequest;
use crate::models::product::{CategoryData, CategoryProducts, CategoryTotal, GraphQlResponse};
use crate::models::query::QueryTemplate;
use crate::models::record::OutputRecord;
use crate::models::settings::CatalogSettings;
use crate::services::extractor::extract_product;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// GraphQL client for the products endpoint.
///
/// Holds one HTTP session for the whole run; every page request shares it.
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
    site_url: String,
    query: QueryTemplate,
}

impl CatalogClient {
    /// Open the HTTP session for a run
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: settings.endpoint.clone(),
            site_url: settings.site_url.clone(),
            query: settings.query.clone(),
        })
    }

    /// Ask the endpoint how many products the category holds
    pub async fn fetch_total(&self) -> Result<u64> {
        let data: CategoryData<CategoryTotal> = self.post(&PageRequest::count_probe()).await?;
        debug!(total = data.category.total, "Category total received");
        Ok(data.category.total)
    }

    /// Fetch one page and flatten every product on it
    pub async fn fetch_page(&self, page: PageRequest) -> Result<Vec<OutputRecord>> {
        let data: CategoryData<CategoryProducts> = self.post(&page).await?;

        let records = data
            .category
            .products
            .iter()
            .map(|item| extract_product(item, &self.site_url))
            .collect::<Result<Vec<_>>>()?;

        info!(
            page = page.page_index(),
            offset = page.offset,
            products = records.len(),
            "Processed page [{}]",
            page.page_index()
        );

        Ok(records)
    }

    /// POST the query for `page` and decode the `data` member of the answer
    async fn post<T: DeserializeOwned>(&self, page: &PageRequest) -> Result<T> {
        let payload = self.query.payload_for(page);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let envelope: GraphQlResponse<T> = serde_json::from_slice(&body)?;
        envelope.into_data()
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("endpoint", &self.endpoint)
            .field("site_url", &self.site_url)
            .finish()
    }
}
