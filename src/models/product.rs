// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Wire shapes of the products GraphQL endpoint.
//!
//! Only the fields the extractor reads are modelled; serde ignores the rest.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Product identifier. The API sends a number for most stores and a string for a few.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Article {
    Number(Number),
    Text(String),
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Article::Number(n) => write!(f, "{}", n),
            Article::Text(s) => f.write_str(s),
        }
    }
}

/// One product as returned inside `data.category.products`
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub article: Article,
    pub name: String,
    /// Site-relative path, e.g. `/products/kofe-zernovoy-1kg`
    pub url: String,
    #[serde(default)]
    pub stocks: Vec<Stock>,
    #[serde(default)]
    pub manufacturer: Option<Manufacturer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stock {
    pub prices: Prices,
}

/// Price pair of a stock entry. `old_price` is only set while a promotion runs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Prices {
    #[serde(default)]
    pub price: Option<Number>,
    #[serde(default)]
    pub old_price: Option<Number>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Manufacturer {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Top-level GraphQL response. `T` selects which part of the category is decoded.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Unwrap `data`, turning a data-less response into a [`CatalogError::GraphQl`]
    pub fn into_data(self) -> Result<T> {
        match self.data {
            Some(data) => Ok(data),
            None if self.errors.is_empty() => {
                Err(CatalogError::GraphQl("response carried no data".to_string()))
            }
            None => {
                let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
                Err(CatalogError::GraphQl(messages.join("; ")))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryData<T> {
    pub category: T,
}

/// Count probe view of the category
#[derive(Debug, Deserialize)]
pub struct CategoryTotal {
    pub total: u64,
}

/// Page view of the category
#[derive(Debug, Deserialize)]
pub struct CategoryProducts {
    pub products: Vec<ProductRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_accepts_number_and_string() {
        let n: Article = serde_json::from_str("123456").unwrap();
        let s: Article = serde_json::from_str("\"A-17\"").unwrap();
        assert_eq!(n.to_string(), "123456");
        assert_eq!(s.to_string(), "A-17");
    }

    #[test]
    fn test_product_decodes_with_nullable_prices() {
        let json = r#"{
            "article": 204981,
            "name": "Кофе зерновой",
            "url": "/products/kofe",
            "stocks": [{"prices": {"price": 899.9, "old_price": null}}],
            "manufacturer": {"name": "Lavazza"},
            "rating": 4.5
        }"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.stocks.len(), 1);
        assert!(product.stocks[0].prices.old_price.is_none());
        assert_eq!(product.stocks[0].prices.price.as_ref().unwrap().to_string(), "899.9");
        assert_eq!(product.manufacturer.unwrap().name, "Lavazza");
    }

    #[test]
    fn test_into_data_reports_graphql_messages() {
        let json = r#"{"data": null, "errors": [{"message": "bad slug"}, {"message": "retry"}]}"#;
        let response: GraphQlResponse<CategoryData<CategoryTotal>> =
            serde_json::from_str(json).unwrap();
        match response.into_data() {
            Err(CatalogError::GraphQl(msg)) => assert_eq!(msg, "bad slug; retry"),
            other => panic!("expected GraphQl error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_data_returns_total() {
        let json = r#"{"data": {"category": {"total": 65, "products": []}}}"#;
        let response: GraphQlResponse<CategoryData<CategoryTotal>> =
            serde_json::from_str(json).unwrap();
        assert_eq!(response.into_data().unwrap().category.total, 65);
    }
}
