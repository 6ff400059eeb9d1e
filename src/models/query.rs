// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::{CatalogError, Result};
use crate::models::page::PageRequest;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::Path;

/// Category listing query. Selects only what the extractor reads.
pub const CATEGORY_QUERY: &str = r#"
query Query($storeId: Int!, $slug: String!, $inStock: Boolean, $from: Int!, $size: Int!) {
  category(storeId: $storeId, slug: $slug, inStock: $inStock) {
    total
    products(from: $from, size: $size) {
      article
      name
      url
      manufacturer {
        name
      }
      stocks {
        prices {
          price
          old_price
        }
      }
    }
  }
}
"#;

pub const DEFAULT_STORE_ID: u32 = 10;
pub const DEFAULT_CATEGORY: &str = "chay";

/// Immutable `{query, variables}` pair that every request body is built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTemplate {
    pub query: String,
    #[serde(default)]
    pub variables: Map<String, Value>,
}

impl QueryTemplate {
    /// Built-in category query for a store and category slug
    pub fn category(store_id: u32, slug: &str) -> Self {
        let mut variables = Map::new();
        variables.insert("storeId".to_string(), json!(store_id));
        variables.insert("slug".to_string(), json!(slug));
        variables.insert("inStock".to_string(), json!(true));
        variables.insert("from".to_string(), json!(0));
        variables.insert("size".to_string(), json!(0));

        Self {
            query: CATEGORY_QUERY.to_string(),
            variables,
        }
    }

    /// Load a template from a JSON file holding `{"query": ..., "variables": {...}}`
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let template: QueryTemplate = serde_json::from_str(&raw)?;
        if template.query.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(format!(
                "query file {} has an empty query",
                path.display()
            )));
        }
        Ok(template)
    }

    /// Request body for one page. The template itself is never modified.
    pub fn payload_for(&self, page: &PageRequest) -> Value {
        let mut variables = self.variables.clone();
        variables.insert("from".to_string(), json!(page.offset));
        variables.insert("size".to_string(), json!(page.size));

        json!({
            "query": self.query,
            "variables": variables,
        })
    }
}

impl Default for QueryTemplate {
    fn default() -> Self {
        Self::category(DEFAULT_STORE_ID, DEFAULT_CATEGORY)
    }
}
