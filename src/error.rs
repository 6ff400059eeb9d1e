// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Error types shared by the catalog client, aggregator and exporter.

use thiserror::Error;

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection, TLS, timeout or non-success HTTP status
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expect
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The endpoint answered with GraphQL errors and no data
    #[error("graphql error: {0}")]
    GraphQl(String),

    /// A product is missing a field the extractor needs
    #[error("product is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    /// True for failures raised while talking to the endpoint or reading its answer
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Transport(_)
                | CatalogError::Decode(_)
                | CatalogError::GraphQl(_)
                | CatalogError::MissingField(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = CatalogError::MissingField("stocks");
        assert_eq!(err.to_string(), "product is missing required field `stocks`");
    }

    #[test]
    fn test_decode_error_is_fetch_error() {
        let err: CatalogError = serde_json::from_str::<u64>("nope").unwrap_err().into();
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_config_error_is_not_fetch_error() {
        let err = CatalogError::InvalidConfig("page size".to_string());
        assert!(!err.is_fetch_error());
    }
}
