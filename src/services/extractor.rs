// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::{CatalogError, Result};
use crate::models::product::{Prices, ProductRecord};
use crate::models::record::{OutputRecord, PriceCell};

/// Flatten one raw product into an export row
pub fn extract_product(item: &ProductRecord, site_url: &str) -> Result<OutputRecord> {
    let stock = item
        .stocks
        .first()
        .ok_or(CatalogError::MissingField("stocks"))?;

    let brand = item
        .manufacturer
        .as_ref()
        .ok_or(CatalogError::MissingField("manufacturer"))?
        .name
        .clone();

    let (regular_price, promo_price) = resolve_prices(&stock.prices);

    Ok(OutputRecord {
        id: item.article.clone(),
        name: item.name.clone(),
        full_url: product_link(site_url, &item.url),
        regular_price,
        promo_price,
        brand,
    })
}

/// Split a price pair into (regular, promo).
///
/// A non-null `old_price` means a promotion is running: it becomes the regular price
/// and `price` the promo price. Otherwise `price` is regular and promo is the marker.
pub fn resolve_prices(prices: &Prices) -> (PriceCell, PriceCell) {
    match &prices.old_price {
        Some(old) => (
            PriceCell::Amount(old.clone()),
            PriceCell::from(prices.price.clone()),
        ),
        None => (PriceCell::from(prices.price.clone()), PriceCell::NoPromotion),
    }
}

/// Join the site prefix and a product path with exactly one slash between them.
/// Paths that already carry the prefix are returned as-is.
pub fn product_link(site_url: &str, path: &str) -> String {
    let base = site_url.trim_end_matches('/');
    if path.starts_with(base) {
        return path.to_string();
    }

    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
