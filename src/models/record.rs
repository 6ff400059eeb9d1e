// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::product::Article;
use serde_json::Number;
use std::fmt;

/// Marker written to the promo column when a product has no running promotion
pub const NO_PROMOTION: &str = "Нет акции";

/// Column names of the exported CSV, in output order
pub const CSV_HEADER: [&str; 6] = [
    "id",
    "name",
    "link",
    "regular_price",
    "promo_price",
    "brand",
];

/// Value of a price column.
///
/// The promo column mixes amounts with the [`NO_PROMOTION`] marker, so it is not
/// a plain number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceCell {
    Amount(Number),
    NoPromotion,
    Missing,
}

impl From<Option<Number>> for PriceCell {
    fn from(value: Option<Number>) -> Self {
        value.map_or(PriceCell::Missing, PriceCell::Amount)
    }
}

impl fmt::Display for PriceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceCell::Amount(n) => write!(f, "{}", n),
            PriceCell::NoPromotion => f.write_str(NO_PROMOTION),
            PriceCell::Missing => Ok(()),
        }
    }
}

/// Flattened product row, one per exported CSV line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub id: Article,
    pub name: String,
    pub full_url: String,
    pub regular_price: PriceCell,
    pub promo_price: PriceCell,
    pub brand: String,
}

impl OutputRecord {
    /// Fields in [`CSV_HEADER`] order
    pub fn to_csv_record(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.full_url.clone(),
            self.regular_price.to_string(),
            self.promo_price.to_string(),
            self.brand.clone(),
        ]
    }
}
