// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Concurrent page fan-out and order-preserving fan-in.
//!
//! Pages are polled as futures on the calling task, so nothing here needs a lock:
//! each finished page lands in its own slot and the slots are concatenated in
//! offset order once fetching stops.

use crate::error::{CatalogError, Result};
use crate::models::page::PageRequest;
use crate::models::record::OutputRecord;
use futures::stream::{self, StreamExt};
use std::future::Future;
use tracing::{debug, warn};

/// Outcome of fetching every planned page
#[derive(Debug, Default)]
pub struct Aggregation {
    /// Records of all completed pages, in offset order
    pub records: Vec<OutputRecord>,
    pub pages_planned: usize,
    pub pages_fetched: usize,
    /// First error observed; fetching stopped there
    pub failure: Option<CatalogError>,
}

impl Aggregation {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && self.pages_fetched == self.pages_planned
    }
}

/// Fetch all `pages` concurrently and merge their records in offset order.
///
/// With `max_concurrency` unset every page is in flight at once. The first failure
/// stops the fan-in: pages already finished are kept, the rest are dropped.
pub async fn gather_pages<F, Fut>(
    pages: Vec<PageRequest>,
    max_concurrency: Option<usize>,
    fetch: F,
) -> Aggregation
where
    F: Fn(PageRequest) -> Fut,
    Fut: Future<Output = Result<Vec<OutputRecord>>>,
{
    let pages_planned = pages.len();
    if pages_planned == 0 {
        return Aggregation::default();
    }

    let limit = max_concurrency.unwrap_or(pages_planned).max(1);
    debug!(pages = pages_planned, limit, "Launching page requests");

    let mut slots: Vec<Option<Vec<OutputRecord>>> = vec![None; pages_planned];
    let mut failure = None;

    let mut in_flight = stream::iter(pages.into_iter().enumerate())
        .map(|(slot, page)| {
            let request = fetch(page);
            async move { (slot, page, request.await) }
        })
        .buffer_unordered(limit);

    while let Some((slot, page, outcome)) = in_flight.next().await {
        match outcome {
            Ok(records) => slots[slot] = Some(records),
            Err(e) => {
                warn!(
                    page = page.page_index(),
                    offset = page.offset,
                    "Page request failed: {}",
                    e
                );
                failure = Some(e);
                break;
            }
        }
    }
    drop(in_flight);

    let pages_fetched = slots.iter().filter(|slot| slot.is_some()).count();
    let records = slots.into_iter().flatten().flatten().collect();

    Aggregation {
        records,
        pages_planned,
        pages_fetched,
        failure,
    }
}
