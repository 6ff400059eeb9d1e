// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod aggregator;
pub mod catalog;
pub mod exporter;
pub mod extractor;
pub mod logging;
