// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod page;
pub mod product;
pub mod query;
pub mod record;
pub mod settings;
