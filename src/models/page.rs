// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

/// One page slice of the catalog. Built fresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based index of the first product in the page
    pub offset: u64,
    /// Number of products requested
    pub size: u32,
}

impl PageRequest {
    pub fn new(offset: u64, size: u32) -> Self {
        Self { offset, size }
    }

    /// Zero-size request that only asks for the category total
    pub fn count_probe() -> Self {
        Self { offset: 0, size: 0 }
    }

    /// One-based page number used in progress output
    pub fn page_index(&self) -> u64 {
        if self.size == 0 {
            return 1;
        }
        self.offset / u64::from(self.size) + 1
    }
}

/// Plan the page requests covering `total` products.
///
/// Offsets run 0, size, 2*size, ... while below `total`; the last page may be partial.
/// A zero page size plans nothing.
pub fn plan_pages(total: u64, page_size: u32) -> Vec<PageRequest> {
    if page_size == 0 {
        return Vec::new();
    }

    (0..total)
        .step_by(page_size as usize)
        .map(|offset| PageRequest::new(offset, page_size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(total: u64, size: u32) -> Vec<u64> {
        plan_pages(total, size).iter().map(|p| p.offset).collect()
    }

    #[test]
    fn test_plan_pages_partial_last_page() {
        assert_eq!(offsets(65, 30), vec![0, 30, 60]);
    }

    #[test]
    fn test_plan_pages_exact_multiple() {
        assert_eq!(offsets(60, 30), vec![0, 30]);
    }

    #[test]
    fn test_plan_pages_empty_catalog() {
        assert!(plan_pages(0, 30).is_empty());
    }

    #[test]
    fn test_plan_pages_zero_size_plans_nothing() {
        assert!(plan_pages(100, 0).is_empty());
    }

    #[test]
    fn test_last_offset_covers_remainder() {
        for total in 1..200u64 {
            for size in [1u32, 7, 30, 64, 250] {
                let plan = offsets(total, size);
                let last = *plan.last().unwrap();
                assert!(total - last <= u64::from(size), "total={total} size={size}");
                assert!(last < total);
                assert_eq!(plan.len() as u64, total.div_ceil(u64::from(size)));
            }
        }
    }

    #[test]
    fn test_page_index_is_one_based() {
        let plan = plan_pages(65, 30);
        let indices: Vec<u64> = plan.iter().map(PageRequest::page_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_count_probe_requests_no_products() {
        let probe = PageRequest::count_probe();
        assert_eq!(probe.size, 0);
        assert_eq!(probe.offset, 0);
    }
}
