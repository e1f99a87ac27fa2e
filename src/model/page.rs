use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Slices `items` into the requested 1-based page.
    ///
    /// Page numbers below 1 are treated as 1. A page past the end yields
    /// no data but still reports the real totals.
    pub fn slice(items: &[T], page: u32, per_page: u32) -> Self
    where
        T: Clone,
    {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = items.len() as u32;
        let total_pages = total.div_ceil(per_page);

        let start = ((page - 1) as usize).saturating_mul(per_page as usize);
        let data = items
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        Self {
            page,
            per_page,
            total,
            total_pages,
            data,
        }
    }
}
