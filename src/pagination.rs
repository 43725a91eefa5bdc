//! Pagination over the upstream's capped result window.

use crate::domain::types::{PageNumber, PageSize};

/// The repository search endpoint never serves more than this many matches,
/// however large the reported `total_count` is.
pub const MAX_SEARCH_WINDOW: u64 = 1000;

/// Number of items the upstream will actually let a caller page through.
pub fn max_window(total_count: u64) -> u64 {
    total_count.min(MAX_SEARCH_WINDOW)
}

/// Whether requesting `page + 1` would return anything.
pub fn has_next(total_count: u64, page: PageNumber, per_page: PageSize) -> bool {
    let seen = i128::from(page.get()).saturating_mul(i128::from(per_page.get()));
    seen < i128::from(max_window(total_count))
}
