// src/pagination.rs

use serde::Deserialize;

/// Questions served per page when the deployment does not override it.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters accepted by the paginated listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

impl PageParams {
    /// Requested page number, defaulting to the first page.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1) as usize
    }
}

/// Returns the 1-indexed `page` slice of `items`.
///
/// Half-open slicing: `[(page-1)*page_size, page*page_size)`. A page past
/// the end of `items` (or page 0) comes back empty rather than failing;
/// callers decide whether an empty page is an error.
pub fn paginate<T>(page: usize, items: Vec<T>, page_size: usize) -> Vec<T> {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) else {
        return Vec::new();
    };

    items.into_iter().skip(start).take(page_size).collect()
}
