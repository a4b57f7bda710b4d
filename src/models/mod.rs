pub mod communities;
pub mod houses;
pub mod users;

use serde::Deserialize;

use crate::pagination::Pageable;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Paging query string for list endpoints: `?page=0&size=20`.
///
/// Pages are zero-based, matching `Paginator::fetch_page`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Row offset of the requested page, or `None` if it does not fit in a u64.
    pub fn offset(&self) -> Option<u64> {
        self.page_number().checked_mul(self.page_size())
    }
}

impl Pageable for PageRequest {
    fn page_number(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    fn page_size(&self) -> u64 {
        self.size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}
