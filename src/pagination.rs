use sea_orm::ItemsAndPagesNumber;
use serde::Serialize;

/// Read side of a paging request: which page, and how many elements per page.
pub trait Pageable {
    fn page_number(&self) -> u64;
    fn page_size(&self) -> u64;
}

/// Read side of an executed paged query: aggregate counts over the whole dataset.
pub trait PagedResult {
    fn total_pages(&self) -> u64;
    fn total_elements(&self) -> u64;
}

impl PagedResult for ItemsAndPagesNumber {
    fn total_pages(&self) -> u64 {
        self.number_of_pages
    }

    fn total_elements(&self) -> u64 {
        self.number_of_items
    }
}

/// Pagination metadata for one page of a larger result set.
///
/// Only constructible through [`PageInfo::of`]; the values are copied out of
/// the paging request and the paged result as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageInfo {
    current_page: u64,
    page_limit: u64,
    total_pages: u64,
    total_elements: u64,
}

impl PageInfo {
    pub fn of<P, R>(pageable: &P, page: &R) -> Self
    where
        P: Pageable + ?Sized,
        R: PagedResult + ?Sized,
    {
        Self {
            current_page: pageable.page_number(),
            page_limit: pageable.page_size(),
            total_pages: page.total_pages(),
            total_elements: page.total_elements(),
        }
    }

    /// Page index, in whatever base the paging request uses.
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn page_limit(&self) -> u64 {
        self.page_limit
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }
}

/// Response envelope for list endpoints: one page of items plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, page_info: PageInfo) -> Self {
        Self { items, page_info }
    }

    /// Convert every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paged<U> {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
        }
    }
}
