//! PageInfo construction, value semantics and JSON shape.
//!
//! Run with: `cargo test --test pagination_test`
use std::collections::HashSet;

use myhome_backend::models::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
use myhome_backend::pagination::{PageInfo, Pageable, Paged, PagedResult};
use sea_orm::ItemsAndPagesNumber;
use serde_json::json;

/// Stand-in for an executed paged query.
struct Totals {
    pages: u64,
    elements: u64,
}

impl PagedResult for Totals {
    fn total_pages(&self) -> u64 {
        self.pages
    }

    fn total_elements(&self) -> u64 {
        self.elements
    }
}

fn info(page: u64, size: u64, pages: u64, elements: u64) -> PageInfo {
    PageInfo::of(
        &PageRequest::new(page, size),
        &Totals {
            pages,
            elements,
        },
    )
}

#[test]
fn test_fields_are_copied_from_request_and_result() {
    let request = PageRequest::new(2, 25);
    let totals = Totals {
        pages: 10,
        elements: 238,
    };

    let page_info = PageInfo::of(&request, &totals);

    assert_eq!(page_info.current_page(), request.page_number());
    assert_eq!(page_info.page_limit(), request.page_size());
    assert_eq!(page_info.total_pages(), totals.total_pages());
    assert_eq!(page_info.total_elements(), totals.total_elements());
    assert_eq!(page_info.current_page(), 2);
    assert_eq!(page_info.page_limit(), 25);
    assert_eq!(page_info.total_pages(), 10);
    assert_eq!(page_info.total_elements(), 238);
}

#[test]
fn test_empty_dataset() {
    let page_info = info(0, 50, 0, 0);

    assert_eq!(page_info.current_page(), 0);
    assert_eq!(page_info.page_limit(), 50);
    assert_eq!(page_info.total_pages(), 0);
    assert_eq!(page_info.total_elements(), 0);
}

#[test]
fn test_values_are_echoed_without_recomputation() {
    // Page past the end, and totals that don't agree with the page size:
    // nothing is corrected.
    let page_info = info(42, 10, 3, 7);

    assert_eq!(page_info.current_page(), 42);
    assert_eq!(page_info.total_pages(), 3);
    assert_eq!(page_info.total_elements(), 7);
}

#[test]
fn test_total_elements_beyond_32_bits() {
    let elements = u64::from(u32::MAX) + 17;
    let page_info = info(0, 100, elements / 100 + 1, elements);

    assert_eq!(page_info.total_elements(), elements);
}

#[test]
fn test_equal_inputs_give_equal_values() {
    assert_eq!(info(2, 25, 10, 238), info(2, 25, 10, 238));

    let set: HashSet<PageInfo> = [info(2, 25, 10, 238), info(2, 25, 10, 238)].into();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_any_differing_field_gives_unequal_values() {
    let base = info(2, 25, 10, 238);

    assert_ne!(base, info(3, 25, 10, 238));
    assert_ne!(base, info(2, 26, 10, 238));
    assert_ne!(base, info(2, 25, 11, 238));
    assert_ne!(base, info(2, 25, 10, 239));
}

#[test]
fn test_reads_are_stable_and_independent_of_inputs() {
    let mut request = PageRequest::new(1, 20);
    let page_info = PageInfo::of(
        &request,
        &Totals {
            pages: 5,
            elements: 90,
        },
    );

    request.page = Some(4);
    request.size = Some(40);
    assert_eq!(request.page_number(), 4);

    for _ in 0..3 {
        assert_eq!(page_info.current_page(), 1);
        assert_eq!(page_info.page_limit(), 20);
    }
}

#[test]
fn test_sea_orm_totals_act_as_paged_result() {
    let totals = ItemsAndPagesNumber {
        number_of_items: 238,
        number_of_pages: 10,
    };

    let page_info = PageInfo::of(&PageRequest::new(2, 25), &totals);
    assert_eq!(page_info, info(2, 25, 10, 238));
}

#[test]
fn test_page_request_defaults() {
    let request = PageRequest::default();

    assert_eq!(request.page_number(), 0);
    assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_request_size_is_clamped() {
    assert_eq!(PageRequest::new(0, 0).page_size(), 1);
    assert_eq!(PageRequest::new(0, 1_000).page_size(), MAX_PAGE_SIZE);
    assert_eq!(PageRequest::new(0, 35).page_size(), 35);
}

#[test]
fn test_page_request_offset() {
    assert_eq!(PageRequest::new(0, 20).offset(), Some(0));
    assert_eq!(PageRequest::new(3, 25).offset(), Some(75));
    assert_eq!(PageRequest::new(u64::MAX / 100, 100).offset(), Some(u64::MAX / 100 * 100));
}

#[test]
fn test_page_request_offset_overflow_is_none() {
    let request = PageRequest {
        page: Some(u64::MAX),
        size: None,
    };
    assert_eq!(request.offset(), None);
    assert_eq!(PageRequest::new(u64::MAX / 10, 11).offset(), None);
}

#[test]
fn test_page_request_from_query_string() {
    let request: PageRequest = serde_json::from_value(json!({ "page": 3 })).unwrap();

    assert_eq!(request.page_number(), 3);
    assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_page_info_json_shape() {
    let value = serde_json::to_value(info(2, 25, 10, 238)).unwrap();

    assert_eq!(
        value,
        json!({
            "current_page": 2,
            "page_limit": 25,
            "total_pages": 10,
            "total_elements": 238,
        })
    );
}

#[test]
fn test_paged_envelope_keeps_metadata_through_map() {
    let paged = Paged::new(vec![1, 2, 3], info(0, 3, 4, 11)).map(|n| n * 10);

    assert_eq!(paged.items, vec![10, 20, 30]);
    assert_eq!(paged.page_info, info(0, 3, 4, 11));

    let value = serde_json::to_value(&paged).unwrap();
    assert_eq!(value["items"], json!([10, 20, 30]));
    assert_eq!(value["page_info"]["total_elements"], json!(11));
}
