//! End-to-end envelope construction through the public API, asserting on the
//! serialized wire shape a client would see.

use paged_rs::prelude::*;
use rstest::rstest;
use serde_json::{json, Value};

fn wire<T: serde::Serialize>(envelope: &PagedResponse<T>) -> Value {
    serde_json::to_value(envelope).unwrap()
}

#[test]
fn single_page_result() {
    let envelope =
        PagedResponse::new(vec!["a", "b", "c"], PageRequest::new(10, 0), 3).unwrap();

    assert_eq!(
        wire(&envelope),
        json!({
            "list": ["a", "b", "c"],
            "pageInfo": {
                "totalRows": 3,
                "page": 1,
                "pageSize": 10,
                "isFirstPage": true,
                "isLastPage": true,
            },
        })
    );
}

#[test]
fn middle_page_of_three() {
    let rows = (10..20).collect::<Vec<u64>>();
    let envelope = PagedResponse::new(rows, PageRequest::new(10, 10), 25).unwrap();

    let info = envelope.page_info.unwrap();
    assert_eq!(info.page(), Some(2));
    assert!(!info.is_first_page);
    assert!(!info.is_last_page);
}

#[test]
fn short_final_page() {
    let rows = (20..25).collect::<Vec<u64>>();
    let envelope = PagedResponse::new(rows, PageRequest::new(10, 20), 25).unwrap();

    let info = envelope.page_info.unwrap();
    assert_eq!(info.page(), Some(3));
    assert!(info.is_last_page);
}

#[test]
fn mid_page_slice_reports_offset_not_page() {
    let envelope =
        PagedResponse::new(vec![0_u64; 10], PageRequest::new(10, 15), 25).unwrap();

    let info = wire(&envelope)["pageInfo"].as_object().unwrap().clone();
    assert_eq!(info["offset"], json!(15));
    assert!(!info.contains_key("page"));
}

#[test]
fn offset_past_the_total_is_a_bad_request() {
    let err = PagedResponse::<u64>::new(vec![], PageRequest::new(10, 30), 25).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Offset is beyond the total number of records"
    );
}

#[test]
fn unknown_total_passes_rows_through_untouched() {
    let envelope =
        PagedResponse::new(vec![1, 2, 3], PageRequest::new(10, 30), TotalCount::Unknown)
            .unwrap();

    assert_eq!(wire(&envelope), json!({ "list": [1, 2, 3] }));
}

// Exactly one of `page`/`offset` is on the wire for every valid input.
#[rstest]
#[case(0, "page")]
#[case(10, "page")]
#[case(15, "offset")]
#[case(24, "offset")]
fn page_and_offset_are_mutually_exclusive(#[case] offset: u64, #[case] expected: &str) {
    let envelope =
        PagedResponse::new(vec![0_u64; 5], PageRequest::new(10, offset), 25).unwrap();

    let info = wire(&envelope)["pageInfo"].as_object().unwrap().clone();
    let absent = if expected == "page" { "offset" } else { "page" };
    assert!(info.contains_key(expected), "offset {offset}");
    assert!(!info.contains_key(absent), "offset {offset}");
}

#[test]
fn builder_overrides_reach_the_wire() {
    let envelope = PagedResponse::builder(vec!["x"], PageRequest::new(10, 0))
        .total(30)
        .is_first_page(false)
        .errors(vec![json!({ "row": 0, "message": "skipped" })])
        .build()
        .unwrap();

    assert_eq!(
        wire(&envelope),
        json!({
            "list": ["x"],
            "pageInfo": {
                "totalRows": 30,
                "page": 1,
                "pageSize": 10,
                "isFirstPage": false,
                "isLastPage": false,
            },
            "errors": [{ "row": 0, "message": "skipped" }],
        })
    );
}

#[test]
fn errors_attach_even_without_a_known_total() {
    let envelope = PagedResponse::builder(vec![1], PageRequest::default())
        .errors(vec![json!("boom")])
        .build()
        .unwrap();

    assert_eq!(
        wire(&envelope),
        json!({ "list": [1], "errors": ["boom"] })
    );
}

#[test]
fn query_string_shapes_normalize_into_the_same_envelope() {
    let by_offset: PaginationQuery =
        serde_json::from_value(json!({ "l": "10", "o": "10" })).unwrap();
    let by_page: PaginationQuery =
        serde_json::from_value(json!({ "page": "2", "pageSize": "10" })).unwrap();

    assert_eq!(by_offset.normalize(), by_page.normalize());

    let envelope =
        PagedResponse::new(vec![0_u64; 10], by_page.normalize(), 25).unwrap();
    assert_eq!(envelope.page_info.unwrap().page(), Some(2));
}

#[test]
fn envelopes_round_trip_through_deserialize() {
    let envelope =
        PagedResponse::new(vec![1_u64, 2, 3], PageRequest::new(10, 0), 3).unwrap();

    let parsed: PagedResponse<u64> =
        serde_json::from_value(wire(&envelope)).unwrap();
    assert_eq!(parsed, envelope);

    let bare: PagedResponse<u64> = serde_json::from_value(json!({ "list": [] })).unwrap();
    assert!(bare.page_info.is_none());
    assert!(bare.errors.is_none());
}
