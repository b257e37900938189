//! Render model: page buttons, control enablement, JSON shape.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{row_id, table};
use xltable::{NavControls, PageButton, PageView, Viewport};

fn viewport() -> Viewport {
    Viewport::new(296.0, 40.0)
}

#[test]
fn test_page_buttons_for_current_group() {
    let mut table = table(130, 10, 5);
    table.go_to_page(11).unwrap();
    let view = PageView::build(&table, &viewport());

    let numbers: Vec<usize> = view.page_buttons.iter().map(|b| b.page_number).collect();
    assert_eq!(numbers, vec![11, 12, 13]);
    assert_eq!(
        view.current_button(),
        Some(&PageButton {
            page_number: 12,
            page_index: 11,
            is_current: true
        })
    );
    assert_eq!(view.page_buttons.iter().filter(|b| b.is_current).count(), 1);
}

#[test]
fn test_controls_disabled_at_first_page() {
    let table = table(130, 10, 5);
    let view = PageView::build(&table, &viewport());
    assert_eq!(
        view.controls,
        NavControls {
            previous_page: false,
            next_page: true,
            previous_group: false,
            next_group: true,
        }
    );
}

#[test]
fn test_controls_disabled_at_last_page() {
    let mut table = table(130, 10, 5);
    table.go_to_page(12).unwrap();
    let view = PageView::build(&table, &viewport());
    assert_eq!(
        view.controls,
        NavControls {
            previous_page: true,
            next_page: false,
            previous_group: true,
            next_group: false,
        }
    );
}

#[test]
fn test_single_page_disables_everything() {
    let table = table(4, 10, 5);
    let view = PageView::build(&table, &viewport());
    assert!(!view.controls.previous_page);
    assert!(!view.controls.next_page);
    assert!(!view.controls.previous_group);
    assert!(!view.controls.next_group);
    assert_eq!(view.page_buttons.len(), 1);
}

#[test]
fn test_empty_table_view() {
    let table = table(0, 10, 5);
    let view = PageView::build(&table, &viewport());
    assert!(view.is_empty());
    assert!(view.page_buttons.is_empty());
    assert!(view.current_button().is_none());
    assert_eq!(view.total_pages, 0);
    assert!(!view.controls.next_page);
    assert!(!view.controls.next_group);
}

#[test]
fn test_view_geometry() {
    let mut table = table(47, 10, 5);
    table.go_to_page(4).unwrap();
    let view = PageView::build(&table, &viewport());
    assert_eq!(view.first_row_index, 40);
    assert_eq!(row_id(&view.rows[0]), 41);
    assert_eq!(view.container_height, 296.0);
    assert_eq!(view.content_height, 7.0 * 40.0);
    assert_eq!(view.row_height, 40.0);
}

#[test]
fn test_view_carries_goto_buffer() {
    let mut table = table(47, 10, 5);
    table.set_goto_input("12");
    let view = PageView::build(&table, &viewport());
    assert_eq!(view.go_to_input, "12");
}

#[test]
fn test_view_json_shape() {
    let table = table(12, 10, 5);
    let view = PageView::build(&table, &viewport());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["rows"].as_array().unwrap().len(), 10);
    assert_eq!(json["rows"][0][0], 1.0);
    assert_eq!(json["rows"][0][4], "Row 1 Extra Data");
    assert_eq!(json["pageButtons"][1]["pageNumber"], 2);
    assert_eq!(json["pageButtons"][0]["isCurrent"], true);
    assert_eq!(json["controls"]["nextPage"], true);
    assert_eq!(json["goToInput"], "");
    assert_eq!(json["totalPages"], 2);
}
