//! Property-based tests for the keypad grid and hit-testing

#![allow(clippy::unwrap_used)]

use desk_calculator::core::accumulator::Command;
use desk_calculator::tui::{CalculatorApp, Keypad};
use proptest::prelude::*;
use ratatui::layout::Rect;

// ===== Strategy definitions =====

/// Keypad areas at arbitrary offsets, large enough to hold the grid
fn area_strategy() -> impl Strategy<Value = Rect> {
    (0u16..50, 0u16..30, 6u16..80, 7u16..40).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Valid grid positions
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

proptest! {
    /// Any hit lands on an existing button
    #[test]
    fn prop_hit_test_within_bounds(area in area_strategy(), dx in 0u16..100, dy in 0u16..100) {
        let keypad = Keypad::new();
        if let Some(idx) = keypad.hit_test(area, area.x + dx, area.y + dy) {
            prop_assert!(idx < keypad.button_count());
        }
    }

    /// Border cells never hit
    #[test]
    fn prop_border_never_hits(area in area_strategy(), offset in 0u16..100) {
        let keypad = Keypad::new();
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;
        let along_x = area.x + offset % area.width;
        let along_y = area.y + offset % area.height;

        prop_assert!(keypad.hit_test(area, along_x, area.y).is_none());
        prop_assert!(keypad.hit_test(area, along_x, bottom).is_none());
        prop_assert!(keypad.hit_test(area, area.x, along_y).is_none());
        prop_assert!(keypad.hit_test(area, right, along_y).is_none());
    }

    /// Clicking the top-left cell of a button's slot selects that button
    #[test]
    fn prop_cell_origin_hits_its_button((row, col) in grid_position_strategy(), area in area_strategy()) {
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        let btn_width = (area.width - 2) / cols as u16;
        let btn_height = (area.height - 2) / rows as u16;
        prop_assume!(btn_width > 0 && btn_height > 0);

        let x = area.x + 1 + col as u16 * btn_width;
        let y = area.y + 1 + row as u16 * btn_height;
        prop_assert_eq!(keypad.hit_test(area, x, y), Some(row * cols + col));
    }

    /// Grid lookup agrees with linear indexing
    #[test]
    fn prop_get_button_at_matches_index((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        prop_assert_eq!(keypad.get_button_at(row, col), keypad.get_button(row * 4 + col));
    }

    /// Highlighting leaves exactly one button pressed
    #[test]
    fn prop_highlight_single_button(idx in 0usize..20) {
        let mut keypad = Keypad::new();
        let command = keypad.get_button(idx).unwrap().action;
        keypad.highlight(command);
        prop_assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
        prop_assert!(keypad.get_button(idx).unwrap().pressed);
    }

    /// A click changes state exactly like applying the button's command
    #[test]
    fn prop_click_matches_apply(area in area_strategy(), dx in 0u16..100, dy in 0u16..100) {
        let (x, y) = (area.x + dx, area.y + dy);
        let mut clicked = CalculatorApp::new();
        let mut applied = CalculatorApp::new();

        match clicked.click(area, x, y) {
            Some(command) => applied.apply(command),
            None => prop_assert!(clicked.accumulator().is_empty()),
        }
        prop_assert_eq!(clicked.expression_line(), applied.expression_line());
        prop_assert_eq!(clicked.operand_line(), applied.operand_line());
    }
}

#[test]
fn test_every_label_is_distinct() {
    let keypad = Keypad::new();
    let mut labels: Vec<_> = keypad.buttons().map(|b| b.label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), keypad.button_count());
}

#[test]
fn test_equals_is_bottom_right() {
    let keypad = Keypad::new();
    assert_eq!(
        keypad.get_button_at(4, 3).map(|b| b.action),
        Some(Command::Evaluate)
    );
}
