//! Full-screen rendering tests

use std::time::{Duration, Instant};

use super::*;
use crate::test_utils::{create_test_state, TestTerminal};
use cardgrid_app::handler::update;
use cardgrid_app::message::Message;
use cardgrid_core::CardId;

fn later() -> Instant {
    Instant::now() + Duration::from_secs(5)
}

#[test]
fn test_view_renders_all_sections() {
    let mut term = TestTerminal::with_size(120, 40);
    let mut state = create_test_state();

    term.draw_with(|frame| view_at(frame, &mut state, Instant::now()));

    assert!(term.buffer_contains("Card Grid"));
    assert!(term.buffer_contains("Card 1"));
    assert!(term.buffer_contains("○ Closed"));
    assert_eq!(state.grid_view_state.viewport_width, 120);
    assert_eq!(state.grid_view_state.hit_regions.len(), 12);
}

#[test]
fn test_header_reports_measured_cards_per_row() {
    let mut term = TestTerminal::with_size(100, 40);
    let mut state = create_test_state();

    term.draw_with(|frame| view_at(frame, &mut state, Instant::now()));

    assert!(term.buffer_contains("12 cards · 3 per row"));
}

#[test]
fn test_click_at_rendered_card_opens_panel() {
    let mut term = TestTerminal::with_size(74, 40);
    let mut state = create_test_state();
    term.draw_with(|frame| view_at(frame, &mut state, Instant::now()));

    // Header is 3 rows, padding 1: the first card starts at (2, 4)
    let result = update(&mut state, Message::Click { column: 3, row: 5 });
    assert_eq!(result.message, Some(Message::CardClicked(CardId(0))));
    update(&mut state, Message::CardClicked(CardId(0)));

    term.draw_with(|frame| view_at(frame, &mut state, later()));

    assert!(term.buffer_contains("Details · Card 1"));
    assert!(term.buffer_contains("◐ Opening (card 0)"));
    assert!(term.buffer_contains("order 0 · first · +3"));
}

#[test]
fn test_click_between_cards_is_outside() {
    let mut term = TestTerminal::with_size(74, 40);
    let mut state = create_test_state();
    term.draw_with(|frame| view_at(frame, &mut state, Instant::now()));

    let result = update(&mut state, Message::Click { column: 0, row: 5 });
    assert_eq!(result.message, Some(Message::OutsideClick));
}

#[test]
fn test_closing_panel_collapses_visually() {
    let mut term = TestTerminal::with_size(74, 40);
    let mut state = create_test_state();
    update(&mut state, Message::CardClicked(CardId(0)));
    update(&mut state, Message::OutsideClick);

    // Long after the close animation the row has zero height
    term.draw_with(|frame| view_at(frame, &mut state, later()));

    assert!(state.grid.has_panel());
    assert!(!term.buffer_contains("Details"));
    assert!(term.buffer_contains("◑ Closing"));
}

#[test]
fn test_compact_terminal_uses_one_card_per_row() {
    let mut term = TestTerminal::compact();
    let mut state = create_test_state();

    term.draw_with(|frame| view_at(frame, &mut state, Instant::now()));

    assert_eq!(state.cards_per_row().unwrap().count(), 1);
    let cards_in_first_row = state
        .grid_view_state
        .hit_regions
        .iter()
        .filter(|r| r.y == 4)
        .count();
    assert_eq!(cards_in_first_row, 1);
}
