use super::*;

#[test]
fn starts_at_first_page_without_offset() {
    let state = ScrollState::default();
    assert_eq!(state.position(), 0);
    assert_eq!(state.offset_pixels(), 0);
}

#[test]
fn offset_is_relative_to_settled_position() {
    let mut state = ScrollState::new(1);

    state.on_scrolled(1, 40, 300);
    assert_eq!(state.offset_pixels(), 40);

    // viewport left edge now shows page 2, still relative to page 1
    state.on_scrolled(2, 15, 300);
    assert_eq!(state.offset_pixels(), 315);

    // dragging backwards past the settled page is negative
    state.on_scrolled(0, 250, 300);
    assert_eq!(state.offset_pixels(), -50);
}

#[test]
fn offset_is_recomputed_not_accumulated() {
    let mut state = ScrollState::new(0);

    for _ in 0..10 {
        state.on_scrolled(0, 120, 300);
    }

    assert_eq!(state.offset_pixels(), 120);
}

#[test]
fn settling_updates_position_only() {
    let mut state = ScrollState::new(0);
    state.on_scrolled(0, 200, 300);
    state.on_page_settled(1);

    assert_eq!(state.position(), 1);
    assert_eq!(state.offset_pixels(), 200);

    state.on_scrolled(0, 200, 300);
    assert_eq!(state.offset_pixels(), -100);
}

#[test]
fn out_of_range_positions_are_accepted() {
    let mut state = ScrollState::new(0);
    state.on_page_settled(42);
    state.on_scrolled(-3, 0, 10);
    assert_eq!(state.position(), 42);
    assert_eq!(state.offset_pixels(), -450);
}

#[test]
fn bar_state_uses_last_rendered_width() {
    let mut state = PageBarState::new(2);
    state.set_width(80);

    state.on_page_scrolled(2, 0.25, 20);
    assert_eq!(state.scroll().offset_pixels(), 20);

    state.on_page_scrolled(1, 0.5, 40);
    assert_eq!(state.scroll().offset_pixels(), -40);

    state.on_page_selected(1);
    assert_eq!(state.scroll().position(), 1);
}

#[test]
fn bar_state_tracks_scroll_phase() {
    let mut state = PageBarState::default();
    assert_eq!(state.phase(), ScrollPhase::Idle);

    state.on_page_scroll_state_changed(ScrollPhase::Dragging);
    assert_eq!(state.phase(), ScrollPhase::Dragging);
}

#[test]
fn far_out_of_range_position_wraps_instead_of_panicking() {
    let mut state = ScrollState::new(0);

    state.on_scrolled(i32::MAX / 2, 0, 300);

    assert_eq!(state.offset_pixels(), (i32::MAX / 2).wrapping_mul(300));
}
