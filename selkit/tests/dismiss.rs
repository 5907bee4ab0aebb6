//! Outside-press dismissal through a shared PressHub.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use selkit::prelude::*;

const VIEWPORT: u16 = 30;

fn ratings() -> Vec<&'static str> {
    vec!["G", "PG", "PG-13", "R"]
}

fn select_at(hub: &PressHub, anchor: Rect) -> Select {
    let select = Select::new(ratings()).dismiss_with(hub);
    select.render(anchor, VIEWPORT, false);
    select
}

// ============================================================================
// PressHub
// ============================================================================

#[test]
fn test_hub_delivers_primary_presses() {
    let hub = PressHub::new();
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    let _subscription = hub.subscribe(move |_, _| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(hub.dispatch(1, 1, MouseButton::Left), 1);
    assert_eq!(hub.dispatch(1, 1, MouseButton::Right), 0);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_subscription_detaches_on_drop() {
    let hub = PressHub::new();
    let subscription = hub.subscribe(|_, _| {});
    assert_eq!(hub.listener_count(), 1);
    drop(subscription);
    assert_eq!(hub.listener_count(), 0);
    assert_eq!(hub.dispatch(0, 0, MouseButton::Left), 0);
}

#[test]
fn test_subscription_outliving_hub() {
    let hub = PressHub::new();
    let subscription = hub.subscribe(|_, _| {});
    drop(hub);
    // Nothing to detach from; must not panic
    drop(subscription);
}

// ============================================================================
// Select
// ============================================================================

#[test]
fn test_listener_only_while_open() {
    let hub = PressHub::new();
    let select = select_at(&hub, Rect::new(0, 2, 20, 1));
    assert_eq!(hub.listener_count(), 0);

    select.open();
    assert_eq!(hub.listener_count(), 1);

    select.close();
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_outside_press_closes() {
    let hub = PressHub::new();
    let select = select_at(&hub, Rect::new(0, 2, 20, 1));

    for (x, y) in [(25, 2), (0, 0), (10, 20), (29, 29)] {
        select.open();
        hub.dispatch(x, y, MouseButton::Left);
        assert!(!select.is_open(), "press at ({}, {}) should close", x, y);
        assert_eq!(hub.listener_count(), 0);
    }
}

#[test]
fn test_inside_press_keeps_open() {
    let hub = PressHub::new();
    let select = select_at(&hub, Rect::new(0, 2, 20, 1));
    select.open();

    // On the anchor and on a list row
    hub.dispatch(5, 2, MouseButton::Left);
    hub.dispatch(5, 4, MouseButton::Left);
    assert!(select.is_open());
}

#[test]
fn test_press_in_other_widgets_list_closes() {
    let hub = PressHub::new();
    let first = select_at(&hub, Rect::new(0, 2, 20, 1));
    let second = select_at(&hub, Rect::new(30, 2, 20, 1));
    first.open();
    second.open();
    assert_eq!(hub.listener_count(), 2);

    let list = second.list_rect().expect("second list open");
    hub.dispatch(list.x + 1, list.y + 1, MouseButton::Left);

    assert!(!first.is_open());
    assert!(second.is_open());
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn test_outside_press_is_idempotent() {
    let hub = PressHub::new();
    let select = select_at(&hub, Rect::new(0, 2, 20, 1));
    select.open();
    hub.dispatch(40, 20, MouseButton::Left);
    hub.dispatch(40, 20, MouseButton::Left);
    assert!(!select.is_open());
}

#[test]
fn test_drop_while_open_detaches() {
    let hub = PressHub::new();
    let select = select_at(&hub, Rect::new(0, 2, 20, 1));
    let handle = select.clone();
    select.open();
    assert_eq!(hub.listener_count(), 1);

    drop(select);
    // A clone still holds the widget
    assert_eq!(hub.listener_count(), 1);

    drop(handle);
    assert_eq!(hub.listener_count(), 0);
    assert_eq!(hub.dispatch(0, 0, MouseButton::Left), 0);
}

// ============================================================================
// TagInput
// ============================================================================

#[test]
fn test_tag_input_outside_press_closes_panel() {
    let hub = PressHub::new();
    let genres = TagInput::new(["Action", "Drama", "Thriller"]).dismiss_with(&hub);
    genres.render(Rect::new(0, 2, 30, 1), VIEWPORT, true);

    genres.set_query("dr");
    assert!(genres.is_open());
    assert_eq!(hub.listener_count(), 1);

    hub.dispatch(50, 20, MouseButton::Left);
    assert!(!genres.is_open());
    // The query survives dismissal
    assert_eq!(genres.query(), "dr");
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_tag_input_drop_while_open_detaches() {
    let hub = PressHub::new();
    let genres = TagInput::new(["Action", "Drama"]).dismiss_with(&hub);
    genres.render(Rect::new(0, 2, 30, 1), VIEWPORT, true);
    genres.set_query("a");
    assert_eq!(hub.listener_count(), 1);

    drop(genres);
    assert_eq!(hub.listener_count(), 0);
}
