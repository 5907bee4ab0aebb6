//! Tests for the Select widget shell.

use std::sync::{Arc, Mutex};

use selkit::prelude::*;
use selkit::widgets::select::EMPTY_LABEL;

const ANCHOR: Rect = Rect::new(0, 2, 20, 1);
const VIEWPORT: u16 = 30;

type Log = Arc<Mutex<Vec<String>>>;

fn recorder() -> (Log, impl Fn(&str) + Send + Sync + 'static) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |value: &str| {
        sink.lock().unwrap().push(value.to_string())
    })
}

fn ratings() -> Vec<&'static str> {
    vec!["G", "PG", "PG-13", "R", "NC-17"]
}

fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Option {}", i)).collect()
}

/// A select laid out at `ANCHOR`.
fn placed(select: Select) -> Select {
    select.render(ANCHOR, VIEWPORT, true);
    select
}

fn row_y(index: u16) -> u16 {
    ANCHOR.bottom() + index
}

// ============================================================================
// Open / close
// ============================================================================

#[test]
fn test_press_on_anchor_toggles() {
    let select = placed(Select::new(ratings()));
    assert!(!select.is_open());

    assert_eq!(select.dispatch_press(3, ANCHOR.y), EventResult::Consumed);
    assert!(select.is_open());
    assert_eq!(select.direction(), Some(Direction::Down));

    select.dispatch_press(3, ANCHOR.y);
    assert!(!select.is_open());
    assert_eq!(select.list_rect(), None);
}

#[test]
fn test_list_rect_follows_direction() {
    let select = placed(Select::new(ratings()));
    select.open();
    assert_eq!(select.list_rect(), Some(Rect::new(0, 3, 20, 5)));

    let select = placed(
        Select::new(ratings()).with_config(SelectConfig::new().force_direction(Direction::Up)),
    );
    select.open();
    assert_eq!(select.direction(), Some(Direction::Up));
    // Only two rows fit above the anchor
    assert_eq!(select.list_rect(), Some(Rect::new(0, 0, 20, 2)));
}

#[test]
fn test_direction_kept_while_open() {
    let select = placed(Select::new(ratings()));
    select.open();
    assert_eq!(select.direction(), Some(Direction::Down));

    // Move the anchor to the bottom edge; the open list does not flip
    select.render(Rect::new(0, 28, 20, 1), VIEWPORT, true);
    assert_eq!(select.direction(), Some(Direction::Down));

    select.close();
    select.open();
    assert_eq!(select.direction(), Some(Direction::Up));
}

#[test]
fn test_escape_closes_without_commit() {
    let (log, on_change) = recorder();
    let select = placed(Select::new(ratings()).on_change(on_change));
    select.open();
    select.dispatch_key(Key::Down, Modifiers::new());

    assert_eq!(select.dispatch_key(Key::Escape, Modifiers::new()), EventResult::Consumed);
    assert!(!select.is_open());
    assert!(log.lock().unwrap().is_empty());

    assert_eq!(select.dispatch_key(Key::Escape, Modifiers::new()), EventResult::Ignored);
    assert!(!select.is_open());
}

#[test]
fn test_blur_closes() {
    let select = placed(Select::new(ratings()));
    select.open();
    select.dispatch_blur();
    assert!(!select.is_open());
}

#[test]
fn test_command_keys_ignored() {
    let select = placed(Select::new(ratings()));
    assert_eq!(select.dispatch_key(Key::Enter, Modifiers::ctrl()), EventResult::Ignored);
    assert_eq!(select.dispatch_key(Key::Down, Modifiers::alt()), EventResult::Ignored);
    assert!(!select.is_open());
}

// ============================================================================
// Commit
// ============================================================================

#[test]
fn test_keyboard_commit() {
    let (log, on_change) = recorder();
    let select = placed(Select::new(ratings()).on_change(on_change));

    select.dispatch_key(Key::Enter, Modifiers::new());
    assert!(select.is_open());
    select.dispatch_key(Key::Down, Modifiers::new());
    select.dispatch_key(Key::Down, Modifiers::new());
    select.dispatch_key(Key::Enter, Modifiers::new());

    assert!(!select.is_open());
    assert_eq!(select.value().as_deref(), Some("PG"));
    assert_eq!(*log.lock().unwrap(), vec!["PG".to_string()]);
}

#[test]
fn test_typeahead_then_enter() {
    let (log, on_change) = recorder();
    let select = placed(Select::new(["Action", "Adventure", "Comedy"]).on_change(on_change));
    select.open();

    select.dispatch_key(Key::Char('c'), Modifiers::new());
    assert_eq!(select.highlight(), Some(2));
    select.dispatch_key(Key::Char('z'), Modifiers::new());
    assert_eq!(select.highlight(), Some(2));

    select.dispatch_key(Key::Enter, Modifiers::new());
    assert_eq!(*log.lock().unwrap(), vec!["Comedy".to_string()]);
}

#[test]
fn test_press_on_option_commits() {
    let (log, on_change) = recorder();
    let select = placed(Select::new(ratings()).on_change(on_change));
    select.open();

    assert_eq!(select.dispatch_press(4, row_y(3)), EventResult::Consumed);
    assert!(!select.is_open());
    assert_eq!(select.value().as_deref(), Some("R"));
    assert_eq!(*log.lock().unwrap(), vec!["R".to_string()]);
}

#[test]
fn test_commit_same_value_again() {
    let (log, on_change) = recorder();
    let select = placed(
        Select::new(ratings())
            .with_value("PG")
            .on_change(on_change),
    );

    select.open();
    select.dispatch_press(0, row_y(1));
    select.open();
    select.dispatch_press(0, row_y(1));

    assert!(!select.is_open());
    assert_eq!(select.value().as_deref(), Some("PG"));
    assert_eq!(*log.lock().unwrap(), vec!["PG".to_string(), "PG".to_string()]);
}

#[test]
fn test_commit_without_callback() {
    let select = placed(Select::new(ratings()));
    select.open();
    select.dispatch_press(0, row_y(0));
    assert_eq!(select.value().as_deref(), Some("G"));
}

#[test]
fn test_callback_may_read_select() {
    let select = placed(Select::new(ratings()));
    let seen = Arc::new(Mutex::new(None));

    let handle = select.clone();
    let sink = Arc::clone(&seen);
    let select = select.on_change(move |_| {
        *sink.lock().unwrap() = Some((handle.value(), handle.is_open()));
    });

    select.open();
    select.dispatch_press(0, row_y(2));
    assert_eq!(
        *seen.lock().unwrap(),
        Some((Some("PG-13".to_string()), false))
    );
}

#[test]
fn test_set_value_does_not_notify() {
    let (log, on_change) = recorder();
    let select = Select::new(ratings()).on_change(on_change);
    select.set_value(Some("R".into()));
    assert_eq!(select.value().as_deref(), Some("R"));
    assert!(log.lock().unwrap().is_empty());
}

// ============================================================================
// Disabled
// ============================================================================

#[test]
fn test_disabled_select() {
    let select = placed(Select::new(ratings()).with_config(SelectConfig::new().disabled(true)));

    assert!(!select.is_focusable());
    assert_eq!(select.dispatch_press(1, ANCHOR.y), EventResult::Ignored);
    assert_eq!(select.dispatch_key(Key::Enter, Modifiers::new()), EventResult::Ignored);
    select.open();
    assert!(!select.is_open());
}

#[test]
fn test_disabling_open_select_closes_it() {
    let select = placed(Select::new(ratings()));
    select.open();
    select.set_config(SelectConfig::new().disabled(true));
    assert!(!select.is_open());
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_end_and_home_scroll_highlight_into_view() {
    let select = placed(
        Select::new(numbered(20)).with_config(SelectConfig::new().max_height(5)),
    );
    select.open();
    assert_eq!(select.list_rect().map(|r| r.height), Some(5));

    select.dispatch_key(Key::End, Modifiers::new());
    assert_eq!(select.highlight(), Some(19));
    assert_eq!(select.scroll_top(), 15);

    select.dispatch_key(Key::Home, Modifiers::new());
    assert_eq!(select.highlight(), Some(0));
    assert_eq!(select.scroll_top(), 0);
}

#[test]
fn test_highlight_stays_visible_while_stepping() {
    let select = placed(
        Select::new(numbered(20)).with_config(SelectConfig::new().max_height(5)),
    );
    select.open();
    for _ in 0..20 {
        select.dispatch_key(Key::Down, Modifiers::new());
        let highlight = select.highlight().unwrap() as u16;
        let top = select.scroll_top();
        assert!(top <= highlight && highlight < top + 5);
    }
}

#[test]
fn test_wheel_scroll_keeps_highlight() {
    let select = placed(
        Select::new(numbered(20)).with_config(SelectConfig::new().max_height(5)),
    );
    assert_eq!(select.dispatch_scroll(1), EventResult::Ignored);

    select.open();
    select.dispatch_key(Key::Down, Modifiers::new());
    assert_eq!(select.dispatch_scroll(3), EventResult::Consumed);
    assert_eq!(select.scroll_top(), 3);
    assert_eq!(select.highlight(), Some(0));

    // Press maps through the scroll offset
    select.dispatch_press(0, row_y(0));
    assert_eq!(select.value().as_deref(), Some("Option 3"));
}

#[test]
fn test_wheel_scroll_clamped() {
    let select = placed(
        Select::new(numbered(20)).with_config(SelectConfig::new().max_height(5)),
    );
    select.open();
    select.dispatch_scroll(100);
    assert_eq!(select.scroll_top(), 15);
    select.dispatch_scroll(-100);
    assert_eq!(select.scroll_top(), 0);
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_set_options_clamps_highlight() {
    let select = placed(Select::new(ratings()));
    select.open();
    select.dispatch_key(Key::End, Modifiers::new());
    assert_eq!(select.highlight(), Some(4));

    select.set_options(["X", "Y"]);
    assert_eq!(select.highlight(), Some(1));

    select.set_options(Vec::<String>::new());
    assert_eq!(select.highlight(), None);
}

#[test]
fn test_empty_options_render_placeholder_row() {
    let select = placed(Select::new(Vec::<String>::new()));
    select.open();
    let view = select.render(ANCHOR, VIEWPORT, true);

    let list = view.list.expect("list should be open");
    assert_eq!(list.rows.len(), 1);
    assert_eq!(list.rows[0].index, None);
    assert_eq!(list.rows[0].label.trim_end(), EMPTY_LABEL);

    // Pressing the empty row does nothing
    assert_eq!(select.dispatch_press(0, row_y(0)), EventResult::Consumed);
    assert!(select.is_open());
    assert_eq!(select.value(), None);
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn test_render_trigger() {
    let select = Select::new(ratings())
        .with_config(SelectConfig::new().placeholder("Content rating"));
    let view = select.render(ANCHOR, VIEWPORT, false);
    assert_eq!(view.trigger.text, "Content rating");
    assert!(view.trigger.is_placeholder);
    assert_eq!(view.trigger.indicator, Some('▼'));
    assert!(view.list.is_none());

    select.set_value(Some("PG".into()));
    select.open();
    let view = select.render(ANCHOR, VIEWPORT, true);
    assert_eq!(view.trigger.text, "PG");
    assert!(!view.trigger.is_placeholder);
    assert_eq!(view.trigger.indicator, Some('▲'));
    assert!(view.trigger.focused);
}

#[test]
fn test_render_rows() {
    let select = placed(Select::new(ratings()).with_value("R"));
    select.open();
    select.dispatch_key(Key::Down, Modifiers::new());
    let view = select.render(ANCHOR, VIEWPORT, true);

    let list = view.list.expect("list should be open");
    assert_eq!(list.direction, Direction::Down);
    assert_eq!(list.total_rows, 5);
    assert_eq!(list.rows.len(), 5);
    assert!(list.rows.iter().all(|row| row.label.chars().count() == 20));
    assert!(list.rows[0].highlighted);
    assert!(list.rows[3].selected);
    assert_eq!(list.rows.iter().filter(|row| row.selected).count(), 1);
}

#[test]
fn test_region_includes_open_list() {
    let select = placed(Select::new(ratings()));
    assert_eq!(select.region().rects(), &[ANCHOR]);
    select.open();
    assert!(select.region().contains(5, row_y(4)));
    select.close();
    assert!(!select.region().contains(5, row_y(4)));
}

#[test]
fn test_dirty_tracking() {
    let select = placed(Select::new(ratings()));
    select.clear_dirty();
    assert!(!select.is_dirty());

    select.dispatch_key(Key::Tab, Modifiers::new());
    assert!(!select.is_dirty());

    select.open();
    assert!(select.is_dirty());
}
