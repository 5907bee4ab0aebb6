use seldom::text::{char_width, display_width, fit_to_width, truncate_to_width};
use seldom::QueryBuffer;

// ============================================================================
// Width
// ============================================================================

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("Drama"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_cjk() {
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("Comedy", 10), "Comedy");
    assert_eq!(truncate_to_width("Comedy", 6), "Comedy");
}

#[test]
fn test_truncate_overflow() {
    assert_eq!(truncate_to_width("Science Fiction", 8), "Science…");
    assert_eq!(truncate_to_width("hello", 1), "…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_fit_to_width_pads() {
    assert_eq!(fit_to_width("War", 6), "War   ");
    assert_eq!(fit_to_width("Documentary", 6), "Docum…");
}

// ============================================================================
// QueryBuffer
// ============================================================================

#[test]
fn test_query_insert_and_backspace() {
    let mut query = QueryBuffer::default();
    for c in "dram".chars() {
        query.insert_char(c);
    }
    assert_eq!(query.text(), "dram");
    assert_eq!(query.cursor(), 4);

    assert!(query.delete_before());
    assert_eq!(query.text(), "dra");

    query.clear();
    assert!(!query.delete_before());
    assert!(query.is_empty());
}

#[test]
fn test_query_cursor_moves_on_char_boundaries() {
    let mut query = QueryBuffer::new("né");
    assert_eq!(query.cursor(), 3);
    assert!(query.move_left());
    assert_eq!(query.cursor(), 1);
    assert!(query.delete_at());
    assert_eq!(query.text(), "n");
    assert!(query.move_home());
    query.insert_char('a');
    assert_eq!(query.text(), "an");
    assert!(query.move_right());
    assert!(!query.move_right());
    assert!(!query.move_end());
}
