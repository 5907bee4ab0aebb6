use seldom::{HitMap, Rect, Region};

// ============================================================================
// Region
// ============================================================================

#[test]
fn test_region_contains_any_rect() {
    let region = Region::from_rect(Rect::new(0, 0, 20, 1)).with(Rect::new(0, 1, 20, 5));

    assert!(region.contains(5, 0)); // anchor
    assert!(region.contains(5, 3)); // list
    assert!(!region.contains(25, 3));
    assert!(!region.contains(5, 6));
}

#[test]
fn test_region_skips_empty_rects() {
    let mut region = Region::new();
    region.push(Rect::new(4, 4, 0, 10));
    assert!(region.is_empty());
    assert!(!region.contains(4, 4));
}

#[test]
fn test_rect_edges_are_exclusive() {
    let rect = Rect::new(10, 10, 5, 2);
    assert!(rect.contains(10, 10));
    assert!(rect.contains(14, 11));
    assert!(!rect.contains(15, 10));
    assert!(!rect.contains(10, 12));
    assert_eq!(rect.row_of(11), Some(1));
    assert_eq!(rect.row_of(12), None);
}

// ============================================================================
// HitMap
// ============================================================================

#[test]
fn test_hit_test_topmost_wins() {
    let mut hits = HitMap::new();
    hits.register("rating", Rect::new(0, 0, 20, 1));
    hits.register("genres", Rect::new(0, 2, 20, 1));
    // Open list of "rating" floats over "genres"
    hits.register("rating", Rect::new(0, 1, 20, 4));

    assert_eq!(hits.hit_test(3, 2).map(|b| b.id.as_str()), Some("rating"));
    assert_eq!(hits.hit_test(3, 0).map(|b| b.id.as_str()), Some("rating"));
    assert!(hits.hit_test(30, 30).is_none());
}

#[test]
fn test_register_region_and_clear() {
    let mut hits = HitMap::new();
    let region = Region::from_rect(Rect::new(0, 0, 10, 1)).with(Rect::new(0, 1, 10, 3));
    hits.register_region("genres", &region);

    assert_eq!(hits.widget_ids().count(), 2);
    assert_eq!(hits.hit_test(2, 3).map(|b| b.id.as_str()), Some("genres"));

    hits.clear();
    assert!(hits.hit_test(2, 3).is_none());
}
