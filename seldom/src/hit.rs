use crate::layout::Rect;

/// The screen area a widget occupies: its anchor plus any floating parts
/// (an open option list). A point is inside when any rect contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self { rects: vec![rect] }
    }

    /// Add a rect. Empty rects never contain a point and are skipped.
    pub fn push(&mut self, rect: Rect) {
        if !rect.is_empty() {
            self.rects.push(rect);
        }
    }

    pub fn with(mut self, rect: Rect) -> Self {
        self.push(rect);
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// A clickable area registered for the current frame.
#[derive(Debug, Clone)]
pub struct HitBox {
    /// Owning widget ID
    pub id: String,
    /// Bounding rectangle
    pub rect: Rect,
}

/// Collection of hit boxes for the current frame.
///
/// Boxes are kept in registration order; later boxes are on top, so floating
/// lists registered after their triggers win over whatever lies beneath.
#[derive(Debug, Default)]
pub struct HitMap {
    boxes: Vec<HitBox>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all hit boxes (call at start of each frame)
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn register(&mut self, id: impl Into<String>, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let id = id.into();
        log::trace!(
            "HitMap register: id={}, rect=({}, {}, {}x{})",
            id,
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
        self.boxes.push(HitBox { id, rect });
    }

    /// Register every rect of a widget's region under the same ID.
    pub fn register_region(&mut self, id: &str, region: &Region) {
        for rect in region.rects() {
            self.register(id, *rect);
        }
    }

    /// Find the topmost box at a position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitBox> {
        self.boxes.iter().rev().find(|hit_box| hit_box.rect.contains(x, y))
    }

    /// Iterate registered widget IDs in registration order.
    pub fn widget_ids(&self) -> impl Iterator<Item = &str> {
        self.boxes.iter().map(|b| b.id.as_str())
    }
}
