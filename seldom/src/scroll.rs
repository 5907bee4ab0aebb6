use std::ops::Range;

/// Distance kept between a revealed item and the window edge.
pub const DEFAULT_REVEAL_MARGIN: u16 = 10;

/// Compute the scroll offset that brings an item into view.
///
/// - item top above the window: the item's top ends up `margin` below the
///   window's top edge
/// - item bottom below the window: the item's bottom ends up `margin` above
///   the window's bottom edge
/// - otherwise the offset is returned unchanged
///
/// The margin shrinks when the window is too short to hold it plus the item,
/// and a moved offset is clamped to `[0, content_height - client_height]`.
pub fn reveal_offset(
    item_top: u16,
    item_height: u16,
    scroll_top: u16,
    client_height: u16,
    content_height: u16,
    margin: u16,
) -> u16 {
    let item_bottom = item_top as u32 + item_height as u32;
    let window_bottom = scroll_top as u32 + client_height as u32;
    let margin = margin.min(client_height.saturating_sub(item_height)) as u32;

    let target = if item_top < scroll_top {
        (item_top as u32).saturating_sub(margin)
    } else if item_bottom > window_bottom {
        (item_bottom + margin).saturating_sub(client_height as u32)
    } else {
        return scroll_top;
    };

    let max_scroll = content_height.saturating_sub(client_height) as u32;
    target.min(max_scroll) as u16
}

/// Vertical scroll state for a list of one-cell rows.
///
/// Like `ScrollOffset` in a scroll container, but tracks the sizes it needs
/// to clamp itself so callers never hold an out-of-range offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListScroll {
    top: u16,
    client_height: u16,
    content_height: u16,
}

impl ListScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible row.
    pub fn top(&self) -> u16 {
        self.top
    }

    pub fn client_height(&self) -> u16 {
        self.client_height
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    /// Update the window and content sizes, clamping the offset.
    pub fn set_viewport(&mut self, client_height: u16, content_height: u16) {
        self.client_height = client_height;
        self.content_height = content_height;
        self.top = self.top.min(self.max_top());
    }

    /// Scroll by a delta. Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: i16) -> bool {
        let new_top = (self.top as i32 + delta as i32).clamp(0, self.max_top() as i32) as u16;
        if new_top != self.top {
            self.top = new_top;
            true
        } else {
            false
        }
    }

    /// Bring row `index` into view. Returns true if the offset changed.
    pub fn reveal(&mut self, index: usize, margin: u16) -> bool {
        let item_top = u16::try_from(index).unwrap_or(u16::MAX);
        let new_top = reveal_offset(
            item_top,
            1,
            self.top,
            self.client_height,
            self.content_height,
            margin,
        );
        if new_top != self.top {
            log::trace!("ListScroll reveal index={} top {} -> {}", index, self.top, new_top);
            self.top = new_top;
            true
        } else {
            false
        }
    }

    /// Rows currently inside the window.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.top as usize;
        let end = (start + self.client_height as usize).min(self.content_height as usize);
        start..end.max(start)
    }

    /// Reset to the top (used when the list is rebuilt).
    pub fn reset(&mut self) {
        self.top = 0;
    }

    fn max_top(&self) -> u16 {
        self.content_height.saturating_sub(self.client_height)
    }
}
