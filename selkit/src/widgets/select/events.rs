//! Event handling for the Select widget.

use std::sync::atomic::Ordering;

use seldom::{Key, Modifiers, Rect, Region};

use crate::widgets::events::EventResult;
use crate::widgets::traits::Widget;
use crate::widgets::view::WidgetView;

use super::Select;
use super::nav::NavEvent;
use super::render;

impl Select {
    /// Handle a key while focused.
    pub fn on_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if modifiers.is_command() || self.is_disabled() {
            return EventResult::Ignored;
        }
        self.apply(NavEvent::Key(key))
    }

    /// Handle a press inside the widget's region.
    ///
    /// A press on an option row commits it; a press on the trigger toggles.
    pub fn on_press(&self, x: u16, y: u16) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        let row = self.inner.read().ok().and_then(|guard| {
            let list = guard.list_rect?;
            if !list.contains(x, y) {
                return None;
            }
            let offset = list.row_of(y)?;
            Some((guard.scroll.top() as usize + offset as usize, guard.options.len()))
        });

        match row {
            Some((index, len)) if index < len => self.apply(NavEvent::OptionClick(index)),
            // The "No options" row swallows the press.
            Some(_) => EventResult::Consumed,
            None if self.anchor_contains(x, y) => self.apply(NavEvent::Toggle),
            None => EventResult::Ignored,
        }
    }

    /// Scroll the open list. The highlight stays where it is.
    pub fn on_scroll(&self, delta: i16) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if !guard.nav.is_open() {
            return EventResult::Ignored;
        }
        if guard.scroll.scroll_by(delta) {
            self.dirty.store(true, Ordering::SeqCst);
        }
        EventResult::Consumed
    }

    fn anchor_contains(&self, x: u16, y: u16) -> bool {
        self.inner
            .read()
            .map(|guard| guard.anchor.contains(x, y))
            .unwrap_or(false)
    }
}

impl Widget for Select {
    fn id(&self) -> String {
        self.id_string()
    }

    fn is_focusable(&self) -> bool {
        !self.is_disabled()
    }

    fn is_open(&self) -> bool {
        Select::is_open(self)
    }

    fn dispatch_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        self.on_key(key, modifiers)
    }

    fn dispatch_press(&self, x: u16, y: u16) -> EventResult {
        self.on_press(x, y)
    }

    fn dispatch_scroll(&self, delta: i16) -> EventResult {
        self.on_scroll(delta)
    }

    fn dispatch_blur(&self) {
        // Close dropdown when focus leaves
        self.close();
    }

    fn render(&self, anchor: Rect, viewport_height: u16, focused: bool) -> WidgetView {
        self.set_geometry(anchor, viewport_height);
        render::view(self, focused)
    }

    fn region(&self) -> Region {
        self.inner
            .read()
            .map(|guard| guard.region())
            .unwrap_or_default()
    }

    fn is_dirty(&self) -> bool {
        Select::is_dirty(self)
    }

    fn clear_dirty(&self) {
        Select::clear_dirty(self)
    }
}
