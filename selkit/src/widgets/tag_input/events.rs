//! Event handling for the TagInput widget.

use std::sync::atomic::Ordering;

use seldom::{Key, Modifiers, Rect, Region};

use crate::widgets::events::EventResult;
use crate::widgets::traits::Widget;
use crate::widgets::view::WidgetView;

use super::TagInput;
use super::render;
use super::state::{Outcome, TagInputInner};

/// Push the edited buffer back into the controller.
fn query_edited(inner: &mut TagInputInner, edited: bool) -> Outcome {
    if edited {
        let text = inner.buffer.text().to_string();
        inner.controller.set_query(text);
        Outcome::consumed()
    } else {
        Outcome::ignored()
    }
}

impl TagInput {
    /// Handle a key while focused.
    pub fn on_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        // Ignore keys with ctrl/alt modifiers
        if modifiers.is_command() {
            return EventResult::Ignored;
        }

        self.update(|inner| match key {
            Key::Char(_) => match key.printable() {
                Some(c) => {
                    inner.buffer.insert_char(c);
                    query_edited(inner, true)
                }
                None => Outcome::ignored(),
            },
            Key::Backspace if inner.buffer.is_empty() => {
                // Delete the last tag
                if inner.controller.chosen().is_empty() {
                    Outcome::ignored()
                } else {
                    Outcome::changed(inner.controller.remove_last())
                }
            }
            Key::Backspace => {
                let edited = inner.buffer.delete_before();
                query_edited(inner, edited)
            }
            Key::Delete => {
                let edited = inner.buffer.delete_at();
                query_edited(inner, edited)
            }
            Key::Left => Outcome {
                consumed: inner.buffer.move_left(),
                tags_changed: false,
            },
            Key::Right => Outcome {
                consumed: inner.buffer.move_right(),
                tags_changed: false,
            },
            Key::Home => Outcome {
                consumed: inner.buffer.move_home(),
                tags_changed: false,
            },
            Key::End => Outcome {
                consumed: inner.buffer.move_end(),
                tags_changed: false,
            },
            Key::Enter if !inner.controller.query().trim().is_empty() => {
                Outcome::changed(inner.controller.commit_free_text())
            }
            Key::Escape if inner.controller.is_open() => {
                inner.controller.close();
                Outcome::consumed()
            }
            _ => Outcome::ignored(),
        })
    }

    /// Handle a press inside the widget's region.
    ///
    /// Candidate rows add their option, chips remove their tag, and a press
    /// elsewhere on the trigger reopens the panel for a pending query.
    pub fn on_press(&self, x: u16, y: u16) -> EventResult {
        self.update(|inner| {
            if let Some(list) = inner.list_rect
                && let Some(offset) = list.row_of(y)
                && list.contains(x, y)
            {
                let index = inner.scroll.top() as usize + offset as usize;
                return match inner.candidates.get(index).cloned() {
                    Some(option) => Outcome::changed(inner.controller.add(&option)),
                    None => Outcome::consumed(),
                };
            }

            if !inner.anchor.contains(x, y) {
                return Outcome::ignored();
            }

            let chips = render::layout_chips(inner.anchor, inner.controller.chosen());
            if let Some(chip) = chips.iter().find(|chip| chip.rect.contains(x, y)) {
                return Outcome::changed(inner.controller.remove(&chip.label));
            }

            if !inner.controller.is_open() && !inner.controller.query().is_empty() {
                let query = inner.controller.query().to_string();
                inner.controller.set_query(query);
            }
            Outcome::consumed()
        })
    }

    /// Scroll the candidate panel.
    pub fn on_scroll(&self, delta: i16) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.list_rect.is_none() {
            return EventResult::Ignored;
        }
        if guard.scroll.scroll_by(delta) {
            self.dirty.store(true, Ordering::SeqCst);
        }
        EventResult::Consumed
    }
}

impl Widget for TagInput {
    fn id(&self) -> String {
        self.id_string()
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn is_open(&self) -> bool {
        TagInput::is_open(self)
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
        TagInput::is_dirty(self)
    }

    fn clear_dirty(&self) {
        TagInput::clear_dirty(self)
    }
}
