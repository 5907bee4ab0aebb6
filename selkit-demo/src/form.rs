//! A small movie form: one content-rating select and one genre tag input.

use std::sync::{Arc, Mutex};

use seldom::HitMap;
use selkit::prelude::*;

use crate::settings::Settings;

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A text label drawn at a fixed cell.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub dim: bool,
}

/// Everything the terminal draws for one frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub labels: Vec<Label>,
    /// Widget views in focus order
    pub views: Vec<WidgetView>,
}

pub struct MovieForm {
    rating: Select,
    genres: TagInput,
    /// Focus order; clones of the typed handles above
    widgets: Vec<Box<dyn Widget>>,
    focus: usize,
    hub: PressHub,
    hit_map: HitMap,
    /// Last change reported by a widget callback
    last_change: Arc<Mutex<Option<String>>>,
    dirty: bool,
}

impl MovieForm {
    pub fn new(settings: Settings) -> Self {
        let hub = PressHub::new();
        let last_change = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&last_change);
        let rating = Select::new(settings.allowed_content_ratings)
            .with_config(settings.rating)
            .on_change(move |value| {
                log::info!("Content rating changed to {:?}", value);
                if let Ok(mut guard) = sink.lock() {
                    *guard = Some(format!("rating = {}", value));
                }
            })
            .dismiss_with(&hub);

        let sink = Arc::clone(&last_change);
        let genres = TagInput::new(settings.genres_vocab)
            .with_config(settings.genres)
            .on_change(move |tags| {
                log::info!("Genres changed to {:?}", tags);
                if let Ok(mut guard) = sink.lock() {
                    *guard = Some(format!("genres = [{}]", tags.join(", ")));
                }
            })
            .dismiss_with(&hub);

        let widgets: Vec<Box<dyn Widget>> = vec![Box::new(rating.clone()), Box::new(genres.clone())];

        Self {
            rating,
            genres,
            widgets,
            focus: 0,
            hub,
            hit_map: HitMap::new(),
            last_change,
            dirty: true,
        }
    }

    /// The committed content rating.
    pub fn rating(&self) -> Option<String> {
        self.rating.value()
    }

    /// The committed genres.
    pub fn genres(&self) -> Vec<String> {
        self.genres.selected()
    }

    /// A prediction request needs a rating and at least one genre.
    pub fn is_ready(&self) -> bool {
        self.rating().is_some() && !self.genres().is_empty()
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.widgets.iter().any(|widget| widget.is_dirty())
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
        for widget in &self.widgets {
            widget.clear_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Anchors for the widgets, in focus order.
    ///
    /// The genre input sits near the bottom so its panel has to open upward.
    fn anchors(width: u16, height: u16) -> [Rect; 2] {
        let field_width = width.saturating_sub(4).min(48);
        [
            Rect::new(2, 3, field_width.min(30), 1),
            Rect::new(2, height.saturating_sub(5), field_width, 1),
        ]
    }

    /// Lay out the widgets and collect what to draw.
    pub fn render(&mut self, width: u16, height: u16) -> Frame {
        let anchors = Self::anchors(width, height);
        let mut frame = Frame::default();

        frame.labels.push(Label {
            x: 2,
            y: 0,
            text: "Movie details".into(),
            dim: false,
        });
        frame.labels.push(Label {
            x: 2,
            y: anchors[0].y.saturating_sub(1),
            text: "Content rating".into(),
            dim: false,
        });
        frame.labels.push(Label {
            x: 2,
            y: anchors[1].y.saturating_sub(1),
            text: "Genres (Enter adds typed text, Backspace removes last)".into(),
            dim: false,
        });

        self.hit_map.clear();
        for (index, (widget, anchor)) in self.widgets.iter().zip(anchors).enumerate() {
            frame
                .views
                .push(widget.render(anchor, height, index == self.focus));
        }
        // Open lists register last so they sit on top for hit testing
        let mut order: Vec<usize> = (0..self.widgets.len()).collect();
        order.sort_by_key(|&index| self.widgets[index].is_open());
        for index in order {
            let widget = &self.widgets[index];
            self.hit_map.register_region(&widget.id(), &widget.region());
        }

        let status = match (self.rating(), self.genres()) {
            (Some(rating), genres) if !genres.is_empty() => {
                format!("Ready: {} / {}", rating, genres.join(", "))
            }
            _ => "Pick a rating and at least one genre".to_string(),
        };
        frame.labels.push(Label {
            x: 2,
            y: height.saturating_sub(2),
            text: status,
            dim: !self.is_ready(),
        });

        let last = self
            .last_change
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
            .unwrap_or_default();
        frame.labels.push(Label {
            x: 2,
            y: height.saturating_sub(1),
            text: format!("Tab: next field  Ctrl+C: quit  {}", last),
            dim: true,
        });

        frame
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn handle(&mut self, event: Event) -> Flow {
        match event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Press { x, y, button } => {
                // Outside-press listeners first, so a press on another field
                // closes the open list before that field reacts.
                self.hub.dispatch(x, y, button);
                if button.is_primary() {
                    self.handle_press(x, y);
                }
                Flow::Continue
            }
            Event::Scroll { x, y, delta_y } => {
                if let Some(index) = self.widget_at(x, y) {
                    self.widgets[index].dispatch_scroll(delta_y);
                }
                Flow::Continue
            }
            Event::Resize { width, height } => {
                log::debug!("Resize to {}x{}", width, height);
                self.dirty = true;
                Flow::Continue
            }
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Flow {
        if modifiers.ctrl && matches!(key, Key::Char('c') | Key::Char('q')) {
            return Flow::Quit;
        }

        let result = self.widgets[self.focus].dispatch_key(key, modifiers);
        if result.is_handled() {
            return Flow::Continue;
        }

        match key {
            Key::Tab => self.move_focus(1),
            Key::BackTab => self.move_focus(-1),
            Key::Escape if !self.widgets.iter().any(|widget| widget.is_open()) => {
                return Flow::Quit;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_press(&mut self, x: u16, y: u16) {
        let Some(index) = self.widget_at(x, y) else {
            return;
        };
        if self.widgets[index].is_focusable() {
            self.set_focus(index);
        }
        self.widgets[index].dispatch_press(x, y);
    }

    fn widget_at(&self, x: u16, y: u16) -> Option<usize> {
        let hit = self.hit_map.hit_test(x, y)?;
        self.widgets
            .iter()
            .position(|widget| widget.id() == hit.id)
    }

    /// Step focus forward or backward, skipping disabled widgets.
    fn move_focus(&mut self, step: isize) {
        let len = self.widgets.len() as isize;
        let mut next = self.focus as isize;
        for _ in 0..len {
            next = (next + step).rem_euclid(len);
            if self.widgets[next as usize].is_focusable() {
                self.set_focus(next as usize);
                return;
            }
        }
    }

    fn set_focus(&mut self, index: usize) {
        if index == self.focus {
            return;
        }
        log::debug!("Focus {} -> {}", self.widgets[self.focus].id(), self.widgets[index].id());
        self.widgets[self.focus].dispatch_blur();
        self.focus = index;
        self.dirty = true;
    }
}
