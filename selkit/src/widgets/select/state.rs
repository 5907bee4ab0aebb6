//! Select widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use seldom::{ListScroll, Rect, Region};

use crate::config::SelectConfig;
use crate::dismiss::{PressHub, Subscription};
use crate::placement::{self, Direction};
use crate::widgets::events::{ChangeHandler, EventResult};

use super::nav::{self, Effect, NavContext, NavEvent, NavState, Transition};

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Internal state for a Select widget.
#[derive(Debug, Default)]
pub(super) struct SelectInner {
    /// Open phase and highlighted option
    pub(super) nav: NavState,
    /// Committed selection
    pub(super) value: Option<String>,
    /// Available options, in display order
    pub(super) options: Vec<String>,
    pub(super) config: SelectConfig,
    /// Scroll window over the option rows
    pub(super) scroll: ListScroll,
    /// Anchor rect from the last render
    pub(super) anchor: Rect,
    /// Viewport height from the last render
    pub(super) viewport_height: u16,
    /// Where the open list sits (None while closed)
    pub(super) list_rect: Option<Rect>,
    /// Outside-press listener, held only while open
    pub(super) subscription: Option<Subscription>,
}

impl SelectInner {
    /// Rows the list shows: the options, or the single empty-state row.
    pub(super) fn row_count(&self) -> usize {
        self.options.len().max(1)
    }

    /// Recompute the list rect and scroll window for the current phase.
    pub(super) fn layout_list(&mut self) {
        let Some(direction) = self.nav.direction() else {
            self.list_rect = None;
            return;
        };
        let rows = u16::try_from(self.row_count())
            .unwrap_or(u16::MAX)
            .min(self.config.max_height);
        let rect = placement::place_list(self.anchor, direction, rows, self.viewport_height);
        self.scroll.set_viewport(
            rect.height,
            u16::try_from(self.options.len()).unwrap_or(u16::MAX),
        );
        self.list_rect = Some(rect);
    }

    pub(super) fn region(&self) -> Region {
        let mut region = Region::from_rect(self.anchor);
        if let Some(rect) = self.list_rect {
            region.push(rect);
        }
        region
    }
}

/// A dropdown single-select.
///
/// `Select` owns its interaction state behind a shared handle: clones refer to
/// the same widget, so the host can keep one in its focus list and one in its
/// form model. The committed value is reported through [`Select::on_change`].
///
/// # Example
///
/// ```ignore
/// let hub = PressHub::new();
/// let rating = Select::new(["G", "PG", "PG-13", "R"])
///     .with_config(SelectConfig::new().placeholder("Content rating"))
///     .on_change(|value| log::info!("rating = {}", value))
///     .dismiss_with(&hub);
/// ```
pub struct Select {
    /// Unique identifier for this select instance
    id: SelectId,
    /// Internal state
    pub(super) inner: Arc<RwLock<SelectInner>>,
    /// Dirty flag for re-render
    pub(super) dirty: Arc<AtomicBool>,
    /// Commit callback
    on_change: Option<ChangeHandler>,
    /// Outside-press source, if the host provides one
    hub: Option<PressHub>,
}

impl Select {
    /// Create a select over `options` with no selection.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: SelectId::new(),
            inner: Arc::new(RwLock::new(SelectInner {
                options: options.into_iter().map(Into::into).collect(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            on_change: None,
            hub: None,
        }
    }

    /// Replace the configuration.
    pub fn with_config(self, config: SelectConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Set the initial value.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.set_value(Some(value.into()));
        self
    }

    /// Set the commit callback.
    pub fn on_change(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Close on presses outside the widget, as reported by `hub`.
    pub fn dismiss_with(mut self, hub: &PressHub) -> Self {
        self.hub = Some(hub.clone());
        self
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string (for hit maps and focus lists).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Host-supplied data
    // -------------------------------------------------------------------------

    /// Get the committed value.
    pub fn value(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or(None)
    }

    /// Replace the committed value without invoking the change callback.
    pub fn set_value(&self, value: Option<String>) {
        if let Ok(mut guard) = self.inner.write()
            && guard.value != value
        {
            guard.value = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the options.
    pub fn options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Replace the options. The highlight is clamped into the new range.
    pub fn set_options<I, S>(&self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options.into_iter().map(Into::into).collect();
            guard.nav = guard.nav.clamped(guard.options.len());
            guard.layout_list();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> SelectConfig {
        self.inner
            .read()
            .map(|guard| guard.config.clone())
            .unwrap_or_default()
    }

    /// Replace the configuration. Disabling an open select closes it.
    pub fn set_config(&self, config: SelectConfig) {
        let disabled = config.disabled;
        if let Ok(mut guard) = self.inner.write() {
            guard.config = config;
            guard.layout_list();
            self.dirty.store(true, Ordering::SeqCst);
        }
        if disabled {
            self.close();
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.config.disabled)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Interaction state
    // -------------------------------------------------------------------------

    /// Snapshot of the navigation state.
    pub fn nav_state(&self) -> NavState {
        self.inner
            .read()
            .map(|guard| guard.nav)
            .unwrap_or_default()
    }

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.nav_state().is_open()
    }

    /// Direction of the open list.
    pub fn direction(&self) -> Option<Direction> {
        self.nav_state().direction()
    }

    /// Highlighted option index.
    pub fn highlight(&self) -> Option<usize> {
        self.nav_state().highlight
    }

    /// First visible row of the list.
    pub fn scroll_top(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.scroll.top())
            .unwrap_or(0)
    }

    /// Rect of the open list as of the last layout.
    pub fn list_rect(&self) -> Option<Rect> {
        self.inner
            .read()
            .map(|guard| guard.list_rect)
            .unwrap_or(None)
    }

    /// Record where the trigger sits and how tall the viewport is.
    ///
    /// An open list is re-laid out against the new geometry but keeps the
    /// direction it opened with.
    pub fn set_geometry(&self, anchor: Rect, viewport_height: u16) {
        if let Ok(mut guard) = self.inner.write()
            && (guard.anchor != anchor || guard.viewport_height != viewport_height)
        {
            guard.anchor = anchor;
            guard.viewport_height = viewport_height;
            guard.layout_list();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Open the dropdown (no-op when disabled or already open).
    pub fn open(&self) {
        if !self.is_open() {
            self.toggle();
        }
    }

    /// Close the dropdown (no-op when closed).
    pub fn close(&self) {
        self.apply(NavEvent::Dismiss);
    }

    /// Toggle the dropdown, as a press on the anchor does.
    pub fn toggle(&self) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }
        self.apply(NavEvent::Toggle)
    }

    /// Run one event through the state machine and carry out its effect.
    ///
    /// The change callback runs after the state lock is released, so it may
    /// read or update this select.
    pub(super) fn apply(&self, event: NavEvent) -> EventResult {
        let mut committed = None;
        let consumed = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            let before = guard.nav;
            let cx = NavContext {
                options: &guard.options,
                anchor: guard.anchor,
                viewport_height: guard.viewport_height,
                placement: &guard.config.placement,
            };
            let Transition {
                state,
                effect,
                consumed,
            } = nav::step(before, event, &cx);
            guard.nav = state;

            if !before.is_open() && state.is_open() {
                log::debug!("Select {} open {:?}", self.id, state.direction());
                guard.layout_list();
                guard.subscription = self.subscribe();
            } else if before.is_open() && !state.is_open() {
                log::debug!("Select {} close", self.id);
                guard.list_rect = None;
                guard.subscription = None;
            }

            match effect {
                Effect::None => {}
                Effect::Reveal(index) => {
                    let margin = guard.config.reveal_margin;
                    guard.scroll.reveal(index, margin);
                }
                Effect::Commit(index) => {
                    if let Some(label) = guard.options.get(index).cloned() {
                        guard.value = Some(label.clone());
                        committed = Some(label);
                    }
                }
            }

            if before != state || effect != Effect::None {
                self.dirty.store(true, Ordering::SeqCst);
            }
            consumed
        };

        if let Some(label) = committed {
            log::debug!("Select {} commit {:?}", self.id, label);
            if let Some(ref handler) = self.on_change {
                handler(&label);
            }
        }
        EventResult::from_handled(consumed)
    }

    /// Attach an outside-press listener holding only a weak reference back.
    fn subscribe(&self) -> Option<Subscription> {
        let hub = self.hub.as_ref()?;
        let inner = Arc::downgrade(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let id = self.id;
        Some(hub.subscribe(move |x, y| {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let Ok(mut guard) = inner.write() else {
                return;
            };
            if !guard.nav.is_open() || guard.region().contains(x, y) {
                return;
            }
            log::debug!("Select {} outside press at ({}, {})", id, x, y);
            let cx = NavContext {
                options: &guard.options,
                anchor: guard.anchor,
                viewport_height: guard.viewport_height,
                placement: &guard.config.placement,
            };
            let next = nav::step(guard.nav, NavEvent::Dismiss, &cx).state;
            guard.nav = next;
            guard.list_rect = None;
            // Dropping our own subscription here is fine: the hub calls
            // listeners from a snapshot taken outside its lock.
            guard.subscription = None;
            dirty.store(true, Ordering::SeqCst);
        }))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the select state has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Select {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            on_change: self.on_change.clone(),
            hub: self.hub.clone(),
        }
    }
}

impl std::fmt::Debug for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Select")
            .field("id", &self.id)
            .field("nav", &self.nav_state())
            .field("value", &self.value())
            .finish()
    }
}
