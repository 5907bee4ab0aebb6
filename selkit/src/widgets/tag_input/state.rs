//! TagInput widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use seldom::{ListScroll, QueryBuffer, Rect, Region};

use crate::config::TagInputConfig;
use crate::dismiss::{PressHub, Subscription};
use crate::error::SelectError;
use crate::placement::{self, Direction};
use crate::widgets::events::{EventResult, TagsChangeHandler};

use super::controller::TagInputController;

/// Unique identifier for a TagInput widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagInputId(usize);

impl TagInputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TagInputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__tag_input_{}", self.0)
    }
}

/// Internal state for a TagInput widget.
#[derive(Debug, Default)]
pub(super) struct TagInputInner {
    pub(super) controller: TagInputController,
    /// Editable copy of the query with a cursor
    pub(super) buffer: QueryBuffer,
    pub(super) config: TagInputConfig,
    /// Candidates for the current query, cached by `sync`
    pub(super) candidates: Vec<String>,
    pub(super) scroll: ListScroll,
    pub(super) anchor: Rect,
    pub(super) viewport_height: u16,
    /// Direction resolved when the panel opened
    pub(super) direction: Option<Direction>,
    /// Candidate panel rect (None while closed or empty)
    pub(super) list_rect: Option<Rect>,
    pub(super) subscription: Option<Subscription>,
}

impl TagInputInner {
    /// Bring derived state in line with the controller.
    ///
    /// Resolves placement on the closed-to-open edge only; an open panel
    /// keeps its direction while the query changes.
    pub(super) fn sync(&mut self) {
        if self.buffer.text() != self.controller.query() {
            self.buffer.set(self.controller.query());
        }
        self.candidates = self.controller.filtered_candidates();

        if !self.controller.is_open() {
            self.direction = None;
            self.list_rect = None;
            self.scroll.reset();
            return;
        }

        let direction = match self.direction {
            Some(direction) => direction,
            None => {
                let direction = placement::resolve(
                    self.anchor,
                    self.viewport_height,
                    &self.config.placement,
                );
                self.direction = Some(direction);
                direction
            }
        };

        if self.candidates.is_empty() {
            self.list_rect = None;
            self.scroll.reset();
            return;
        }

        let rows = u16::try_from(self.candidates.len())
            .unwrap_or(u16::MAX)
            .min(self.config.max_height);
        let rect = placement::place_list(self.anchor, direction, rows, self.viewport_height);
        self.scroll.set_viewport(
            rect.height,
            u16::try_from(self.candidates.len()).unwrap_or(u16::MAX),
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

/// What an update did, as reported by the closure passed to `TagInput::update`.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Outcome {
    pub(super) consumed: bool,
    pub(super) tags_changed: bool,
}

impl Outcome {
    pub(super) fn ignored() -> Self {
        Self::default()
    }

    pub(super) fn consumed() -> Self {
        Self {
            consumed: true,
            tags_changed: false,
        }
    }

    pub(super) fn changed(tags_changed: bool) -> Self {
        Self {
            consumed: true,
            tags_changed,
        }
    }
}

/// A multi-select with a free-text query and removable tag chips.
///
/// Typing filters the vocabulary; Enter turns the query into a tag, matching
/// a known option's spelling when there is one. The number of tags is capped
/// by [`TagInputConfig::max`]. Every change to the chosen tags is reported to
/// [`TagInput::on_change`] with the full new list.
///
/// # Example
///
/// ```ignore
/// let genres = TagInput::new(["Action", "Comedy", "Drama", "Thriller"])
///     .with_config(TagInputConfig::new().max(3))
///     .on_change(|tags| log::info!("genres = {:?}", tags))
///     .dismiss_with(&hub);
/// ```
pub struct TagInput {
    id: TagInputId,
    pub(super) inner: Arc<RwLock<TagInputInner>>,
    pub(super) dirty: Arc<AtomicBool>,
    on_change: Option<TagsChangeHandler>,
    hub: Option<PressHub>,
}

impl TagInput {
    /// Create a tag input over the `options` vocabulary with nothing chosen.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let config = TagInputConfig::default();
        let controller = TagInputController::new(
            options.into_iter().map(Into::into).collect(),
            Vec::new(),
            config.max,
        );
        let mut inner = TagInputInner {
            controller,
            config,
            ..Default::default()
        };
        inner.sync();
        Self {
            id: TagInputId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
            on_change: None,
            hub: None,
        }
    }

    /// Replace the configuration. Tags beyond a lowered cap are dropped.
    pub fn with_config(self, config: TagInputConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Set the initially chosen tags.
    pub fn with_selected<I, S>(self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_selected(selected);
        self
    }

    /// Set the change callback.
    pub fn on_change(mut self, handler: impl Fn(&[String]) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    /// Close the panel on presses outside the widget, as reported by `hub`.
    pub fn dismiss_with(mut self, hub: &PressHub) -> Self {
        self.hub = Some(hub.clone());
        self
    }

    pub fn id(&self) -> TagInputId {
        self.id
    }

    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Host-supplied data
    // -------------------------------------------------------------------------

    /// Get the chosen tags.
    pub fn selected(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.controller.chosen().to_vec())
            .unwrap_or_default()
    }

    /// Replace the chosen tags without invoking the change callback.
    pub fn set_selected<I, S>(&self, selected: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard
                .controller
                .set_chosen(selected.into_iter().map(Into::into).collect());
            guard.sync();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.controller.options().to_vec())
            .unwrap_or_default()
    }

    pub fn set_options<I, S>(&self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard
                .controller
                .set_options(options.into_iter().map(Into::into).collect());
            guard.sync();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn config(&self) -> TagInputConfig {
        self.inner
            .read()
            .map(|guard| guard.config.clone())
            .unwrap_or_default()
    }

    pub fn set_config(&self, config: TagInputConfig) {
        if let Ok(mut guard) = self.inner.write() {
            guard.controller.set_max(config.max);
            guard.config = config;
            guard.sync();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Query and panel
    // -------------------------------------------------------------------------

    pub fn query(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.controller.query().to_string())
            .unwrap_or_default()
    }

    /// Replace the query; the panel opens iff it is non-empty.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(move |inner| {
            inner.controller.set_query(text);
            Outcome::consumed()
        });
    }

    /// Check if the candidate panel is open.
    pub fn is_open(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.controller.is_open())
            .unwrap_or(false)
    }

    /// Direction of the open panel.
    pub fn direction(&self) -> Option<Direction> {
        self.inner
            .read()
            .map(|guard| guard.direction)
            .unwrap_or(None)
    }

    /// Unchosen options matching the query, in vocabulary order.
    pub fn candidates(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.candidates.clone())
            .unwrap_or_default()
    }

    pub fn list_rect(&self) -> Option<Rect> {
        self.inner
            .read()
            .map(|guard| guard.list_rect)
            .unwrap_or(None)
    }

    pub fn scroll_top(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| guard.scroll.top())
            .unwrap_or(0)
    }

    /// Close the candidate panel, keeping the query.
    pub fn close(&self) {
        self.update(|inner| {
            if !inner.controller.is_open() {
                return Outcome::ignored();
            }
            inner.controller.close();
            Outcome::consumed()
        });
    }

    /// Record where the trigger sits and how tall the viewport is.
    pub fn set_geometry(&self, anchor: Rect, viewport_height: u16) {
        if let Ok(mut guard) = self.inner.write()
            && (guard.anchor != anchor || guard.viewport_height != viewport_height)
        {
            guard.anchor = anchor;
            guard.viewport_height = viewport_height;
            guard.sync();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Tag operations
    // -------------------------------------------------------------------------

    /// Add a tag. Silently refused at the cap or when already chosen.
    pub fn add(&self, option: &str) -> bool {
        let mut added = false;
        self.update(|inner| {
            added = inner.controller.add(option);
            Outcome::changed(added)
        });
        added
    }

    /// Add a tag, reporting why it was refused.
    pub fn try_add(&self, option: &str) -> Result<(), SelectError> {
        let mut result = Ok(());
        self.update(|inner| {
            result = inner.controller.try_add(option);
            Outcome::changed(result.is_ok())
        });
        result
    }

    /// Remove a tag. Returns true if it was chosen.
    pub fn remove(&self, option: &str) -> bool {
        let mut removed = false;
        self.update(|inner| {
            removed = inner.controller.remove(option);
            Outcome::changed(removed)
        });
        removed
    }

    /// Turn the current query into a tag, as Enter does.
    pub fn commit_free_text(&self) -> bool {
        let mut added = false;
        self.update(|inner| {
            added = inner.controller.commit_free_text();
            Outcome::changed(added)
        });
        added
    }

    /// Apply `f` under the lock, then keep derived state, the outside-press
    /// listener and the dirty flag in step. The change callback runs after
    /// the lock is released.
    pub(super) fn update(&self, f: impl FnOnce(&mut TagInputInner) -> Outcome) -> EventResult {
        let (outcome, tags) = {
            let Ok(mut guard) = self.inner.write() else {
                return EventResult::Ignored;
            };
            let was_open = guard.controller.is_open();
            let outcome = f(&mut *guard);
            guard.sync();

            let open = guard.controller.is_open();
            if !was_open && open {
                log::debug!("TagInput {} open {:?}", self.id, guard.direction);
                guard.subscription = self.subscribe();
            } else if was_open && !open {
                log::debug!("TagInput {} close", self.id);
                guard.subscription = None;
            }

            if outcome.consumed {
                self.dirty.store(true, Ordering::SeqCst);
            }
            let tags = outcome
                .tags_changed
                .then(|| guard.controller.chosen().to_vec());
            (outcome, tags)
        };

        if let Some(tags) = tags {
            log::debug!("TagInput {} tags {:?}", self.id, tags);
            if let Some(ref handler) = self.on_change {
                handler(&tags);
            }
        }
        EventResult::from_handled(outcome.consumed)
    }

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
            if !guard.controller.is_open() || guard.region().contains(x, y) {
                return;
            }
            log::debug!("TagInput {} outside press at ({}, {})", id, x, y);
            guard.controller.close();
            guard.sync();
            guard.subscription = None;
            dirty.store(true, Ordering::SeqCst);
        }))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for TagInput {
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

impl std::fmt::Debug for TagInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagInput")
            .field("id", &self.id)
            .field("query", &self.query())
            .field("selected", &self.selected())
            .finish()
    }
}
