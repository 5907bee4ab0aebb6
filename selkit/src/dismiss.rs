//! Outside-press detection.
//!
//! The host owns a [`PressHub`] and feeds it every primary-button press.
//! Widgets subscribe while their list is open and close themselves when a
//! press lands outside their region. A [`Subscription`] detaches on drop, so
//! a widget dropped while open leaves nothing behind.
//!
//! # Example
//!
//! ```ignore
//! let hub = PressHub::new();
//! let rating = Select::new(options).dismiss_with(&hub);
//!
//! // In the host event loop, before routing the press to a widget:
//! if let Event::Press { x, y, button } = event {
//!     hub.dispatch(x, y, button);
//! }
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, Weak};

use seldom::MouseButton;

type Listener = Arc<dyn Fn(u16, u16) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Host-provided source of press events, shared by all widgets of a screen.
#[derive(Clone, Default)]
pub struct PressHub {
    inner: Arc<Mutex<HubInner>>,
}

impl PressHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for presses. It stays attached until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(u16, u16) + Send + Sync + 'static) -> Subscription {
        let id = match self.inner.lock() {
            Ok(mut guard) => {
                let id = guard.next_id;
                guard.next_id += 1;
                guard.listeners.push((id, Arc::new(listener)));
                log::debug!("PressHub subscribe id={} total={}", id, guard.listeners.len());
                id
            }
            Err(_) => u64::MAX,
        };
        Subscription {
            id,
            hub: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver a press to every listener. Non-primary buttons are ignored.
    ///
    /// Listeners run outside the hub lock, so they may drop their own (or any
    /// other) subscription while being called. Returns how many were notified.
    pub fn dispatch(&self, x: u16, y: u16, button: MouseButton) -> usize {
        if !button.is_primary() {
            return 0;
        }
        let snapshot: Vec<Listener> = match self.inner.lock() {
            Ok(guard) => guard.listeners.iter().map(|(_, l)| Arc::clone(l)).collect(),
            Err(_) => return 0,
        };
        log::trace!("PressHub dispatch ({}, {}) to {} listeners", x, y, snapshot.len());
        for listener in &snapshot {
            listener(x, y);
        }
        snapshot.len()
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .map(|guard| guard.listeners.len())
            .unwrap_or(0)
    }
}

impl fmt::Debug for PressHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle to an attached listener. Dropping it detaches the listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hub: Weak<Mutex<HubInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        if let Ok(mut guard) = hub.lock() {
            guard.listeners.retain(|(id, _)| *id != self.id);
            log::debug!(
                "PressHub unsubscribe id={} remaining={}",
                self.id,
                guard.listeners.len()
            );
        }
    }
}
