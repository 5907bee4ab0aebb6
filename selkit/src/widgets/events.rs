//! Widget event handling types.

use std::sync::Arc;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }

    pub(crate) fn from_handled(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// Callback receiving the newly committed single-select value.
pub type ChangeHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback receiving the full new list of chosen tags.
pub type TagsChangeHandler = Arc<dyn Fn(&[String]) + Send + Sync>;
