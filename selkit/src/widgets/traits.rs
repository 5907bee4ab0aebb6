//! The seam between widgets and the host event loop.

use seldom::{Key, Modifiers, Rect, Region};

use super::events::EventResult;
use super::view::WidgetView;

/// Behaviour shared by the selection widgets so a host can keep them in one
/// focus list and route events without knowing the concrete type.
///
/// Coordinates are screen cells. `render` must run before presses are routed
/// for a frame, since it records the geometry that presses are tested against.
pub trait Widget: Send + Sync {
    /// Unique ID of this widget instance.
    fn id(&self) -> String;

    /// Whether focus traversal should stop on this widget.
    fn is_focusable(&self) -> bool;

    /// Whether the option list / candidate panel is open.
    fn is_open(&self) -> bool;

    /// Handle a key while focused.
    fn dispatch_key(&self, key: Key, modifiers: Modifiers) -> EventResult;

    /// Handle a primary press that hit this widget's region.
    fn dispatch_press(&self, x: u16, y: u16) -> EventResult;

    /// Handle a wheel event over this widget.
    fn dispatch_scroll(&self, delta: i16) -> EventResult;

    /// Focus left the widget.
    fn dispatch_blur(&self);

    /// Lay out against `anchor` and produce the view for this frame.
    fn render(&self, anchor: Rect, viewport_height: u16, focused: bool) -> WidgetView;

    /// Screen area owned by the widget as of the last render.
    fn region(&self) -> Region;

    /// Check if the widget state has changed and needs re-render.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after rendering.
    fn clear_dirty(&self);
}
