//! Render output of the selection widgets.
//!
//! Views are plain data. The host draws them however its surface wants; the
//! widgets never touch the terminal.

use seldom::Rect;

use crate::placement::Direction;

/// Everything needed to draw one widget for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub trigger: TriggerView,
    /// Present while the list is open and has something to show.
    pub list: Option<ListView>,
}

/// The always-visible part of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerView {
    pub rect: Rect,
    /// Selected label, typed query, or placeholder.
    pub text: String,
    /// `text` is the placeholder.
    pub is_placeholder: bool,
    /// Open/closed arrow for single-select.
    pub indicator: Option<char>,
    /// Chosen tags, laid out left to right (multi-select only).
    pub chips: Vec<ChipView>,
    /// Cell column of the text cursor, when the widget takes text.
    pub cursor_x: Option<u16>,
    pub focused: bool,
    pub disabled: bool,
}

impl TriggerView {
    /// An empty trigger, used when the widget state cannot be read.
    pub fn blank() -> Self {
        Self {
            rect: Rect::default(),
            text: String::new(),
            is_placeholder: true,
            indicator: None,
            chips: Vec::new(),
            cursor_x: None,
            focused: false,
            disabled: false,
        }
    }
}

/// A chosen tag inside a multi-select trigger. Pressing it removes the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub rect: Rect,
    pub label: String,
}

/// The floating option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rect: Rect,
    pub direction: Direction,
    /// Visible rows only, top to bottom.
    pub rows: Vec<RowView>,
    pub scroll_top: u16,
    /// Total rows including those scrolled out of view.
    pub total_rows: usize,
}

/// One visible row of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Index into the widget's options/candidates; `None` for the empty-state row.
    pub index: Option<usize>,
    /// Label fitted to the list width.
    pub label: String,
    pub highlighted: bool,
    pub selected: bool,
}
