//! Rendering for the Select widget.

use seldom::text::truncate_to_width;

use crate::widgets::view::{ListView, RowView, TriggerView, WidgetView};

use super::Select;

/// Label of the single row shown when there are no options.
pub const EMPTY_LABEL: &str = "No options";

/// Build the view from the state recorded by the last layout.
pub(super) fn view(select: &Select, focused: bool) -> WidgetView {
    let Ok(guard) = select.inner.read() else {
        return WidgetView {
            trigger: TriggerView::blank(),
            list: None,
        };
    };

    let open = guard.nav.is_open();
    let anchor = guard.anchor;

    // Leave room for the indicator and a space
    let text_width = anchor.width.saturating_sub(2) as usize;
    let (text, is_placeholder) = match guard.value {
        Some(ref value) => (value.as_str(), false),
        None => (guard.config.placeholder.as_str(), true),
    };

    let trigger = TriggerView {
        rect: anchor,
        text: truncate_to_width(text, text_width),
        is_placeholder,
        indicator: Some(if open { '▲' } else { '▼' }),
        chips: Vec::new(),
        cursor_x: None,
        focused,
        disabled: guard.config.disabled,
    };

    let list = match (guard.nav.direction(), guard.list_rect) {
        (Some(direction), Some(rect)) => {
            let width = rect.width as usize;
            let mut rows = if guard.options.is_empty() {
                vec![RowView {
                    index: None,
                    label: seldom::text::fit_to_width(EMPTY_LABEL, width),
                    highlighted: false,
                    selected: false,
                }]
            } else {
                guard
                    .scroll
                    .visible_range()
                    .filter_map(|index| {
                        let label = guard.options.get(index)?;
                        Some(RowView {
                            index: Some(index),
                            label: seldom::text::fit_to_width(label, width),
                            highlighted: guard.nav.highlight == Some(index),
                            selected: guard.value.as_deref() == Some(label.as_str()),
                        })
                    })
                    .collect()
            };
            rows.truncate(rect.height as usize);
            Some(ListView {
                rect,
                direction,
                rows,
                scroll_top: guard.scroll.top(),
                total_rows: guard.row_count(),
            })
        }
        _ => None,
    };

    WidgetView { trigger, list }
}
