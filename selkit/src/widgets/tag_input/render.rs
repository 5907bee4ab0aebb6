//! Rendering for the TagInput widget.

use seldom::Rect;
use seldom::text::{display_width, fit_to_width, truncate_to_width};

use crate::widgets::view::{ChipView, ListView, RowView, TriggerView, WidgetView};

use super::TagInput;

/// Suffix drawn after a chip label; pressing the chip removes the tag.
pub const CHIP_CLOSE: &str = " ×";

/// Lay out chips left to right along the anchor row, one cell apart.
///
/// Chips that would overflow the anchor are left out.
pub(crate) fn layout_chips(anchor: Rect, tags: &[String]) -> Vec<ChipView> {
    let mut chips = Vec::with_capacity(tags.len());
    let mut x = anchor.x;
    for tag in tags {
        let width = display_width(tag) + display_width(CHIP_CLOSE);
        let width = u16::try_from(width).unwrap_or(u16::MAX);
        if x.saturating_add(width) > anchor.right() {
            break;
        }
        chips.push(ChipView {
            rect: Rect::new(x, anchor.y, width, 1),
            label: tag.clone(),
        });
        x = x.saturating_add(width + 1);
    }
    chips
}

/// Build the view from the state recorded by the last sync.
pub(super) fn view(input: &TagInput, focused: bool) -> WidgetView {
    let Ok(guard) = input.inner.read() else {
        return WidgetView {
            trigger: TriggerView::blank(),
            list: None,
        };
    };

    let anchor = guard.anchor;
    let chips = layout_chips(anchor, guard.controller.chosen());
    let text_x = chips
        .last()
        .map(|chip| chip.rect.right().saturating_add(1))
        .unwrap_or(anchor.x)
        .min(anchor.right());
    let text_width = anchor.right().saturating_sub(text_x) as usize;

    let query = guard.buffer.text();
    let show_placeholder = query.is_empty() && guard.controller.chosen().is_empty();
    let text = if show_placeholder {
        truncate_to_width(&guard.config.placeholder, text_width)
    } else {
        truncate_to_width(query, text_width)
    };

    let cursor_x = focused.then(|| {
        let before = display_width(query.get(..guard.buffer.cursor()).unwrap_or(query));
        let offset = u16::try_from(before).unwrap_or(u16::MAX);
        text_x
            .saturating_add(offset)
            .min(anchor.right().saturating_sub(1))
    });

    let trigger = TriggerView {
        rect: anchor,
        text,
        is_placeholder: show_placeholder,
        indicator: None,
        chips,
        cursor_x,
        focused,
        disabled: false,
    };

    let list = match (guard.direction, guard.list_rect) {
        (Some(direction), Some(rect)) => {
            let width = rect.width as usize;
            let mut rows: Vec<RowView> = guard
                .scroll
                .visible_range()
                .filter_map(|index| {
                    let label = guard.candidates.get(index)?;
                    Some(RowView {
                        index: Some(index),
                        label: fit_to_width(label, width),
                        highlighted: false,
                        selected: false,
                    })
                })
                .collect();
            rows.truncate(rect.height as usize);
            Some(ListView {
                rect,
                direction,
                rows,
                scroll_top: guard.scroll.top(),
                total_rows: guard.candidates.len(),
            })
        }
        _ => None,
    };

    WidgetView { trigger, list }
}
