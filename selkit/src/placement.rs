//! Open-direction decision for option lists.

use serde::Deserialize;
use seldom::Rect;

use crate::config::PlacementConfig;

/// Which side of the anchor an option list opens on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
}

/// Decide whether a list anchored at `anchor` opens up or down.
///
/// Runs once per closed-to-open transition. Callers cache the result while
/// the list stays open so viewport changes do not flip it mid-interaction.
///
/// `prefer_up` wins whenever the space above is at least the space below,
/// even if that space is tiny.
pub fn resolve(anchor: Rect, viewport_height: u16, config: &PlacementConfig) -> Direction {
    if let Some(direction) = config.force_direction {
        return direction;
    }

    let space_below = viewport_height as i32 - anchor.bottom() as i32;
    let space_above = anchor.top() as i32;

    let mut choose_up = false;
    if space_below < config.min_height_to_open as i32 && space_above > space_below {
        choose_up = true;
    }
    if config.prefer_up && space_above >= space_below {
        choose_up = true;
    }

    let direction = if choose_up { Direction::Up } else { Direction::Down };
    log::debug!(
        "placement: above={} below={} min={} prefer_up={} -> {:?}",
        space_above,
        space_below,
        config.min_height_to_open,
        config.prefer_up,
        direction
    );
    direction
}

/// Rect for a list of `rows` rows opening from `anchor` in `direction`.
///
/// The list is as wide as the anchor and is clipped to the viewport, so its
/// height can come out smaller than `rows` (down to zero).
pub fn place_list(anchor: Rect, direction: Direction, rows: u16, viewport_height: u16) -> Rect {
    match direction {
        Direction::Down => {
            let y = anchor.bottom();
            let height = rows.min(viewport_height.saturating_sub(y));
            Rect::new(anchor.x, y, anchor.width, height)
        }
        Direction::Up => {
            let height = rows.min(anchor.y);
            Rect::new(anchor.x, anchor.y - height, anchor.width, height)
        }
    }
}
