//! Widget configuration types.
//!
//! All configs are plain builders with defaults. They also deserialize (every
//! field optional) so a host can keep widget settings next to its other data.

use std::collections::HashSet;

use serde::Deserialize;
use seldom::DEFAULT_REVEAL_MARGIN;

use crate::error::ConfigError;
use crate::placement::Direction;

/// Rows that must be free below the anchor before the list opens downward.
pub const DEFAULT_MIN_HEIGHT_TO_OPEN: u16 = 8;

/// Default cap on the rendered list height, in rows.
pub const DEFAULT_MAX_HEIGHT: u16 = 8;

/// Default cap on the number of tags in a multi-select.
pub const DEFAULT_MAX_TAGS: usize = 3;

/// Inputs to the open-direction decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Space below the anchor under which opening upward is considered.
    pub min_height_to_open: u16,
    /// Open upward whenever there is at least as much room above as below.
    pub prefer_up: bool,
    /// Hard override; skips measurement entirely.
    pub force_direction: Option<Direction>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_height_to_open: DEFAULT_MIN_HEIGHT_TO_OPEN,
            prefer_up: false,
            force_direction: None,
        }
    }
}

impl PlacementConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_height_to_open(mut self, rows: u16) -> Self {
        self.min_height_to_open = rows;
        self
    }

    pub fn prefer_up(mut self, prefer: bool) -> Self {
        self.prefer_up = prefer;
        self
    }

    pub fn force_direction(mut self, direction: Direction) -> Self {
        self.force_direction = Some(direction);
        self
    }
}

/// Configuration for a single-select [`Select`](crate::widgets::select::Select).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Text shown while nothing is selected.
    pub placeholder: String,
    /// Suppresses opening; the widget is skipped by focus traversal.
    pub disabled: bool,
    /// Cap on the rendered list height. Longer lists scroll.
    pub max_height: u16,
    /// Distance kept between a revealed row and the list edge.
    pub reveal_margin: u16,
    #[serde(flatten)]
    pub placement: PlacementConfig,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Select...".into(),
            disabled: false,
            max_height: DEFAULT_MAX_HEIGHT,
            reveal_margin: DEFAULT_REVEAL_MARGIN,
            placement: PlacementConfig::default(),
        }
    }
}

impl SelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = rows;
        self
    }

    pub fn reveal_margin(mut self, rows: u16) -> Self {
        self.reveal_margin = rows;
        self
    }

    pub fn min_height_to_open(mut self, rows: u16) -> Self {
        self.placement.min_height_to_open = rows;
        self
    }

    pub fn prefer_up(mut self, prefer: bool) -> Self {
        self.placement.prefer_up = prefer;
        self
    }

    pub fn force_direction(mut self, direction: Direction) -> Self {
        self.placement.force_direction = Some(direction);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_height == 0 {
            return Err(ConfigError::ZeroMaxHeight);
        }
        Ok(())
    }
}

/// Configuration for a multi-select [`TagInput`](crate::widgets::tag_input::TagInput).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TagInputConfig {
    /// Text shown while no tag is chosen and nothing is typed.
    pub placeholder: String,
    /// Maximum number of chosen tags.
    pub max: usize,
    /// Cap on the candidate panel height.
    pub max_height: u16,
    #[serde(flatten)]
    pub placement: PlacementConfig,
}

impl Default for TagInputConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type to search...".into(),
            max: DEFAULT_MAX_TAGS,
            max_height: DEFAULT_MAX_HEIGHT,
            placement: PlacementConfig::default(),
        }
    }
}

impl TagInputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = rows;
        self
    }

    pub fn placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_height == 0 {
            return Err(ConfigError::ZeroMaxHeight);
        }
        Ok(())
    }
}

/// Check that every option label is unique.
pub fn validate_options(options: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.as_str()) {
            return Err(ConfigError::DuplicateOption(option.clone()));
        }
    }
    Ok(())
}
