//! Error types.
//!
//! Interaction never fails: over-cap adds and unknown keys are silent no-ops.
//! These errors surface only through the explicit `try_*` and `validate` APIs.

use thiserror::Error;

/// Why a tag could not be added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The multi-select already holds `max` items.
    #[error("Selection limit of {max} reached")]
    CapReached {
        /// The configured cap.
        max: usize,
    },

    /// The item is already chosen.
    #[error("'{0}' is already selected")]
    AlreadyChosen(String),
}

/// Invalid widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero list height would never show an option.
    #[error("max_height must be at least 1")]
    ZeroMaxHeight,

    /// Options are used as identity and must be unique.
    #[error("Option '{0}' appears more than once")]
    DuplicateOption(String),
}
