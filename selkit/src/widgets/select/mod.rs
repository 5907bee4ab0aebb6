//! Select widget - a dropdown single-select with keyboard navigation.

pub mod events;
pub mod nav;
mod render;
mod state;

pub use nav::{Effect, NavContext, NavEvent, NavState, Phase, Transition};
pub use render::EMPTY_LABEL;
pub use state::{Select, SelectId};
