//! TagInput widget - a capped multi-select with free-text tagging.

pub mod controller;
pub mod events;
pub mod filter;
mod render;
mod state;

pub use controller::{TagInputController, TagState, capitalize};
pub use filter::substring_filter;
pub use render::CHIP_CLOSE;
pub use state::{TagInput, TagInputId};
