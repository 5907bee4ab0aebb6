pub mod event;
pub mod hit;
pub mod layout;
pub mod scroll;
pub mod text;
pub mod text_input;

pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{HitBox, HitMap, Region};
pub use layout::Rect;
pub use scroll::{reveal_offset, ListScroll, DEFAULT_REVEAL_MARGIN};
pub use text_input::QueryBuffer;
