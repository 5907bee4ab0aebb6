pub mod config;
pub mod dismiss;
pub mod error;
pub mod placement;
pub mod typeahead;
pub mod widgets;

pub use config::{PlacementConfig, SelectConfig, TagInputConfig};
pub use dismiss::{PressHub, Subscription};
pub use error::{ConfigError, SelectError};
pub use placement::Direction;
pub use widgets::events::EventResult;
pub use widgets::select::Select;
pub use widgets::tag_input::TagInput;
pub use widgets::traits::Widget;
pub use widgets::view::{ChipView, ListView, RowView, TriggerView, WidgetView};

pub mod prelude {
    pub use crate::config::{PlacementConfig, SelectConfig, TagInputConfig};
    pub use crate::dismiss::PressHub;
    pub use crate::placement::Direction;
    pub use crate::widgets::events::EventResult;
    pub use crate::widgets::select::Select;
    pub use crate::widgets::tag_input::TagInput;
    pub use crate::widgets::traits::Widget;
    pub use crate::widgets::view::{ChipView, ListView, RowView, TriggerView, WidgetView};

    pub use seldom::{Event, Key, Modifiers, MouseButton, Rect};
}
