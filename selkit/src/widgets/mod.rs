//! Selection widgets.
//!
//! Each widget is split the same way:
//! - a pure controller holding the interaction rules (`nav`, `controller`)
//! - `state`: the shell owning controller state, geometry and callbacks
//! - `events`: key/press handling and the [`Widget`](traits::Widget) impl
//! - `render`: building the [`WidgetView`](view::WidgetView)

pub mod events;
pub mod select;
pub mod tag_input;
pub mod traits;
pub mod view;
