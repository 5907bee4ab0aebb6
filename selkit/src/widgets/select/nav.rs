//! Single-select navigation state machine.
//!
//! [`NavState`] is a small `Copy` value; [`step`] maps a state and an event to
//! the next state plus an [`Effect`] for the shell to carry out (scroll a row
//! into view, commit a value). Nothing here touches geometry beyond the
//! placement decision on open, so every rule is testable with plain values.

use seldom::{Key, Rect};

use crate::config::PlacementConfig;
use crate::placement::{self, Direction};
use crate::typeahead;

/// Open/closed phase. The direction only exists while open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Closed,
    Open(Direction),
}

/// Interaction state of a single-select.
///
/// `highlight` is `None` until the user first moves through the list, and is
/// otherwise a valid index into the current options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub phase: Phase,
    pub highlight: Option<usize>,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open(_))
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.phase {
            Phase::Open(direction) => Some(direction),
            Phase::Closed => None,
        }
    }

    /// Drop a highlight that no longer points into `len` options.
    pub fn clamped(self, len: usize) -> Self {
        let highlight = match self.highlight {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
        Self { highlight, ..self }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Press on the anchor: open when closed, close when open.
    Toggle,
    /// Press outside the widget, or focus leaving it.
    Dismiss,
    /// Key while focused (modifier filtering happens before this).
    Key(Key),
    /// Press on option row `i`.
    OptionClick(usize),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Scroll option `i` into view.
    Reveal(usize),
    /// Commit option `i` as the new value.
    Commit(usize),
}

/// Result of [`step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: NavState,
    pub effect: Effect,
    /// Whether the event meant anything in the current state.
    pub consumed: bool,
}

impl Transition {
    fn to(state: NavState, effect: Effect) -> Self {
        Self {
            state,
            effect,
            consumed: true,
        }
    }

    fn stay(state: NavState) -> Self {
        Self::to(state, Effect::None)
    }

    fn ignore(state: NavState) -> Self {
        Self {
            state,
            effect: Effect::None,
            consumed: false,
        }
    }
}

/// Everything the machine reads besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct NavContext<'a> {
    pub options: &'a [String],
    pub anchor: Rect,
    pub viewport_height: u16,
    pub placement: &'a PlacementConfig,
}

/// Compute the next state for `event`.
pub fn step(state: NavState, event: NavEvent, cx: &NavContext<'_>) -> Transition {
    let state = state.clamped(cx.options.len());
    match state.phase {
        Phase::Closed => step_closed(state, event, cx),
        Phase::Open(_) => step_open(state, event, cx),
    }
}

fn open(state: NavState, cx: &NavContext<'_>) -> NavState {
    let direction = placement::resolve(cx.anchor, cx.viewport_height, cx.placement);
    NavState {
        phase: Phase::Open(direction),
        ..state
    }
}

fn close(state: NavState) -> NavState {
    NavState {
        phase: Phase::Closed,
        ..state
    }
}

fn step_closed(state: NavState, event: NavEvent, cx: &NavContext<'_>) -> Transition {
    match event {
        NavEvent::Toggle => Transition::stay(open(state, cx)),
        NavEvent::Key(Key::Enter | Key::Char(' ') | Key::Down) => {
            Transition::stay(open(state, cx))
        }
        // Closing a closed widget is a no-op.
        NavEvent::Dismiss | NavEvent::Key(_) | NavEvent::OptionClick(_) => {
            Transition::ignore(state)
        }
    }
}

fn step_open(state: NavState, event: NavEvent, cx: &NavContext<'_>) -> Transition {
    let len = cx.options.len();
    match event {
        NavEvent::Toggle | NavEvent::Dismiss | NavEvent::Key(Key::Escape) => {
            Transition::stay(close(state))
        }
        NavEvent::OptionClick(i) if i < len => Transition::to(close(state), Effect::Commit(i)),
        NavEvent::OptionClick(_) => Transition::ignore(state),
        NavEvent::Key(Key::Down) => move_to(state, len, |h| h.map_or(0, |i| i + 1)),
        NavEvent::Key(Key::Up) => move_to(state, len, |h| h.map_or(0, |i| i.saturating_sub(1))),
        NavEvent::Key(Key::Home) => move_to(state, len, |_| 0),
        NavEvent::Key(Key::End) => move_to(state, len, |_| usize::MAX),
        NavEvent::Key(Key::Enter) => match state.highlight {
            Some(i) => Transition::to(close(state), Effect::Commit(i)),
            None => Transition::stay(state),
        },
        NavEvent::Key(Key::Char(c)) => match typeahead::find_prefix_match(c, cx.options) {
            Some(i) => Transition::to(
                NavState {
                    highlight: Some(i),
                    ..state
                },
                Effect::Reveal(i),
            ),
            None => Transition::ignore(state),
        },
        NavEvent::Key(_) => Transition::ignore(state),
    }
}

/// Move the highlight, clamping into the option range instead of wrapping.
fn move_to(
    state: NavState,
    len: usize,
    next: impl FnOnce(Option<usize>) -> usize,
) -> Transition {
    if len == 0 {
        return Transition::stay(state);
    }
    let index = next(state.highlight).min(len - 1);
    Transition::to(
        NavState {
            highlight: Some(index),
            ..state
        },
        Effect::Reveal(index),
    )
}
