use keyboard_space::{KeyboardGeometry, Offset};

use crate::KeyboardEventKind;

/// A keyboard notification delivered to a registered listener.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardEvent {
    WillShow(KeyboardGeometry),
    WillHide,
}

impl KeyboardEvent {
    pub fn kind(&self) -> KeyboardEventKind {
        match self {
            Self::WillShow(_) => KeyboardEventKind::WillShow,
            Self::WillHide => KeyboardEventKind::WillHide,
        }
    }
}

/// Layout and scroll notifications from the rendered scroll view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewEvent {
    Layout { height: f64 },
    ContentSizeChange { height: f64 },
    /// A discrete scroll event (user, programmatic or animated).
    Scroll(Offset),
    /// A tick of the animated value driving the viewport's vertical offset.
    AnimatedValue(f64),
}
