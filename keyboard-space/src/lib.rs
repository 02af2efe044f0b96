//! A headless coordinator for keyboard-aware scroll viewports.
//!
//! For the framework-neutral wrapper (listener scoping, event dispatch), see the
//! `keyboard-space-adapter` crate.
//!
//! When an on-screen keyboard opens, a scroll viewport needs extra bottom inset so its content
//! can scroll above the keyboard, and the focused field may need to be scrolled into view. When
//! the keyboard closes, the inset shrinks back and the scroll position is restored according to
//! a policy: an explicit fixed target, the offset remembered before the keyboard opened, or a
//! clamp to the new maximum offset.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide, through [`Host`]:
//! - the focused field and its on-screen bounds
//! - scroll execution (`scroll_to`, `scroll_to_end`, `scroll_field_into_view`)
//! - keyboard geometry, layout, content size and scroll offsets as events
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod commands;
mod coordinator;
mod deferred;
mod host;
mod memory;
mod options;
mod state;
mod types;
mod visibility;


pub use commands::ScrollCommands;
pub use coordinator::KeyboardSpaceCoordinator;
pub use deferred::DeferredScroll;
pub use host::{Host, HostError};
pub use memory::{PositionMemory, RestoreTarget};
pub use options::{InsetChange, KeyboardSpaceOptions, OnInsetChangeCallback, RestoreMode};
pub use state::ViewportState;
pub use types::{FieldHandle, KeyboardGeometry, NodeId, Offset, Rect};
pub use visibility::{is_obscured, obscured_amount};
