//! Adapter utilities for the `keyboard-space` crate.
//!
//! The `keyboard-space` crate is UI-agnostic and holds the keyboard-reactive state machine.
//! This crate provides the thin, framework-neutral wrapper a rendering layer puts around it:
//!
//! - Scoped keyboard listener registration (every listener is removed on teardown)
//! - Event dispatch from the host into one coordinator per viewport
//! - Scroll event forwarding to the owner's own callback
//!
//! This crate is intentionally framework-agnostic (no bindings to a specific toolkit).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod event;
mod source;
mod view;

#[cfg(test)]
mod tests;

pub use event::{KeyboardEvent, ViewEvent};
pub use source::{KeyboardEventKind, KeyboardEventSource, ListenerId};
pub use view::{KeyboardAwareView, OnScrollCallback};
