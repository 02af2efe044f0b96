use alloc::sync::Arc;

use crate::Offset;

/// Why the bottom inset changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsetChange {
    KeyboardShown,
    KeyboardHidden,
}

/// A callback fired after the bottom inset actually changed.
///
/// The second argument is the new inset.
pub type OnInsetChangeCallback = Arc<dyn Fn(InsetChange, f64) + Send + Sync>;

/// How the scroll position is treated on keyboard close when no explicit reset target is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestoreMode {
    /// Restore the offset captured when the keyboard opened (or the origin if none was).
    #[default]
    Remember,
    /// Simple viewport mode: only pull the offset back when it exceeds the new maximum.
    ClampToContent,
}

/// Configuration for [`crate::KeyboardSpaceCoordinator`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can tweak a few fields and
/// call `KeyboardSpaceCoordinator::set_options` without reallocating closures.
pub struct KeyboardSpaceOptions {
    /// Clearance kept between the focused field and the keyboard's top edge.
    pub extra_height: f64,
    /// Added to `extra_height` when scrolling a field into view after a keyboard open.
    pub extra_scroll_height: f64,
    /// Part of the keyboard height already covered by surrounding chrome.
    pub bottom_offset: f64,
    /// Baseline reserved inset (e.g. a tab bar). The inset never goes below this.
    pub minimum_inset: f64,
    /// Delay before a focused-field scroll fires, so the keyboard animation can settle.
    pub keyboard_opening_time_ms: u64,
    /// Fixed scroll position to return to on close. Set once at construction.
    pub reset_target: Option<Offset>,
    pub restore_mode: RestoreMode,
    /// Skips the obscuring check (and the resulting scroll) on keyboard open.
    pub disable_automatic_scroll: bool,
    pub on_inset_change: Option<OnInsetChangeCallback>,
}

impl Clone for KeyboardSpaceOptions {
    fn clone(&self) -> Self {
        Self {
            extra_height: self.extra_height,
            extra_scroll_height: self.extra_scroll_height,
            bottom_offset: self.bottom_offset,
            minimum_inset: self.minimum_inset,
            keyboard_opening_time_ms: self.keyboard_opening_time_ms,
            reset_target: self.reset_target,
            restore_mode: self.restore_mode,
            disable_automatic_scroll: self.disable_automatic_scroll,
            on_inset_change: self.on_inset_change.clone(),
        }
    }
}

impl Default for KeyboardSpaceOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardSpaceOptions {
    pub fn new() -> Self {
        Self {
            extra_height: 75.0,
            extra_scroll_height: 0.0,
            bottom_offset: 0.0,
            minimum_inset: 0.0,
            keyboard_opening_time_ms: 250,
            reset_target: None,
            restore_mode: RestoreMode::Remember,
            disable_automatic_scroll: false,
            on_inset_change: None,
        }
    }

    pub fn with_extra_height(mut self, extra_height: f64) -> Self {
        self.extra_height = extra_height;
        self
    }

    pub fn with_extra_scroll_height(mut self, extra_scroll_height: f64) -> Self {
        self.extra_scroll_height = extra_scroll_height;
        self
    }

    pub fn with_bottom_offset(mut self, bottom_offset: f64) -> Self {
        self.bottom_offset = bottom_offset;
        self
    }

    /// Sets the baseline inset. Negative or non-finite values are treated as zero.
    pub fn with_minimum_inset(mut self, minimum_inset: f64) -> Self {
        self.minimum_inset = minimum_inset;
        self
    }

    pub fn with_keyboard_opening_time_ms(mut self, delay_ms: u64) -> Self {
        self.keyboard_opening_time_ms = delay_ms;
        self
    }

    pub fn with_reset_target(mut self, reset_target: Option<Offset>) -> Self {
        self.reset_target = reset_target;
        self
    }

    pub fn with_restore_mode(mut self, restore_mode: RestoreMode) -> Self {
        self.restore_mode = restore_mode;
        self
    }

    pub fn with_disable_automatic_scroll(mut self, disable: bool) -> Self {
        self.disable_automatic_scroll = disable;
        self
    }

    pub fn with_on_inset_change(
        mut self,
        on_inset_change: Option<impl Fn(InsetChange, f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_inset_change = on_inset_change.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn effective_minimum_inset(&self) -> f64 {
        if self.minimum_inset.is_finite() {
            self.minimum_inset.max(0.0)
        } else {
            0.0
        }
    }

    /// Whether close events clamp instead of restoring a remembered/explicit position.
    pub(crate) fn clamps_on_close(&self) -> bool {
        self.reset_target.is_none() && self.restore_mode == RestoreMode::ClampToContent
    }
}

impl core::fmt::Debug for KeyboardSpaceOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardSpaceOptions")
            .field("extra_height", &self.extra_height)
            .field("extra_scroll_height", &self.extra_scroll_height)
            .field("bottom_offset", &self.bottom_offset)
            .field("minimum_inset", &self.minimum_inset)
            .field("keyboard_opening_time_ms", &self.keyboard_opening_time_ms)
            .field("reset_target", &self.reset_target)
            .field("restore_mode", &self.restore_mode)
            .field("disable_automatic_scroll", &self.disable_automatic_scroll)
            .finish_non_exhaustive()
    }
}
