use crate::deferred::{DeferredQueue, DeferredScroll};
use crate::visibility::obscured_focused_field;
use crate::{
    FieldHandle, Host, InsetChange, KeyboardGeometry, KeyboardSpaceOptions, NodeId, Offset,
    PositionMemory, RestoreTarget, ScrollCommands, ViewportState,
};

/// The keyboard-reactive state machine bound to one scroll viewport.
///
/// This type is intentionally UI-agnostic:
/// - It owns the [`Host`] it drives, and nothing else is shared between viewports.
/// - Your adapter feeds it host events (`on_keyboard_open`, `on_scroll`, ...).
/// - Time is adapter-driven: deferred scrolls fire from `tick(now_ms)`.
///
/// Every event handler is a complete, synchronous state transition. Host failures never escape;
/// they turn the affected command into a no-op for that cycle.
#[derive(Debug)]
pub struct KeyboardSpaceCoordinator<H> {
    host: H,
    options: KeyboardSpaceOptions,
    viewport: ViewportState,
    memory: PositionMemory,
    keyboard: Option<KeyboardGeometry>,
    deferred: DeferredQueue,
}

impl<H: Host> KeyboardSpaceCoordinator<H> {
    /// Creates a coordinator in the keyboard-closed state.
    ///
    /// `options.reset_target` is fixed from here on; later `set_options` calls cannot change it.
    pub fn new(host: H, options: KeyboardSpaceOptions) -> Self {
        let minimum_inset = options.effective_minimum_inset();
        kdebug!(
            minimum_inset,
            restore_mode = ?options.restore_mode,
            has_reset_target = options.reset_target.is_some(),
            "KeyboardSpaceCoordinator::new"
        );
        Self {
            host,
            memory: PositionMemory::new(options.reset_target),
            viewport: ViewportState::new(minimum_inset),
            keyboard: None,
            deferred: DeferredQueue::default(),
            options,
        }
    }

    pub fn options(&self) -> &KeyboardSpaceOptions {
        &self.options
    }

    /// Replaces the options and re-derives state from the current keyboard state.
    ///
    /// While the keyboard is open, the last open geometry is applied again (inset and obscuring
    /// check, without recapturing the restore offset). While closed, the inset is reset to the
    /// new minimum.
    pub fn set_options(&mut self, mut options: KeyboardSpaceOptions, now_ms: u64) {
        if options.reset_target != self.options.reset_target {
            kwarn!("reset_target is fixed at construction; ignoring the new value");
            options.reset_target = self.options.reset_target;
        }
        self.options = options;
        ktrace!(options = ?self.options, "KeyboardSpaceCoordinator::set_options");

        match self.keyboard {
            Some(geometry) => self.apply_open(geometry, now_ms, false),
            None => {
                let minimum_inset = self.options.effective_minimum_inset();
                self.set_bottom_inset(minimum_inset, InsetChange::KeyboardHidden);
            }
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut KeyboardSpaceOptions), now_ms: u64) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns a snapshot of the viewport state.
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Returns a snapshot of the restore memory.
    pub fn memory(&self) -> PositionMemory {
        self.memory
    }

    pub fn bottom_inset(&self) -> f64 {
        self.viewport.bottom_inset
    }

    pub fn is_keyboard_open(&self) -> bool {
        self.keyboard.is_some()
    }

    /// The geometry of the last open event, until the keyboard closes.
    pub fn keyboard_geometry(&self) -> Option<KeyboardGeometry> {
        self.keyboard
    }

    pub fn pending_scroll_count(&self) -> usize {
        self.deferred.len()
    }

    pub fn pending_scrolls(&self) -> impl Iterator<Item = &DeferredScroll> {
        self.deferred.iter()
    }

    /// Handles a keyboard-open (or keyboard-frame-change) event.
    pub fn on_keyboard_open(&mut self, geometry: KeyboardGeometry, now_ms: u64) {
        kdebug!(
            height = geometry.height,
            screen_top = geometry.screen_top,
            now_ms,
            "keyboard open"
        );
        self.keyboard = Some(geometry);
        self.apply_open(geometry, now_ms, true);
    }

    /// Handles a keyboard-close event: shrinks the inset and restores the scroll position.
    pub fn on_keyboard_close(&mut self) {
        kdebug!("keyboard close");
        self.keyboard = None;
        let minimum_inset = self.options.effective_minimum_inset();
        self.set_bottom_inset(minimum_inset, InsetChange::KeyboardHidden);

        let target = self.memory.take_restore_target();
        if target == RestoreTarget::Suppressed {
            kdebug!("restore suppressed for this close");
            return;
        }

        if self.options.clamps_on_close() {
            let max_y = self.viewport.max_offset_y(minimum_inset);
            if self.viewport.current_offset.y > max_y {
                ktrace!(
                    y = self.viewport.current_offset.y,
                    max_y,
                    "clamping offset after close"
                );
                self.commands()
                    .scroll_to_position(Offset::new(0.0, max_y), true);
            }
            return;
        }

        if let Some(offset) = target.offset() {
            ktrace!(restore = ?target, "restoring offset after close");
            self.commands().scroll_to_position(offset, true);
        }
    }

    pub fn on_viewport_layout(&mut self, height: f64) {
        self.viewport.viewport_height = height;
    }

    pub fn on_content_size_change(&mut self, height: f64) {
        self.viewport.content_height = height;
    }

    /// Records a scroll offset reported by the host (user, programmatic or animated scrolls).
    pub fn on_scroll(&mut self, offset: Offset) {
        ktrace!(x = offset.x, y = offset.y, "on_scroll");
        self.viewport.current_offset = offset;
    }

    /// Records a vertical offset from an animated-value stream.
    pub fn on_animated_value(&mut self, y: f64) {
        self.viewport.current_offset.y = y;
    }

    /// Fires every deferred scroll due at `now_ms`, in scheduling order.
    ///
    /// Returns how many fired. Entries whose host call fails are dropped.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let due = self.deferred.take_due(now_ms);
        let fired = due.len();
        let mut commands = self.commands();
        for scroll in due {
            commands.scroll_field_into_view(scroll.field, scroll.clearance);
        }
        fired
    }

    pub fn scroll_to_position(&mut self, x: f64, y: f64, animated: bool) {
        self.commands()
            .scroll_to_position(Offset::new(x, y), animated);
    }

    pub fn scroll_to_end(&mut self, animated: bool) {
        self.commands().scroll_to_end(animated);
    }

    /// Schedules a scroll that brings a field into view once the keyboard has settled.
    ///
    /// `field = None` uses the currently focused field; with no focus this is a no-op.
    /// `extra_height = None` uses `options.extra_height`. The scroll fires from `tick` once
    /// `keyboard_opening_time_ms` has elapsed.
    pub fn scroll_to_focused_input(
        &mut self,
        field: Option<FieldHandle>,
        extra_height: Option<f64>,
        now_ms: u64,
    ) {
        let field = match field {
            Some(field) => field,
            None => match self.host.focused_field() {
                Ok(Some(field)) => field,
                Ok(None) => {
                    ktrace!("scroll_to_focused_input: nothing focused");
                    return;
                }
                Err(_err) => {
                    kdebug!(error = %_err, "scroll_to_focused_input dropped");
                    return;
                }
            },
        };
        let clearance = extra_height.unwrap_or(self.options.extra_height);
        let due_ms = now_ms.saturating_add(self.options.keyboard_opening_time_ms);
        ktrace!(field = field.0, clearance, due_ms, "scheduling focused-field scroll");
        self.deferred.push(DeferredScroll {
            due_ms,
            field,
            clearance,
        });
    }

    /// Like `scroll_to_focused_input`, starting from a low-level node id.
    ///
    /// The node is resolved through the host, and `options.extra_scroll_height` is added to the
    /// clearance.
    pub fn scroll_to_focused_input_with_node(
        &mut self,
        node: NodeId,
        extra_height: Option<f64>,
        now_ms: u64,
    ) {
        let field = match self.host.resolve_field(node) {
            Ok(Some(field)) => field,
            Ok(None) => {
                ktrace!(node = node.0, "node did not resolve to a field");
                return;
            }
            Err(_err) => {
                kdebug!(error = %_err, node = node.0, "resolve_field dropped");
                return;
            }
        };
        let clearance = extra_height.unwrap_or(self.options.extra_height)
            + self.options.extra_scroll_height;
        self.scroll_to_focused_input(Some(field), Some(clearance), now_ms);
    }

    /// Skips the restore on the next keyboard close, exactly once.
    ///
    /// Call this before moving the scroll position programmatically so the close does not
    /// fight the move.
    pub fn suppress_next_restore(&mut self) {
        ktrace!("suppress_next_restore");
        self.memory.suppress_next_restore();
    }

    fn commands(&mut self) -> ScrollCommands<'_, H> {
        ScrollCommands::new(&mut self.host)
    }

    fn apply_open(&mut self, geometry: KeyboardGeometry, now_ms: u64, capture: bool) {
        let minimum_inset = self.options.effective_minimum_inset();
        let target = open_inset(
            geometry.sanitized_height(),
            minimum_inset,
            self.options.bottom_offset,
        );
        self.set_bottom_inset(target, InsetChange::KeyboardShown);

        if !self.options.disable_automatic_scroll {
            self.scroll_obscured_field(geometry, now_ms);
        }

        if capture && !self.options.clamps_on_close() {
            let _captured = self.memory.capture(self.viewport.current_offset);
            ktrace!(captured = _captured, "restore offset capture");
        }
    }

    fn scroll_obscured_field(&mut self, geometry: KeyboardGeometry, now_ms: u64) {
        let found = obscured_focused_field(
            &self.host,
            geometry.screen_top,
            self.options.extra_height,
            self.options.bottom_offset,
            self.options.effective_minimum_inset(),
        );
        match found {
            Ok(Some(field)) => {
                let clearance = self.options.extra_height + self.options.extra_scroll_height;
                self.scroll_to_focused_input(Some(field), Some(clearance), now_ms);
            }
            Ok(None) => {}
            Err(_err) => {
                kdebug!(error = %_err, "obscuring check dropped");
            }
        }
    }

    fn set_bottom_inset(&mut self, inset: f64, reason: InsetChange) {
        if self.viewport.bottom_inset == inset {
            return;
        }
        ktrace!(inset, reason = ?reason, "bottom inset change");
        self.viewport.bottom_inset = inset;
        self.commands().set_bottom_inset(inset);
        if let Some(cb) = &self.options.on_inset_change {
            cb(reason, inset);
        }
    }
}

/// `max(minimum_inset, keyboard_height + minimum_inset - bottom_offset)`.
///
/// A non-finite `bottom_offset` yields `minimum_inset`.
fn open_inset(keyboard_height: f64, minimum_inset: f64, bottom_offset: f64) -> f64 {
    (keyboard_height + minimum_inset - bottom_offset).max(minimum_inset)
}
