use alloc::sync::Arc;
use alloc::vec::Vec;

use keyboard_space::{
    FieldHandle, Host, HostError, KeyboardSpaceCoordinator, KeyboardSpaceOptions, NodeId, Offset,
};

use crate::{KeyboardEvent, KeyboardEventKind, KeyboardEventSource, ListenerId, ViewEvent};

/// A callback receiving every scroll offset after the coordinator has recorded it.
pub type OnScrollCallback = Arc<dyn Fn(Offset) + Send + Sync>;

/// A framework-neutral keyboard-aware scroll view.
///
/// Holds exactly one coordinator and forwards host events and imperative commands to it. The
/// keyboard listeners registered in `new` are removed on `teardown` or drop, whichever comes
/// first, through the same cleanup path.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_keyboard_event` when the keyboard source fires a registered listener
/// - `on_view_event` for layout/content-size/scroll notifications
/// - `tick(now_ms)` each frame/timer tick (for deferred focused-field scrolls)
pub struct KeyboardAwareView<H: Host, S: KeyboardEventSource> {
    c: KeyboardSpaceCoordinator<H>,
    source: S,
    listeners: Vec<(ListenerId, KeyboardEventKind)>,
    on_scroll: Option<OnScrollCallback>,
}

impl<H: Host, S: KeyboardEventSource> KeyboardAwareView<H, S> {
    /// Builds the coordinator and registers the show/hide listeners.
    ///
    /// If a registration fails, listeners registered so far are removed before returning.
    pub fn new(host: H, source: S, options: KeyboardSpaceOptions) -> Result<Self, HostError> {
        let mut view = Self {
            c: KeyboardSpaceCoordinator::new(host, options),
            source,
            listeners: Vec::with_capacity(2),
            on_scroll: None,
        };
        for kind in [KeyboardEventKind::WillShow, KeyboardEventKind::WillHide] {
            let id = view.source.add_listener(kind)?;
            atrace!(id = id.0, kind = ?kind, "listener registered");
            view.listeners.push((id, kind));
        }
        Ok(view)
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(Offset) + Send + Sync + 'static>,
    ) -> Self {
        self.set_on_scroll(on_scroll);
        self
    }

    pub fn set_on_scroll(&mut self, on_scroll: Option<impl Fn(Offset) + Send + Sync + 'static>) {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    pub fn coordinator(&self) -> &KeyboardSpaceCoordinator<H> {
        &self.c
    }

    pub fn coordinator_mut(&mut self) -> &mut KeyboardSpaceCoordinator<H> {
        &mut self.c
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The listeners currently registered by this view.
    pub fn listeners(&self) -> impl Iterator<Item = ListenerId> + '_ {
        self.listeners.iter().map(|(id, _)| *id)
    }

    /// Routes a keyboard notification for listener `id` to the coordinator.
    ///
    /// Events for ids this view did not register, or whose kind does not match the
    /// registration, are ignored.
    pub fn on_keyboard_event(&mut self, id: ListenerId, event: KeyboardEvent, now_ms: u64) {
        let registered = self
            .listeners
            .iter()
            .any(|(lid, kind)| *lid == id && *kind == event.kind());
        if !registered {
            atrace!(id = id.0, "ignoring event for unknown listener");
            return;
        }
        match event {
            KeyboardEvent::WillShow(geometry) => self.c.on_keyboard_open(geometry, now_ms),
            KeyboardEvent::WillHide => self.c.on_keyboard_close(),
        }
    }

    pub fn on_view_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Layout { height } => self.c.on_viewport_layout(height),
            ViewEvent::ContentSizeChange { height } => self.c.on_content_size_change(height),
            ViewEvent::Scroll(offset) => {
                self.c.on_scroll(offset);
                if let Some(cb) = &self.on_scroll {
                    cb(offset);
                }
            }
            ViewEvent::AnimatedValue(y) => self.c.on_animated_value(y),
        }
    }

    /// Advances deferred scrolls. Returns how many fired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.c.tick(now_ms)
    }

    /// Replaces the options and replays the current keyboard state against them.
    pub fn set_options(&mut self, options: KeyboardSpaceOptions, now_ms: u64) {
        self.c.set_options(options, now_ms);
    }

    pub fn scroll_to_focused_input(
        &mut self,
        field: Option<FieldHandle>,
        extra_height: Option<f64>,
        now_ms: u64,
    ) {
        self.c.scroll_to_focused_input(field, extra_height, now_ms);
    }

    pub fn scroll_to_focused_input_with_node(
        &mut self,
        node: NodeId,
        extra_height: Option<f64>,
        now_ms: u64,
    ) {
        self.c
            .scroll_to_focused_input_with_node(node, extra_height, now_ms);
    }

    pub fn scroll_to_position(&mut self, x: f64, y: f64, animated: bool) {
        self.c.scroll_to_position(x, y, animated);
    }

    pub fn scroll_to_end(&mut self, animated: bool) {
        self.c.scroll_to_end(animated);
    }

    pub fn suppress_next_restore(&mut self) {
        self.c.suppress_next_restore();
    }

    /// Removes every listener and drops the view.
    pub fn teardown(mut self) {
        self.release_listeners();
    }

    fn release_listeners(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        adebug!(count = self.listeners.len(), "releasing keyboard listeners");
        for (id, _) in self.listeners.drain(..) {
            self.source.remove_listener(id);
        }
    }
}

impl<H: Host, S: KeyboardEventSource> Drop for KeyboardAwareView<H, S> {
    fn drop(&mut self) {
        self.release_listeners();
    }
}

impl<H: Host + core::fmt::Debug, S: KeyboardEventSource + core::fmt::Debug> core::fmt::Debug
    for KeyboardAwareView<H, S>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyboardAwareView")
            .field("c", &self.c)
            .field("source", &self.source)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
