use crate::{FieldHandle, Host, Offset};

/// A stateless façade over the host's scroll primitives.
///
/// Every command is fire-and-forget: when the host cannot serve it (not mounted, no responder,
/// torn down) the command is dropped without retrying or queueing. The next geometry event
/// re-derives everything from current state.
pub struct ScrollCommands<'a, H: ?Sized> {
    host: &'a mut H,
}

impl<'a, H: Host + ?Sized> ScrollCommands<'a, H> {
    pub fn new(host: &'a mut H) -> Self {
        Self { host }
    }

    pub fn scroll_to_position(&mut self, offset: Offset, animated: bool) {
        ktrace!(x = offset.x, y = offset.y, animated, "scroll_to_position");
        if let Err(_err) = self.host.scroll_to(offset, animated) {
            kdebug!(error = %_err, "scroll_to_position dropped");
        }
    }

    pub fn scroll_to_end(&mut self, animated: bool) {
        ktrace!(animated, "scroll_to_end");
        if let Err(_err) = self.host.scroll_to_end(animated) {
            kdebug!(error = %_err, "scroll_to_end dropped");
        }
    }

    /// Asks the host to bring `field` into view with `clearance` above the keyboard (animated).
    pub fn scroll_field_into_view(&mut self, field: FieldHandle, clearance: f64) {
        ktrace!(field = field.0, clearance, "scroll_field_into_view");
        if let Err(_err) = self.host.scroll_field_into_view(field, clearance, true) {
            kdebug!(error = %_err, field = field.0, "scroll_field_into_view dropped");
        }
    }

    /// Pushes a new bottom inset to the host. Returns `false` when the host rejected it.
    pub fn set_bottom_inset(&mut self, inset: f64) -> bool {
        match self.host.set_bottom_inset(inset) {
            Ok(()) => true,
            Err(_err) => {
                kdebug!(error = %_err, inset, "set_bottom_inset dropped");
                false
            }
        }
    }
}
