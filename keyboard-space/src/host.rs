use crate::{FieldHandle, NodeId, Offset, Rect};

/// Why a host call could not be served.
///
/// These are timing races around mount/unmount. The coordinator never surfaces them to its
/// caller: a failed call is logged and the operation becomes a no-op for that cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The viewport is not mounted yet.
    #[error("viewport is not mounted")]
    NotMounted,
    /// The viewport is mounted but has no scroll responder to drive.
    #[error("no scroll responder available")]
    NoResponder,
    /// The viewport was torn down.
    #[error("viewport was torn down")]
    Detached,
}

/// The rendering host that owns the real scroll surface.
///
/// The coordinator reads focus/geometry through this trait and requests scroll and inset
/// updates; it never draws or animates anything itself.
pub trait Host {
    /// The currently focused text field, if any.
    fn focused_field(&self) -> Result<Option<FieldHandle>, HostError>;

    /// On-screen bounds of `field` in window coordinates.
    ///
    /// `Ok(None)` means the field could not be measured (e.g. it was unmounted).
    fn field_bounds(&self, field: FieldHandle) -> Result<Option<Rect>, HostError>;

    /// Whether `field` lives inside this viewport's subtree.
    fn is_descendant(&self, field: FieldHandle) -> Result<bool, HostError>;

    /// Resolves a low-level node id into the field reference the scroll primitives expect.
    fn resolve_field(&self, node: NodeId) -> Result<Option<FieldHandle>, HostError> {
        Ok(Some(FieldHandle(node.0)))
    }

    /// Re-renders the viewport with a new bottom inset (content inset / padding).
    fn set_bottom_inset(&mut self, inset: f64) -> Result<(), HostError>;

    fn scroll_to(&mut self, offset: Offset, animated: bool) -> Result<(), HostError>;

    fn scroll_to_end(&mut self, animated: bool) -> Result<(), HostError>;

    /// Scrolls so that `field` sits at least `clearance` above the keyboard.
    fn scroll_field_into_view(
        &mut self,
        field: FieldHandle,
        clearance: f64,
        animated: bool,
    ) -> Result<(), HostError>;
}
