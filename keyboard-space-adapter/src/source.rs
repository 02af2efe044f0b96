use keyboard_space::HostError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardEventKind {
    WillShow,
    WillHide,
}

/// Identifies one registered listener on a [`KeyboardEventSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// The platform's global keyboard notifications.
///
/// Implementations hand out a fresh [`ListenerId`] per registration and deliver events for that
/// id (via [`crate::KeyboardAwareView::on_keyboard_event`]) until it is removed.
pub trait KeyboardEventSource {
    fn add_listener(&mut self, kind: KeyboardEventKind) -> Result<ListenerId, HostError>;

    /// Removes a listener. Removing an unknown id is a no-op.
    fn remove_listener(&mut self, id: ListenerId);
}
