use crate::Offset;

/// What to do with the scroll position when the keyboard closes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestoreTarget {
    /// A one-shot suppression was pending: leave the scroll position alone.
    Suppressed,
    /// Scroll to the explicit reset target configured at construction.
    Explicit(Offset),
    /// Scroll back to the offset captured when the keyboard opened.
    Remembered(Offset),
    /// Nothing was remembered: scroll to the origin.
    Origin,
}

impl RestoreTarget {
    /// The offset to scroll to, or `None` when the restore is suppressed.
    pub fn offset(&self) -> Option<Offset> {
        match self {
            Self::Suppressed => None,
            Self::Explicit(o) | Self::Remembered(o) => Some(*o),
            Self::Origin => Some(Offset::ORIGIN),
        }
    }
}

/// Remembers where to return when the keyboard closes.
///
/// Priority on close: suppression, then the explicit target, then the remembered offset, then
/// the origin.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionMemory {
    explicit_reset_target: Option<Offset>,
    remembered_offset: Option<Offset>,
    suppress_next_restore: bool,
}

impl PositionMemory {
    pub fn new(explicit_reset_target: Option<Offset>) -> Self {
        Self {
            explicit_reset_target,
            remembered_offset: None,
            suppress_next_restore: false,
        }
    }

    pub fn explicit_reset_target(&self) -> Option<Offset> {
        self.explicit_reset_target
    }

    pub fn remembered_offset(&self) -> Option<Offset> {
        self.remembered_offset
    }

    pub fn is_restore_suppressed(&self) -> bool {
        self.suppress_next_restore
    }

    /// Captures `current` as the offset to restore, once per keyboard-open cycle.
    ///
    /// Nothing is captured when an explicit target exists, when a suppression is pending, or
    /// when this cycle already captured an offset. Returns `true` when `current` was stored.
    pub fn capture(&mut self, current: Offset) -> bool {
        if self.explicit_reset_target.is_some()
            || self.suppress_next_restore
            || self.remembered_offset.is_some()
        {
            return false;
        }
        self.remembered_offset = Some(current);
        true
    }

    /// Arms the one-shot suppression for the next close.
    pub fn suppress_next_restore(&mut self) {
        self.suppress_next_restore = true;
    }

    /// Resolves the restore target for a close event and ends the cycle.
    ///
    /// Consumes the suppression flag and the remembered offset; the explicit target is kept.
    pub fn take_restore_target(&mut self) -> RestoreTarget {
        let remembered = self.remembered_offset.take();
        if core::mem::replace(&mut self.suppress_next_restore, false) {
            return RestoreTarget::Suppressed;
        }
        if let Some(target) = self.explicit_reset_target {
            return RestoreTarget::Explicit(target);
        }
        match remembered {
            Some(o) => RestoreTarget::Remembered(o),
            None => RestoreTarget::Origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_once_per_cycle() {
        let mut m = PositionMemory::new(None);
        assert!(m.capture(Offset::new(0.0, 120.0)));
        assert!(!m.capture(Offset::new(0.0, 300.0)));
        assert_eq!(
            m.take_restore_target(),
            RestoreTarget::Remembered(Offset::new(0.0, 120.0))
        );
        assert_eq!(m.remembered_offset(), None);
        assert_eq!(m.take_restore_target(), RestoreTarget::Origin);
    }

    #[test]
    fn explicit_target_wins_and_blocks_capture() {
        let mut m = PositionMemory::new(Some(Offset::new(5.0, 5.0)));
        assert!(!m.capture(Offset::new(0.0, 120.0)));
        assert_eq!(
            m.take_restore_target(),
            RestoreTarget::Explicit(Offset::new(5.0, 5.0))
        );
        assert_eq!(m.explicit_reset_target(), Some(Offset::new(5.0, 5.0)));
    }

    #[test]
    fn suppression_is_one_shot() {
        let mut m = PositionMemory::new(None);
        m.suppress_next_restore();
        assert!(!m.capture(Offset::new(0.0, 40.0)));
        assert_eq!(m.take_restore_target(), RestoreTarget::Suppressed);
        assert!(!m.is_restore_suppressed());
        assert_eq!(RestoreTarget::Suppressed.offset(), None);

        assert!(m.capture(Offset::new(0.0, 40.0)));
        assert_eq!(
            m.take_restore_target().offset(),
            Some(Offset::new(0.0, 40.0))
        );
    }
}
