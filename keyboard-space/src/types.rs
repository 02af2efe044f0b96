/// A scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An on-screen rectangle in window coordinates (as measured by the host).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Keyboard frame at the moment of an open event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardGeometry {
    pub height: f64,
    /// Screen-space y coordinate of the keyboard's top edge.
    pub screen_top: f64,
}

impl KeyboardGeometry {
    pub const fn new(height: f64, screen_top: f64) -> Self {
        Self { height, screen_top }
    }

    /// Height with non-finite or negative values treated as zero.
    pub(crate) fn sanitized_height(&self) -> f64 {
        if self.height.is_finite() && self.height > 0.0 {
            self.height
        } else {
            0.0
        }
    }
}

/// A host-level reference to a text field, as expected by [`crate::Host`] scroll primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldHandle(pub u64);

/// A low-level node id that the host can resolve into a [`FieldHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);
