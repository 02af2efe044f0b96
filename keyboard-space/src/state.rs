use crate::Offset;

/// A lightweight, serializable snapshot of the viewport geometry and scroll state.
///
/// `viewport_height`/`content_height` follow host layout events, `current_offset` follows every
/// scroll event (including animated ones), and `bottom_inset` is only ever written by the
/// coordinator. The coordinator keeps `bottom_inset >= minimum_inset`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub viewport_height: f64,
    pub content_height: f64,
    pub current_offset: Offset,
    pub bottom_inset: f64,
}

impl ViewportState {
    pub(crate) fn new(minimum_inset: f64) -> Self {
        Self {
            bottom_inset: minimum_inset,
            ..Self::default()
        }
    }

    /// The largest vertical offset reachable once the inset is back to `minimum_inset`.
    ///
    /// Never negative: content shorter than the viewport yields `0`.
    pub fn max_offset_y(&self, minimum_inset: f64) -> f64 {
        (self.content_height - self.viewport_height + minimum_inset).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_offset_accounts_for_minimum_inset() {
        let s = ViewportState {
            viewport_height: 600.0,
            content_height: 1000.0,
            ..ViewportState::new(50.0)
        };
        assert_eq!(s.max_offset_y(50.0), 450.0);
        assert_eq!(s.bottom_inset, 50.0);
    }

    #[test]
    fn max_offset_is_never_negative() {
        let s = ViewportState {
            viewport_height: 600.0,
            content_height: 100.0,
            ..ViewportState::default()
        };
        assert_eq!(s.max_offset_y(0.0), 0.0);
    }
}
