use crate::{FieldHandle, Host, HostError, Rect};

/// How far (in points) the bottom of `field` reaches past the usable area above the keyboard.
///
/// Positive means obscured. The field's bottom is shifted up by `bottom_offset` and
/// `minimum_inset`; the usable area ends `extra_height` above `keyboard_top`.
pub fn obscured_amount(
    field: Rect,
    keyboard_top: f64,
    extra_height: f64,
    bottom_offset: f64,
    minimum_inset: f64,
) -> f64 {
    (field.bottom() - bottom_offset - minimum_inset) - (keyboard_top - extra_height)
}

/// Whether `field` is covered by a keyboard whose top edge sits at `keyboard_top`.
pub fn is_obscured(
    field: Rect,
    keyboard_top: f64,
    extra_height: f64,
    bottom_offset: f64,
    minimum_inset: f64,
) -> bool {
    obscured_amount(
        field,
        keyboard_top,
        extra_height,
        bottom_offset,
        minimum_inset,
    ) > 0.0
}

/// Returns the focused field when it belongs to this viewport and is obscured.
///
/// `Ok(None)` covers every "nothing to do" case: no focus, a field outside this viewport, or a
/// field the host could not measure.
pub(crate) fn obscured_focused_field<H: Host>(
    host: &H,
    keyboard_top: f64,
    extra_height: f64,
    bottom_offset: f64,
    minimum_inset: f64,
) -> Result<Option<FieldHandle>, HostError> {
    let Some(field) = host.focused_field()? else {
        return Ok(None);
    };
    if !host.is_descendant(field)? {
        ktrace!(field = field.0, "focused field is outside this viewport");
        return Ok(None);
    }
    let Some(bounds) = host.field_bounds(field)? else {
        return Ok(None);
    };
    let amount = obscured_amount(bounds, keyboard_top, extra_height, bottom_offset, minimum_inset);
    ktrace!(field = field.0, amount, "focused field obscuring check");
    Ok((amount > 0.0).then_some(field))
}
