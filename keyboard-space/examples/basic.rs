use keyboard_space::{
    FieldHandle, Host, HostError, KeyboardGeometry, KeyboardSpaceCoordinator,
    KeyboardSpaceOptions, Offset, Rect,
};

/// A stand-in for a real scroll view: prints every request it receives.
struct PrintHost {
    focused: Option<FieldHandle>,
}

impl Host for PrintHost {
    fn focused_field(&self) -> Result<Option<FieldHandle>, HostError> {
        Ok(self.focused)
    }

    fn field_bounds(&self, _field: FieldHandle) -> Result<Option<Rect>, HostError> {
        Ok(Some(Rect::new(16.0, 760.0, 343.0, 44.0)))
    }

    fn is_descendant(&self, _field: FieldHandle) -> Result<bool, HostError> {
        Ok(true)
    }

    fn set_bottom_inset(&mut self, inset: f64) -> Result<(), HostError> {
        println!("host: content inset bottom={inset}");
        Ok(())
    }

    fn scroll_to(&mut self, offset: Offset, animated: bool) -> Result<(), HostError> {
        println!("host: scroll_to {offset:?} animated={animated}");
        Ok(())
    }

    fn scroll_to_end(&mut self, animated: bool) -> Result<(), HostError> {
        println!("host: scroll_to_end animated={animated}");
        Ok(())
    }

    fn scroll_field_into_view(
        &mut self,
        field: FieldHandle,
        clearance: f64,
        animated: bool,
    ) -> Result<(), HostError> {
        println!("host: scroll {field:?} into view clearance={clearance} animated={animated}");
        Ok(())
    }
}

fn main() {
    // A form inside a tab bar: 49pt are always reserved at the bottom.
    let mut c = KeyboardSpaceCoordinator::new(
        PrintHost {
            focused: Some(FieldHandle(42)),
        },
        KeyboardSpaceOptions::new().with_minimum_inset(49.0),
    );
    c.on_viewport_layout(700.0);
    c.on_content_size_change(1_600.0);
    c.on_scroll(Offset::new(0.0, 120.0));

    // The keyboard slides in; the focused field at y=760..804 ends up underneath it.
    c.on_keyboard_open(KeyboardGeometry::new(336.0, 476.0), 0);
    println!("inset={} pending={}", c.bottom_inset(), c.pending_scroll_count());

    // The adapter's timer loop.
    let mut now_ms = 0;
    while c.pending_scroll_count() > 0 {
        now_ms += 16;
        c.tick(now_ms);
    }

    // The host reports the resulting scroll, then the keyboard goes away.
    c.on_scroll(Offset::new(0.0, 410.0));
    c.on_keyboard_close();
    println!("inset={} open={}", c.bottom_inset(), c.is_keyboard_open());
}
