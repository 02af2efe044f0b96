use keyboard_space::{
    FieldHandle, Host, HostError, KeyboardGeometry, KeyboardSpaceOptions, Offset, Rect,
};
use keyboard_space_adapter::{
    KeyboardAwareView, KeyboardEvent, KeyboardEventKind, KeyboardEventSource, ListenerId,
    ViewEvent,
};

#[derive(Default)]
struct Keyboard {
    next: u64,
    live: Vec<(ListenerId, KeyboardEventKind)>,
}

impl KeyboardEventSource for Keyboard {
    fn add_listener(&mut self, kind: KeyboardEventKind) -> Result<ListenerId, HostError> {
        self.next += 1;
        let id = ListenerId(self.next);
        self.live.push((id, kind));
        println!("keyboard: +listener {id:?} {kind:?}");
        Ok(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.live.retain(|(l, _)| *l != id);
        println!("keyboard: -listener {id:?}");
    }
}

/// A scroll view that applies requests immediately, the way a real host would report them back.
#[derive(Default)]
struct ScrollView {
    offset: Offset,
    inset: f64,
}

impl Host for ScrollView {
    fn focused_field(&self) -> Result<Option<FieldHandle>, HostError> {
        Ok(Some(FieldHandle(1)))
    }

    fn field_bounds(&self, _field: FieldHandle) -> Result<Option<Rect>, HostError> {
        Ok(Some(Rect::new(0.0, 720.0 - self.offset.y, 320.0, 44.0)))
    }

    fn is_descendant(&self, _field: FieldHandle) -> Result<bool, HostError> {
        Ok(true)
    }

    fn set_bottom_inset(&mut self, inset: f64) -> Result<(), HostError> {
        self.inset = inset;
        Ok(())
    }

    fn scroll_to(&mut self, offset: Offset, _animated: bool) -> Result<(), HostError> {
        self.offset = offset;
        Ok(())
    }

    fn scroll_to_end(&mut self, _animated: bool) -> Result<(), HostError> {
        Ok(())
    }

    fn scroll_field_into_view(
        &mut self,
        _field: FieldHandle,
        clearance: f64,
        _animated: bool,
    ) -> Result<(), HostError> {
        self.offset.y += 300.0 + clearance;
        Ok(())
    }
}

fn main() -> Result<(), HostError> {
    // Example: one keyboard show/hide cycle through the adapter.
    //
    // An adapter would:
    // - forward keyboard notifications for the listener ids it registered
    // - forward layout/scroll notifications from the scroll view
    // - call tick(now_ms) from a frame loop / timer so deferred scrolls fire
    let mut view = KeyboardAwareView::new(
        ScrollView::default(),
        Keyboard::default(),
        KeyboardSpaceOptions::new().with_extra_height(40.0),
    )?
    .with_on_scroll(Some(|offset: Offset| println!("owner: scrolled to y={}", offset.y)));

    let show = view.source().live[0].0;
    let hide = view.source().live[1].0;

    view.on_view_event(ViewEvent::Layout { height: 800.0 });
    view.on_view_event(ViewEvent::ContentSizeChange { height: 1_400.0 });
    view.on_view_event(ViewEvent::Scroll(Offset::new(0.0, 60.0)));

    view.on_keyboard_event(
        show,
        KeyboardEvent::WillShow(KeyboardGeometry::new(320.0, 480.0)),
        0,
    );

    let mut now_ms = 0;
    while view.coordinator().pending_scroll_count() > 0 {
        now_ms += 16;
        view.tick(now_ms);
    }
    let y = view.coordinator().host().offset.y;
    view.on_view_event(ViewEvent::Scroll(Offset::new(0.0, y)));

    view.on_keyboard_event(hide, KeyboardEvent::WillHide, now_ms);
    let host = view.coordinator().host();
    println!("after hide: inset={} offset={:?}", host.inset, host.offset);

    view.teardown();
    Ok(())
}
