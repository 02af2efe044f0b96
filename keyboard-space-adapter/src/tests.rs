use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::Mutex;

use keyboard_space::{
    FieldHandle, Host, HostError, KeyboardGeometry, KeyboardSpaceOptions, Offset, Rect,
};

#[derive(Debug, Default)]
struct SourceState {
    next_id: u64,
    active: Vec<(ListenerId, KeyboardEventKind)>,
    removed: Vec<ListenerId>,
    fail_on: Option<KeyboardEventKind>,
}

/// A keyboard source whose bookkeeping outlives the view under test.
#[derive(Clone, Debug, Default)]
struct SharedSource(Arc<Mutex<SourceState>>);

impl SharedSource {
    fn id_for(&self, kind: KeyboardEventKind) -> ListenerId {
        let state = self.0.lock().unwrap();
        state
            .active
            .iter()
            .find(|(_, k)| *k == kind)
            .map(|(id, _)| *id)
            .unwrap()
    }
}

impl KeyboardEventSource for SharedSource {
    fn add_listener(&mut self, kind: KeyboardEventKind) -> Result<ListenerId, HostError> {
        let mut state = self.0.lock().unwrap();
        if state.fail_on == Some(kind) {
            return Err(HostError::NotMounted);
        }
        state.next_id += 1;
        let id = ListenerId(state.next_id);
        state.active.push((id, kind));
        Ok(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        let mut state = self.0.lock().unwrap();
        state.active.retain(|(lid, _)| *lid != id);
        state.removed.push(id);
    }
}

#[derive(Debug, Default)]
struct ScrollHost {
    focused: Option<FieldHandle>,
    scrolled_to: Vec<Offset>,
    into_view: Vec<(FieldHandle, f64)>,
    ends: usize,
}

impl Host for ScrollHost {
    fn focused_field(&self) -> Result<Option<FieldHandle>, HostError> {
        Ok(self.focused)
    }

    fn field_bounds(&self, _field: FieldHandle) -> Result<Option<Rect>, HostError> {
        Ok(Some(Rect::new(0.0, 760.0, 320.0, 40.0)))
    }

    fn is_descendant(&self, _field: FieldHandle) -> Result<bool, HostError> {
        Ok(true)
    }

    fn set_bottom_inset(&mut self, _inset: f64) -> Result<(), HostError> {
        Ok(())
    }

    fn scroll_to(&mut self, offset: Offset, _animated: bool) -> Result<(), HostError> {
        self.scrolled_to.push(offset);
        Ok(())
    }

    fn scroll_to_end(&mut self, _animated: bool) -> Result<(), HostError> {
        self.ends += 1;
        Ok(())
    }

    fn scroll_field_into_view(
        &mut self,
        field: FieldHandle,
        clearance: f64,
        _animated: bool,
    ) -> Result<(), HostError> {
        self.into_view.push((field, clearance));
        Ok(())
    }
}

fn view(source: &SharedSource) -> KeyboardAwareView<ScrollHost, SharedSource> {
    KeyboardAwareView::new(
        ScrollHost {
            focused: Some(FieldHandle(5)),
            ..ScrollHost::default()
        },
        source.clone(),
        KeyboardSpaceOptions::new(),
    )
    .unwrap()
}

#[test]
fn registers_show_and_hide_listeners() {
    let source = SharedSource::default();
    let v = view(&source);
    assert_eq!(v.listeners().count(), 2);
    assert_eq!(source.0.lock().unwrap().active.len(), 2);
}

#[test]
fn teardown_and_drop_remove_every_listener_once() {
    let source = SharedSource::default();
    view(&source).teardown();
    {
        let state = source.0.lock().unwrap();
        assert!(state.active.is_empty());
        assert_eq!(state.removed, alloc::vec![ListenerId(1), ListenerId(2)]);
    }

    drop(view(&source));
    let state = source.0.lock().unwrap();
    assert!(state.active.is_empty());
    assert_eq!(state.removed.len(), 4);
}

#[test]
fn failed_registration_releases_earlier_listeners() {
    let source = SharedSource::default();
    source.0.lock().unwrap().fail_on = Some(KeyboardEventKind::WillHide);

    let err = KeyboardAwareView::new(
        ScrollHost::default(),
        source.clone(),
        KeyboardSpaceOptions::new(),
    )
    .unwrap_err();
    assert_eq!(err, HostError::NotMounted);

    let state = source.0.lock().unwrap();
    assert!(state.active.is_empty());
    assert_eq!(state.removed, alloc::vec![ListenerId(1)]);
}

#[test]
fn keyboard_cycle_scrolls_field_and_restores_offset() {
    let source = SharedSource::default();
    let mut v = view(&source);
    let show = source.id_for(KeyboardEventKind::WillShow);
    let hide = source.id_for(KeyboardEventKind::WillHide);

    v.on_view_event(ViewEvent::Layout { height: 700.0 });
    v.on_view_event(ViewEvent::ContentSizeChange { height: 1_500.0 });
    v.on_view_event(ViewEvent::Scroll(Offset::new(0.0, 80.0)));

    v.on_keyboard_event(show, KeyboardEvent::WillShow(KeyboardGeometry::new(300.0, 500.0)), 0);
    assert_eq!(v.coordinator().bottom_inset(), 300.0);
    assert!(v.coordinator().is_keyboard_open());

    assert_eq!(v.tick(250), 1);
    assert_eq!(v.coordinator().host().into_view, alloc::vec![(FieldHandle(5), 75.0)]);

    v.on_view_event(ViewEvent::Scroll(Offset::new(0.0, 360.0)));
    v.on_keyboard_event(hide, KeyboardEvent::WillHide, 400);
    assert_eq!(v.coordinator().bottom_inset(), 0.0);
    assert_eq!(
        v.coordinator().host().scrolled_to,
        alloc::vec![Offset::new(0.0, 80.0)]
    );
}

#[test]
fn events_for_unknown_or_mismatched_listeners_are_ignored() {
    let source = SharedSource::default();
    let mut v = view(&source);
    let hide = source.id_for(KeyboardEventKind::WillHide);

    let geometry = KeyboardGeometry::new(300.0, 500.0);
    v.on_keyboard_event(ListenerId(99), KeyboardEvent::WillShow(geometry), 0);
    v.on_keyboard_event(hide, KeyboardEvent::WillShow(geometry), 0);
    assert!(!v.coordinator().is_keyboard_open());
    assert_eq!(v.coordinator().bottom_inset(), 0.0);
}

#[test]
fn scroll_events_reach_the_owner_callback() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let source = SharedSource::default();
    let mut v = view(&source).with_on_scroll(Some({
        let seen = Arc::clone(&seen);
        move |offset: Offset| seen.lock().unwrap().push(offset)
    }));

    v.on_view_event(ViewEvent::Scroll(Offset::new(0.0, 12.0)));
    v.on_view_event(ViewEvent::AnimatedValue(30.0));

    assert_eq!(*seen.lock().unwrap(), alloc::vec![Offset::new(0.0, 12.0)]);
    assert_eq!(v.coordinator().viewport().current_offset, Offset::new(0.0, 30.0));
}

#[test]
fn imperative_handle_forwards_to_coordinator() {
    let source = SharedSource::default();
    let mut v = view(&source);
    let show = source.id_for(KeyboardEventKind::WillShow);
    let hide = source.id_for(KeyboardEventKind::WillHide);

    v.scroll_to_position(0.0, 40.0, false);
    v.scroll_to_end(true);
    v.scroll_to_focused_input(None, Some(10.0), 0);
    v.scroll_to_focused_input_with_node(keyboard_space::NodeId(8), None, 0);
    assert_eq!(v.tick(250), 2);

    v.on_keyboard_event(show, KeyboardEvent::WillShow(KeyboardGeometry::new(300.0, 500.0)), 300);
    v.suppress_next_restore();
    v.on_keyboard_event(hide, KeyboardEvent::WillHide, 400);

    let host = v.coordinator().host();
    assert_eq!(host.scrolled_to, alloc::vec![Offset::new(0.0, 40.0)]);
    assert_eq!(host.ends, 1);
    assert_eq!(
        host.into_view,
        alloc::vec![(FieldHandle(5), 10.0), (FieldHandle(8), 75.0)]
    );
}

#[test]
fn set_options_replays_open_keyboard() {
    let source = SharedSource::default();
    let mut v = view(&source);
    let show = source.id_for(KeyboardEventKind::WillShow);

    v.on_keyboard_event(show, KeyboardEvent::WillShow(KeyboardGeometry::new(300.0, 500.0)), 0);
    v.set_options(KeyboardSpaceOptions::new().with_minimum_inset(49.0), 10);
    assert_eq!(v.coordinator().bottom_inset(), 349.0);
    assert_eq!(v.coordinator().options().minimum_inset, 49.0);
}
