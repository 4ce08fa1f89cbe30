// Host-side tests for the lazy resource state machine.

use portal_core::*;

#[test]
fn first_request_starts_loading_once() {
    let mut r: LazyResource<&str> = LazyResource::new();
    assert_eq!(r.phase(), LoadPhase::NotLoaded);
    assert!(r.shows_placeholder());
    assert!(r.request());
    assert_eq!(r.phase(), LoadPhase::Loading);
    assert!(!r.request());
    assert!(r.shows_placeholder());
    assert!(r.get().is_none());
}

#[test]
fn resolve_moves_to_ready() {
    let mut r = LazyResource::new();
    r.request();
    assert!(r.resolve(7));
    assert_eq!(r.phase(), LoadPhase::Ready);
    assert!(!r.shows_placeholder());
    assert_eq!(r.get(), Some(&7));
}

#[test]
fn ready_never_reverts() {
    let mut r = LazyResource::new();
    r.request();
    r.resolve(1);
    assert!(!r.request());
    assert!(!r.resolve(2));
    assert_eq!(r.phase(), LoadPhase::Ready);
    assert_eq!(r.get(), Some(&1));
}

#[test]
fn updates_flow_into_live_instance() {
    let mut r = LazyResource::new();
    r.request();
    r.resolve(vec![1]);
    if let Some(v) = r.get_mut() {
        v.push(2);
    }
    assert_eq!(r.get(), Some(&vec![1, 2]));
}

#[test]
fn resolve_without_request_is_ignored() {
    let mut r = LazyResource::new();
    assert!(!r.resolve(3));
    assert_eq!(r.phase(), LoadPhase::NotLoaded);
}

#[test]
fn stalled_load_keeps_placeholder() {
    let mut r: LazyResource<()> = LazyResource::new();
    r.request();
    for _ in 0..100 {
        assert!(!r.request());
    }
    assert_eq!(r.phase(), LoadPhase::Loading);
    assert!(r.shows_placeholder());
}
