// Host-side tests for observable state holders, emitters and memoization.

use portal_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn set_notifies_only_on_change() {
    let cell = Observable::new(0.0_f32);
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    let _sub = cell.subscribe(move |_| h.set(h.get() + 1));

    assert!(cell.set(0.5));
    assert!(!cell.set(0.5));
    assert!(cell.set(0.75));
    assert_eq!(hits.get(), 2);
    assert_eq!(cell.get(), 0.75);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let cell = Observable::new(1u32);
    let hits = Rc::new(Cell::new(0));
    let h = hits.clone();
    let sub = cell.subscribe(move |_| h.set(h.get() + 1));
    assert_eq!(cell.listener_count(), 1);

    cell.set(2);
    drop(sub);
    assert_eq!(cell.listener_count(), 0);
    cell.set(3);
    assert_eq!(hits.get(), 1);
}

#[test]
fn dispose_releases_explicitly() {
    let cell = Observable::new(1u32);
    let sub = cell.subscribe(|_| {});
    sub.dispose();
    assert_eq!(cell.listener_count(), 0);
}

#[test]
fn listener_may_read_the_cell_it_observes() {
    let cell = Observable::new(1u32);
    let reader = cell.clone();
    let seen = Rc::new(Cell::new(0));
    let s = seen.clone();
    let _sub = cell.subscribe(move |v| {
        assert_eq!(reader.get(), *v);
        s.set(*v);
    });
    cell.set(9);
    assert_eq!(seen.get(), 9);
}

#[test]
fn subscription_outliving_cell_is_harmless() {
    let sub = {
        let cell = Observable::new(0u8);
        cell.subscribe(|_| {})
    };
    drop(sub);
}

#[test]
fn emitter_delivers_events_in_order() {
    let emitter = EventEmitter::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let _sub = emitter.subscribe(move |e: &DrawerEvent| sink.borrow_mut().push(*e));

    emitter.emit(DrawerEvent::Opened);
    emitter.emit(DrawerEvent::Closed);
    assert_eq!(*log.borrow(), vec![DrawerEvent::Opened, DrawerEvent::Closed]);
}

#[test]
fn memo_computes_once_per_key() {
    let mut m: Memo<u32, String> = Memo::new();
    assert_eq!(m.get_or_compute(1, |k| format!("v{}", k)), "v1");
    assert_eq!(m.get_or_compute(1, |_| unreachable!()), "v1");
    assert_eq!(m.get_or_compute(2, |k| format!("v{}", k)), "v2");
    assert_eq!(m.computations(), 2);
    m.invalidate();
    m.get_or_compute(2, |k| format!("v{}", k));
    assert_eq!(m.computations(), 3);
}
