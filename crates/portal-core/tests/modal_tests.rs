// Host-side tests for the detail-overlay navigator.

use portal_core::*;
use std::cell::RefCell;
use std::rc::Rc;

fn navigator() -> ModalNavigator {
    ModalNavigator::new(Catalog::members().expect("built-in catalog is valid"))
}

#[test]
fn starts_closed() {
    let nav = navigator();
    assert_eq!(nav.selection(), ModalSelection::Closed);
    assert!(nav.current().is_none());
}

#[test]
fn previous_from_first_wraps_to_last() {
    let nav = navigator();
    let n = nav.catalog().len();
    nav.select(0);
    nav.previous();
    assert_eq!(nav.selection(), ModalSelection::Open(n - 1));
}

#[test]
fn next_from_last_wraps_to_first() {
    let nav = navigator();
    let n = nav.catalog().len();
    nav.select(n - 1);
    nav.next();
    assert_eq!(nav.selection(), ModalSelection::Open(0));
}

#[test]
fn full_cycle_returns_to_start() {
    let nav = navigator();
    let n = nav.catalog().len();
    nav.select(2);
    for _ in 0..n {
        nav.next();
    }
    assert_eq!(nav.selection(), ModalSelection::Open(2));
}

#[test]
fn navigation_is_noop_while_closed() {
    let nav = navigator();
    nav.next();
    nav.previous();
    nav.close();
    assert_eq!(nav.selection(), ModalSelection::Closed);
}

#[test]
fn select_replaces_open_entry_and_close_returns_to_closed() {
    let nav = navigator();
    nav.select(1);
    nav.select(3);
    let (entry, i) = nav.current().unwrap();
    assert_eq!(i, 3);
    assert_eq!(entry.id, nav.catalog().get(3).unwrap().id);
    nav.close();
    assert_eq!(nav.selection(), ModalSelection::Closed);
}

#[test]
fn out_of_range_select_is_ignored() {
    let nav = navigator();
    nav.select(1);
    nav.select(nav.catalog().len());
    assert_eq!(nav.selection(), ModalSelection::Open(1));
}

#[test]
fn single_entry_catalog_wraps_onto_itself() {
    static ONE: &[CatalogEntry] = &[CatalogEntry {
        id: "solo",
        name: "Solo",
        role: "Member",
        handle: "@solo",
        theme_color: "#fff",
        gradient: "none",
        bio: "",
        committees: &[],
        projects: &[],
        image: "/solo.jpg",
    }];
    let nav = ModalNavigator::new(Catalog::new(ONE).unwrap());
    nav.select(0);
    nav.next();
    assert_eq!(nav.selection(), ModalSelection::Open(0));
    nav.previous();
    assert_eq!(nav.selection(), ModalSelection::Open(0));
}

#[test]
fn subscribers_see_each_transition_once() {
    let nav = navigator();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = nav.subscribe(move |s| sink.borrow_mut().push(*s));

    nav.apply(ModalCommand::Select(0));
    nav.apply(ModalCommand::Select(0));
    nav.apply(ModalCommand::Next);
    nav.apply(ModalCommand::Close);
    nav.apply(ModalCommand::Close);

    assert_eq!(
        *seen.borrow(),
        vec![
            ModalSelection::Open(0),
            ModalSelection::Open(1),
            ModalSelection::Closed
        ]
    );
}

#[test]
fn keys_map_to_commands_only_when_open() {
    assert_eq!(modal_command_for_key("ArrowRight", ModalSelection::Closed), None);
    let open = ModalSelection::Open(0);
    assert_eq!(modal_command_for_key("ArrowRight", open), Some(ModalCommand::Next));
    assert_eq!(modal_command_for_key("ArrowLeft", open), Some(ModalCommand::Previous));
    assert_eq!(modal_command_for_key("Escape", open), Some(ModalCommand::Close));
    assert_eq!(modal_command_for_key("a", open), None);
}

#[test]
fn catalog_rejects_empty_and_duplicates() {
    static EMPTY: &[CatalogEntry] = &[];
    assert_eq!(Catalog::new(EMPTY).unwrap_err(), CatalogError::Empty);

    static DUP: &[CatalogEntry] = &[
        CatalogEntry {
            id: "x",
            name: "X",
            role: "",
            handle: "",
            theme_color: "",
            gradient: "",
            bio: "",
            committees: &[],
            projects: &[],
            image: "",
        },
        CatalogEntry {
            id: "x",
            name: "X2",
            role: "",
            handle: "",
            theme_color: "",
            gradient: "",
            bio: "",
            committees: &[],
            projects: &[],
            image: "",
        },
    ];
    assert_eq!(
        Catalog::new(DUP).unwrap_err(),
        CatalogError::DuplicateId("x".to_string())
    );
}

#[test]
fn catalog_positions_follow_declaration_order() {
    let c = Catalog::members().unwrap();
    for (i, e) in c.entries().iter().enumerate() {
        assert_eq!(c.position(e.id), Some(i));
    }
    assert_eq!(c.position("nobody"), None);
}
