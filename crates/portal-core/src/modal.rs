//! Detail-overlay navigation over the catalog, treated as circular.

use crate::catalog::{Catalog, CatalogEntry};
use crate::observe::{Observable, Subscription};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSelection {
    #[default]
    Closed,
    Open(usize),
}

impl ModalSelection {
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            ModalSelection::Closed => None,
            ModalSelection::Open(i) => Some(i),
        }
    }
}

/// Transition requests a collaborator may issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalCommand {
    Select(usize),
    Next,
    Previous,
    Close,
}

/// Sole owner of the modal selection. Collaborators request transitions
/// and observe the result; they never assign the state.
pub struct ModalNavigator {
    catalog: Catalog,
    selection: Observable<ModalSelection>,
}

impl ModalNavigator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Observable::new(ModalSelection::Closed),
        }
    }

    pub fn apply(&self, cmd: ModalCommand) {
        match cmd {
            ModalCommand::Select(i) => self.select(i),
            ModalCommand::Next => self.next(),
            ModalCommand::Previous => self.previous(),
            ModalCommand::Close => self.close(),
        }
    }

    pub fn select(&self, index: usize) {
        let n = self.catalog.len();
        if index >= n {
            log::warn!("[modal] select({}) out of range for {} entries", index, n);
            return;
        }
        self.transition(ModalSelection::Open(index));
    }

    pub fn next(&self) {
        if let ModalSelection::Open(i) = self.selection() {
            let n = self.catalog.len();
            self.transition(ModalSelection::Open((i + 1) % n));
        }
    }

    pub fn previous(&self) {
        if let ModalSelection::Open(i) = self.selection() {
            let n = self.catalog.len();
            self.transition(ModalSelection::Open((i + n - 1) % n));
        }
    }

    pub fn close(&self) {
        if self.selection() != ModalSelection::Closed {
            self.transition(ModalSelection::Closed);
        }
    }

    #[inline]
    pub fn selection(&self) -> ModalSelection {
        self.selection.get()
    }

    /// The open entry with its position, or `None` while closed.
    pub fn current(&self) -> Option<(&'static CatalogEntry, usize)> {
        let i = self.selection().index()?;
        self.catalog.get(i).map(|e| (e, i))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn subscribe(&self, listener: impl Fn(&ModalSelection) + 'static) -> Subscription {
        self.selection.subscribe(listener)
    }

    fn transition(&self, next: ModalSelection) {
        let prev = self.selection();
        if self.selection.set(next) {
            log::debug!("[modal] {:?} -> {:?}", prev, next);
        }
    }
}
