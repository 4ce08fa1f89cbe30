//! Single-threaded observable state holders and event emitters.
//!
//! Listeners are called synchronously after the internal borrow is released,
//! so a listener may read (or even set) the holder it is subscribed to.
//! Dropping the returned [`Subscription`] removes the listener.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    listeners: SmallVec<[(u64, Listener<T>); 4]>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: SmallVec::new(),
        }
    }
}

fn add_listener<T: 'static>(
    registry: &Rc<RefCell<Registry<T>>>,
    listener: Listener<T>,
) -> Subscription {
    let id = {
        let mut r = registry.borrow_mut();
        let id = r.next_id;
        r.next_id += 1;
        r.listeners.push((id, listener));
        id
    };
    let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(registry);
    Subscription {
        release: Some(Box::new(move || {
            if let Some(r) = weak.upgrade() {
                r.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })),
    }
}

fn notify<T>(registry: &RefCell<Registry<T>>, value: &T) {
    let snapshot: SmallVec<[Listener<T>; 4]> = registry
        .borrow()
        .listeners
        .iter()
        .map(|(_, l)| l.clone())
        .collect();
    for listener in snapshot {
        listener(value);
    }
}

/// Registration handle; the listener is removed when this is dropped or
/// [`Subscription::dispose`] is called.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn dispose(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// A value cell with change notification. Cloning shares the same cell.
pub struct Observable<T> {
    value: Rc<RefCell<T>>,
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            registry: self.registry.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value` and notify listeners. Equal values are not re-published.
    pub fn set(&self, value: T) -> bool {
        {
            let mut cur = self.value.borrow_mut();
            if *cur == value {
                return false;
            }
            *cur = value.clone();
        }
        notify(&self.registry, &value);
        true
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        add_listener(&self.registry, Rc::new(listener))
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Fire-and-forget named events.
pub struct EventEmitter<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for EventEmitter<E> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<E: 'static> Default for EventEmitter<E> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }
}

impl<E: 'static> EventEmitter<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: E) {
        notify(&self.registry, &event);
    }

    pub fn subscribe(&self, listener: impl Fn(&E) + 'static) -> Subscription {
        add_listener(&self.registry, Rc::new(listener))
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}
