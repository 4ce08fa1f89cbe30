//! Deferred construction of an expensive resource.
//!
//! `NotLoaded -> Loading -> Ready` and never back. A load that never
//! resolves simply leaves the resource in `Loading`, and callers keep
//! showing their placeholder.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    NotLoaded,
    Loading,
    Ready,
}

#[derive(Debug)]
pub enum LazyResource<T> {
    NotLoaded,
    Loading,
    Ready(T),
}

impl<T> Default for LazyResource<T> {
    fn default() -> Self {
        LazyResource::NotLoaded
    }
}

impl<T> LazyResource<T> {
    pub fn new() -> Self {
        LazyResource::NotLoaded
    }

    /// Mark the resource as needed. Returns `true` exactly once, on the
    /// `NotLoaded -> Loading` edge; the caller then starts the load.
    pub fn request(&mut self) -> bool {
        match self {
            LazyResource::NotLoaded => {
                log::debug!("[loader] NotLoaded -> Loading");
                *self = LazyResource::Loading;
                true
            }
            LazyResource::Loading | LazyResource::Ready(_) => false,
        }
    }

    /// Complete a pending load. Ignored unless the resource is `Loading`,
    /// so a late or duplicate completion never replaces a live instance.
    pub fn resolve(&mut self, value: T) -> bool {
        match self {
            LazyResource::Loading => {
                log::debug!("[loader] Loading -> Ready");
                *self = LazyResource::Ready(value);
                true
            }
            LazyResource::NotLoaded | LazyResource::Ready(_) => false,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        match self {
            LazyResource::NotLoaded => LoadPhase::NotLoaded,
            LazyResource::Loading => LoadPhase::Loading,
            LazyResource::Ready(_) => LoadPhase::Ready,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, LazyResource::Ready(_))
    }

    /// Whether the placeholder should occupy the slot.
    #[inline]
    pub fn shows_placeholder(&self) -> bool {
        !self.is_ready()
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            LazyResource::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            LazyResource::Ready(v) => Some(v),
            _ => None,
        }
    }
}
