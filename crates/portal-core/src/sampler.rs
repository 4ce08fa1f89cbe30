//! Rate limiting of pointer samples and per-frame coalescing of scroll reads.

use crate::constants::POINTER_CENTER;
use crate::device::DeviceTier;
use glam::Vec2;
use instant::Instant;
use serde::Serialize;
use std::time::Duration;

/// Normalized pointer position inside the tracked container, both axes in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    pub const CENTER: PointerSignal = PointerSignal {
        x: POINTER_CENTER[0],
        y: POINTER_CENTER[1],
    };

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl Default for PointerSignal {
    fn default() -> Self {
        Self::CENTER
    }
}

impl From<Vec2> for PointerSignal {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Viewport-relative bounding box of the element the pointer is tracked against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map client coordinates into the container's unit square, clamped per axis.
/// A degenerate rectangle maps to the center.
#[inline]
pub fn normalize_in_rect(client_x: f32, client_y: f32, rect: ContainerRect) -> PointerSignal {
    let size = Vec2::new(rect.width, rect.height);
    if !(size.x > 0.0 && size.y > 0.0) {
        return PointerSignal::CENTER;
    }
    let local = Vec2::new(client_x - rect.left, client_y - rect.top) / size;
    if !local.is_finite() {
        return PointerSignal::CENTER;
    }
    local.clamp(Vec2::ZERO, Vec2::ONE).into()
}

/// Drops pointer events that arrive sooner than `interval` after the last
/// accepted one. Dropped events are not queued.
#[derive(Clone, Debug)]
pub struct PointerSampler {
    interval: Duration,
    last_accepted: Option<Instant>,
    signal: PointerSignal,
}

impl PointerSampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
            signal: PointerSignal::CENTER,
        }
    }

    /// Feed one raw pointer-move. Returns the published signal when accepted.
    pub fn sample(
        &mut self,
        tier: DeviceTier,
        now: Instant,
        client_x: f32,
        client_y: f32,
        rect: ContainerRect,
    ) -> Option<PointerSignal> {
        if tier.is_mobile() {
            return None;
        }
        if let Some(last) = self.last_accepted {
            let elapsed = if now > last { now - last } else { Duration::ZERO };
            if elapsed < self.interval {
                return None;
            }
        }
        self.last_accepted = Some(now);
        self.signal = normalize_in_rect(client_x, client_y, rect);
        Some(self.signal)
    }

    /// Pin the signal to the center, used when the tier switches to Mobile.
    pub fn reset_to_center(&mut self) {
        self.signal = PointerSignal::CENTER;
        self.last_accepted = None;
    }

    #[inline]
    pub fn signal(&self) -> PointerSignal {
        self.signal
    }
}

/// `clamp(scroll_y / viewport_height, 0, 1)`; non-finite or empty viewports read as 0.
#[inline]
pub fn scroll_progress(scroll_y: f64, viewport_height: f64) -> f32 {
    if !(viewport_height > 0.0) {
        return 0.0;
    }
    let p = scroll_y / viewport_height;
    if p.is_finite() {
        p.clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Coalesces scroll notifications so that progress is recomputed at most
/// once per animation frame.
#[derive(Clone, Debug, Default)]
pub struct ScrollSampler {
    pending: bool,
    progress: f32,
    recomputations: u64,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw scroll event. Returns `true` when the caller must
    /// schedule a frame callback; `false` when one is already pending.
    pub fn notify(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Frame callback: read the offset, publish progress, clear the flag.
    pub fn on_frame(&mut self, scroll_y: f64, viewport_height: f64) -> f32 {
        self.progress = scroll_progress(scroll_y, viewport_height);
        self.pending = false;
        self.recomputations += 1;
        self.progress
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
