//! Scroll-driven layer transitions.
//!
//! Every field of [`TransitionState`] is a pure function of the zoom level.
//! There is no history: the same zoom always yields the same state.

use crate::constants::{FADE_SPAN, FADE_START, PORTAL_DEPTH_SCALE, TITLE_FADE_RATE};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionState {
    pub zoom_level: f32,
    pub portal_depth: f32,
    pub fade_opacity: f32,
    pub content_opacity: f32,
    /// Raw `1 - 2 * zoom`. Negative past zoom 0.5; consumers clamp.
    pub title_opacity: f32,
}

impl TransitionState {
    pub fn from_zoom(zoom_level: f32) -> Self {
        Self {
            zoom_level,
            portal_depth: zoom_level * PORTAL_DEPTH_SCALE,
            fade_opacity: fade_opacity(zoom_level),
            content_opacity: content_opacity(zoom_level),
            title_opacity: 1.0 - TITLE_FADE_RATE * zoom_level,
        }
    }
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::from_zoom(0.0)
    }
}

#[inline]
pub fn fade_opacity(zoom_level: f32) -> f32 {
    if zoom_level < FADE_START {
        1.0
    } else {
        1.0 - (zoom_level - FADE_START) / FADE_SPAN
    }
}

#[inline]
pub fn content_opacity(zoom_level: f32) -> f32 {
    if zoom_level <= FADE_START {
        0.0
    } else {
        (zoom_level - FADE_START) / FADE_SPAN
    }
}

/// Recomputes the state only when the zoom level actually changes.
#[derive(Clone, Debug, Default)]
pub struct TransitionController {
    state: TransitionState,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new state if `zoom_level` differs from the current one.
    pub fn set_zoom(&mut self, zoom_level: f32) -> Option<TransitionState> {
        if zoom_level == self.state.zoom_level {
            return None;
        }
        self.state = TransitionState::from_zoom(zoom_level);
        Some(self.state)
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }
}
