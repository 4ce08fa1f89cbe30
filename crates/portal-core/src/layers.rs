use crate::constants::TITLE_SCALE_PER_DEPTH;
use crate::transition::TransitionState;

/// Presentation values for the stacked page layers, derived from one
/// [`TransitionState`]. This is the point where raw opacities get clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyles {
    pub effect_opacity: f32,
    pub vignette_opacity: f32,
    pub title_opacity: f32,
    pub title_scale: f32,
    pub content_opacity: f32,
    pub content_interactive: bool,
}

#[inline]
pub fn visible_opacity(raw: f32) -> f32 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 1.0)
    }
}

impl LayerStyles {
    pub fn from_transition(t: &TransitionState) -> Self {
        let content_opacity = visible_opacity(t.content_opacity);
        Self {
            effect_opacity: visible_opacity(t.fade_opacity),
            vignette_opacity: visible_opacity(t.fade_opacity),
            title_opacity: visible_opacity(t.title_opacity),
            title_scale: 1.0 + t.portal_depth * TITLE_SCALE_PER_DEPTH,
            content_opacity,
            content_interactive: content_opacity > 0.0,
        }
    }
}
