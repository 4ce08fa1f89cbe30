//! Parameter bundle for the background-effect renderer.

use crate::config::PortalConfig;
use crate::constants::*;
use crate::device::DeviceTier;
use crate::memo::Memo;
use crate::sampler::PointerSignal;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    /// Rays follow the pointer.
    Hover,
    /// Rays rotate on their own; used when pointer tracking is off.
    Rotate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectParameters {
    pub animation_type: AnimationType,
    pub color_stops: Vec<String>,
    pub intensity: f32,
    pub speed: f32,
    pub distortion: f32,
    pub hover_dampness: f32,
    pub mouse_position: PointerSignal,
    pub ray_count: u32,
}

/// Everything the bundle depends on. Used as the memo key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectInputs {
    pub tier: DeviceTier,
    pub zoom_level: f32,
    pub pointer: PointerSignal,
}

impl EffectInputs {
    /// Mobile ignores zoom and pointer, so collapse them to keep the key stable.
    fn canonical(self) -> Self {
        match self.tier {
            DeviceTier::Mobile => Self {
                tier: DeviceTier::Mobile,
                zoom_level: 0.0,
                pointer: PointerSignal::CENTER,
            },
            DeviceTier::Desktop => self,
        }
    }
}

pub fn compose(config: &PortalConfig, inputs: EffectInputs) -> EffectParameters {
    let z = inputs.zoom_level;
    let (animation_type, intensity, speed, distortion, mouse_position) = match inputs.tier {
        DeviceTier::Mobile => (
            AnimationType::Rotate,
            MOBILE_INTENSITY,
            MOBILE_SPEED,
            MOBILE_DISTORTION,
            PointerSignal::CENTER,
        ),
        DeviceTier::Desktop => (
            AnimationType::Hover,
            DESKTOP_INTENSITY_BASE + z * DESKTOP_INTENSITY_SPAN,
            DESKTOP_SPEED_BASE + z * DESKTOP_SPEED_SPAN,
            DESKTOP_DISTORTION_BASE + z * DESKTOP_DISTORTION_SPAN,
            inputs.pointer,
        ),
    };
    EffectParameters {
        animation_type,
        color_stops: config.color_stops.clone(),
        intensity,
        speed,
        distortion,
        hover_dampness: config.hover_dampness,
        mouse_position,
        ray_count: config.ray_count,
    }
}

/// Memoized [`compose`]: the bundle is rebuilt only when tier, zoom or
/// pointer change.
#[derive(Debug)]
pub struct EffectComposer {
    config: PortalConfig,
    memo: Memo<EffectInputs, EffectParameters>,
}

impl EffectComposer {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            config,
            memo: Memo::new(),
        }
    }

    pub fn parameters(&mut self, inputs: EffectInputs) -> &EffectParameters {
        let config = &self.config;
        self.memo
            .get_or_compute(inputs.canonical(), |key| compose(config, *key))
    }

    /// How many times the bundle has been rebuilt.
    #[inline]
    pub fn recomputations(&self) -> u64 {
        self.memo.computations()
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into 0..1 RGBA.
pub fn parse_hex_color(s: &str) -> Option<[f32; 4]> {
    let hex = s.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let (r, g, b, a) = match hex.len() {
        3 => (nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17, 255),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some([r, g, b, a].map(|c| c as f32 / 255.0))
}

/// Pack up to [`MAX_COLOR_STOPS`] parseable stops for the shader.
/// Unparseable entries are skipped; an empty result falls back to white.
pub fn pack_color_stops(stops: &[String]) -> ([[f32; 4]; MAX_COLOR_STOPS], u32) {
    let mut out = [[0.0; 4]; MAX_COLOR_STOPS];
    let mut n = 0;
    for rgba in stops.iter().filter_map(|s| parse_hex_color(s)) {
        if n == MAX_COLOR_STOPS {
            break;
        }
        out[n] = rgba;
        n += 1;
    }
    if n == 0 {
        out[0] = [1.0; 4];
        n = 1;
    }
    (out, n as u32)
}
