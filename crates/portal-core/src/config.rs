use crate::constants::*;
use std::time::Duration;

/// Tunables for the continuous input pipeline and the background effect.
///
/// `Default` reproduces the page's shipped behavior; tests and alternate
/// pages may override individual fields.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalConfig {
    pub mobile_breakpoint_px: f64,
    pub pointer_sample_interval: Duration,
    pub color_stops: Vec<String>,
    pub hover_dampness: f32,
    pub ray_count: u32,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            pointer_sample_interval: Duration::from_millis(POINTER_SAMPLE_INTERVAL_MS),
            color_stops: DEFAULT_COLOR_STOPS.iter().map(|s| s.to_string()).collect(),
            hover_dampness: HOVER_DAMPNESS,
            ray_count: RAY_COUNT,
        }
    }
}
